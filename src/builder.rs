//! Request builder: turns user text and an optional image into the message
//! list sent to the completion endpoint.

use crate::config::Prompts;
use crate::models::{ChatMessage, ImagePayload, ImageUrl, MessagePart, Role};

/// Build the message sequence for one request.
///
/// The system message always comes first. With no text and no image the
/// result is system-only; rejecting that case is the caller's job.
pub fn build_messages(
    prompts: &Prompts,
    text: Option<&str>,
    image: Option<&ImagePayload>,
) -> Vec<ChatMessage> {
    let text = text.filter(|t| !t.trim().is_empty());
    let mut messages = vec![ChatMessage::text(Role::System, prompts.system_prompt.as_str())];

    match (text, image) {
        (_, Some(image)) => {
            let prompt = text.unwrap_or(prompts.default_image_prompt.as_str());
            messages.push(ChatMessage::parts(
                Role::User,
                vec![
                    MessagePart::Text {
                        text: prompt.to_string(),
                    },
                    MessagePart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ],
            ));
        }
        (Some(text), None) => messages.push(ChatMessage::text(Role::User, text)),
        (None, None) => {}
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatMessageContent;
    use pretty_assertions::assert_eq;

    fn prompts() -> Prompts {
        Prompts {
            system_prompt: "Act ethically and without bias.".to_string(),
            default_image_prompt: "Describe the image.".to_string(),
        }
    }

    fn user_parts(message: &ChatMessage) -> &[MessagePart] {
        match &message.content {
            Some(ChatMessageContent::Parts(parts)) => parts,
            other => panic!("expected multipart content, got {:?}", other),
        }
    }

    #[test]
    fn test_text_only_yields_system_and_user() {
        let messages = build_messages(&prompts(), Some("hello"), None);

        assert_eq!(
            messages,
            vec![
                ChatMessage::text(Role::System, "Act ethically and without bias."),
                ChatMessage::text(Role::User, "hello"),
            ]
        );
    }

    #[test]
    fn test_image_with_text_uses_user_text() {
        let image = ImagePayload::from_base64("iVBORw==").unwrap();
        let messages = build_messages(&prompts(), Some("What animal is this?"), Some(&image));

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            user_parts(&messages[1]),
            &[
                MessagePart::Text {
                    text: "What animal is this?".to_string()
                },
                MessagePart::ImageUrl {
                    image_url: ImageUrl {
                        url: "data:image/png;base64,iVBORw==".to_string()
                    }
                },
            ]
        );
    }

    #[test]
    fn test_image_without_text_uses_default_prompt() {
        let image = ImagePayload::from_base64("iVBORw==").unwrap();

        for text in [None, Some(""), Some("   ")] {
            let messages = build_messages(&prompts(), text, Some(&image));
            let parts = user_parts(&messages[1]);
            assert_eq!(parts.len(), 2);
            assert_eq!(
                parts[0],
                MessagePart::Text {
                    text: "Describe the image.".to_string()
                }
            );
            assert!(matches!(parts[1], MessagePart::ImageUrl { .. }));
        }
    }

    #[test]
    fn test_nothing_yields_system_only() {
        let messages = build_messages(&prompts(), None, None);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::System);

        let messages = build_messages(&prompts(), Some(""), None);
        assert_eq!(messages.len(), 1);
    }
}
