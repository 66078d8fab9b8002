//! Line-based read-evaluate-print loop. Text only; images go through the
//! HTTP surface.

use crate::pipeline::Pipeline;
use crate::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "You: ";
const FAREWELL: &str = "Goodbye!";

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Run until `exit`/`quit` or end of input.
pub async fn run<R, W>(pipeline: &Pipeline, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            writer.write_all(b"\n").await?;
            break;
        };

        if is_exit_command(&line) {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let reply = pipeline.respond(Some(input), None).await;
        writer
            .write_all(format!("Assistant: {}\n", reply).as_bytes())
            .await?;
    }

    tracing::info!("Terminal session ended");
    writer.write_all(format!("{}\n", FAREWELL).as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockCompletionClient;
    use crate::config::Prompts;
    use crate::filter::ContentFilter;
    use std::sync::Arc;

    fn pipeline(client: &MockCompletionClient) -> Pipeline {
        Pipeline::new(
            Prompts::default(),
            Arc::new(client.clone()),
            ContentFilter::default(),
        )
    }

    async fn run_with_input(client: &MockCompletionClient, input: &str) -> String {
        let mut output = Vec::new();
        run(&pipeline(client), input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_commands_any_case() {
        for line in ["exit", "quit", "EXIT", "Quit", "  exit \n"] {
            assert!(is_exit_command(line), "{line:?} should exit");
        }
        for line in ["", "exiting", "please quit", "hello"] {
            assert!(!is_exit_command(line), "{line:?} should not exit");
        }
    }

    #[tokio::test]
    async fn test_exit_terminates_without_calling_pipeline() {
        let client = MockCompletionClient::new();
        let output = run_with_input(&client, "QUIT\nhello\n").await;

        assert_eq!(client.get_call_count(), 0);
        assert_eq!(output, "You: Goodbye!\n");
    }

    #[tokio::test]
    async fn test_lines_are_answered_until_exit() {
        let client = MockCompletionClient::new()
            .with_response("Hi there!".to_string())
            .with_response("Still here.".to_string());
        let output = run_with_input(&client, "hello\n\nhow are you?\nexit\n").await;

        assert_eq!(client.get_call_count(), 2);
        assert_eq!(
            output,
            "You: Assistant: Hi there!\nYou: You: Assistant: Still here.\nYou: Goodbye!\n"
        );
    }

    #[tokio::test]
    async fn test_end_of_input_ends_loop() {
        let client = MockCompletionClient::new();
        let output = run_with_input(&client, "hello").await;

        assert_eq!(client.get_call_count(), 1);
        assert!(output.ends_with("You: \nGoodbye!\n"));
    }
}
