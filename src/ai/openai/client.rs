use crate::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin authenticated JSON transport for an OpenAI-compatible API.
pub struct OpenAiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", url, e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error (status {}): {}", status, error_text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Auth(format!("status {}: {}", status, error_text))
                }
                _ => Error::Api(format!("status {}: {}", status, error_text)),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse completion response: {}\nBody: {}", e, body);
            Error::MalformedResponse(format!("Failed to parse response body: {}", e))
        })
    }

    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.post("/v1/chat/completions", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::openai::test_support;
    use wiremock::{MockServer, ResponseTemplate};

    fn make_client(server: &MockServer) -> OpenAiHttpClient {
        OpenAiHttpClient::new("key".to_string(), server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![],
            max_tokens: 10,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;
        test_support::post(test_support::CHAT_COMPLETIONS_PATH)
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .chat_completion(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(ref msg) if msg.contains("bad key")));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        test_support::post(test_support::CHAT_COMPLETIONS_PATH)
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .chat_completion(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_invalid_body_maps_to_malformed_response() {
        let server = MockServer::start().await;
        test_support::post(test_support::CHAT_COMPLETIONS_PATH)
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .chat_completion(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_ignored() {
        let server = MockServer::start().await;
        test_support::post(test_support::CHAT_COMPLETIONS_PATH)
            .respond_with(ResponseTemplate::new(200).set_body_json(test_support::text_reply("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiHttpClient::new(
            "key".to_string(),
            format!("{}/", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();
        let response = client.chat_completion(&request()).await.unwrap();
        assert_eq!(response.choices.len(), 1);
    }
}
