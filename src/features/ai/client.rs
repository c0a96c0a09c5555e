use std::sync::Arc;

use reqwest::Url;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::ai::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::features::ai::helpers::{build_prompt, extract_one_word};

const ERROR_BODY_SNIPPET: usize = 512;

pub struct GeminiClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.ai.timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn ask_one_word(&self, question: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .ai
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("GEMINI_API_KEY is not set".to_string()))?;

        let url = self.endpoint(api_key)?;
        let payload = GenerateContentRequest::single_prompt(build_prompt(question));

        let response = self
            .http_client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| AppError::upstream(format!("network error contacting gemini: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let snippet = text.chars().take(ERROR_BODY_SNIPPET).collect::<String>();
            return Err(AppError::upstream(format!(
                "gemini request failed with {status}: {snippet}"
            )));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| AppError::upstream(format!("failed to decode gemini response: {err}")))?;

        Ok(extract_one_word(&parsed))
    }

    fn endpoint(&self, api_key: &str) -> Result<Url, AppError> {
        let base = self.config.ai.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/v1beta/models/{}:generateContent",
            self.config.ai.model
        ))
        .map_err(|err| AppError::internal(format!("invalid gemini url: {err}")))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use httpmock::prelude::*;
    use serde_json::json;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn config(api_key: Option<&str>, base_url: &str) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            port: 0,
            official_email: "test@example.com".to_string(),
            disable_proxy: true,
            ai: AiConfig {
                api_key: api_key.map(str::to_string),
                model: "gemini-1.5-flash".to_string(),
                base_url: base_url.to_string(),
                timeout_secs: 5,
            },
        })
    }

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(config(Some("secret"), &server.base_url())).expect("client")
    }

    #[test]
    fn endpoint_targets_generate_content() {
        let client = GeminiClient::new(config(
            Some("secret"),
            "https://generativelanguage.googleapis.com/",
        ))
        .expect("client");
        let url = client.endpoint("secret").expect("url");
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=secret"
        );
    }

    #[tokio::test]
    async fn missing_api_key_is_a_service_failure() {
        let client = GeminiClient::new(config(None, "http://127.0.0.1:9")).expect("client");
        let error = client
            .ask_one_word("capital of France?")
            .await
            .expect_err("no key configured");
        assert!(matches!(error, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn sends_prompt_and_returns_first_word() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(GENERATE_PATH)
                    .query_param("key", "secret")
                    .json_body(json!({
                        "contents": [
                            {"parts": [{"text": "Answer in one word only: capital of France?"}]}
                        ]
                    }));
                then.status(200).json_body(json!({
                    "candidates": [
                        {"content": {"parts": [{"text": " Paris, of course"}], "role": "model"}}
                    ]
                }));
            })
            .await;

        let answer = client_for(&server)
            .ask_one_word("capital of France?")
            .await
            .expect("answer");

        mock.assert_async().await;
        assert_eq!(answer, "Paris,");
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(GENERATE_PATH);
                then.status(503).body("model overloaded");
            })
            .await;

        let error = client_for(&server)
            .ask_one_word("capital of France?")
            .await
            .expect_err("503 should fail");

        mock.assert_async().await;
        match error {
            AppError::Upstream(message) => {
                assert!(message.contains("503"), "unexpected message: {message}");
                assert!(message.contains("model overloaded"), "unexpected message: {message}");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_upstream_error() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path(GENERATE_PATH);
                then.status(200)
                    .header("content-type", "application/json")
                    .body("<html>not json</html>");
            })
            .await;

        let error = client_for(&server)
            .ask_one_word("capital of France?")
            .await
            .expect_err("html body should fail to decode");

        match error {
            AppError::Upstream(message) => {
                assert!(message.contains("decode"), "unexpected message: {message}");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_candidates_fall_back_over_the_wire() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path(GENERATE_PATH);
                then.status(200).json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
            })
            .await;

        let answer = client_for(&server)
            .ask_one_word("capital of France?")
            .await
            .expect("fallback answer");

        assert_eq!(answer, crate::features::ai::FALLBACK_ANSWER);
    }
}
