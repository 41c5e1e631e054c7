// file: src/client/chat.rs
// description: single-document question requests against the backend /chat endpoint
// reference: https://docs.rs/reqwest

use crate::config::BackendConfig;
use crate::error::{QaError, RequestFailure, Result};
use crate::models::{ChatRequest, ChatResponse, QueryResult};
use crate::utils::Validator;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const CHAT_PATH: &str = "/chat";

/// Longest slice of an error response body kept in the failure message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Joins the base URL and `/chat`, ignoring trailing slashes on the base.
pub fn chat_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH)
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl ChatClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Validator::validate_url(base_url)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(base_url),
            timeout,
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.url, config.timeout()).map_err(|e| match e {
            QaError::Validation(message) => QaError::Config(message),
            other => other,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends one question scoped to `document` and returns the answer text.
    ///
    /// No retries: the first failure is returned as is.
    pub async fn ask(
        &self,
        question: &str,
        document: &str,
    ) -> std::result::Result<String, RequestFailure> {
        let request = ChatRequest::new(question, document);

        debug!("POST {} for document {}", self.endpoint, document);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailure::Status {
                status: status.as_u16(),
                body: Validator::truncate_text(body.trim(), MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let parsed: ChatResponse = serde_json::from_slice(&body)
            .map_err(|e| RequestFailure::Decode(e.to_string()))?;

        let answer = parsed.into_answer();
        debug!("Received {} chars for document {}", answer.len(), document);
        Ok(answer)
    }

    /// Like [`ask`](Self::ask), but a failure becomes an `Error:` answer.
    /// For callers asking a single document; batches go through
    /// `BatchOrchestrator`, which also needs the outcome itself.
    pub async fn answer(&self, question: &str, document: &str) -> QueryResult {
        QueryResult::from_outcome(document, &self.ask(question, document).await)
    }

    fn classify(&self, error: reqwest::Error) -> RequestFailure {
        if error.is_timeout() {
            RequestFailure::Timeout(self.timeout)
        } else if error.is_connect() {
            RequestFailure::Connect(error.to_string())
        } else if error.is_decode() {
            RequestFailure::Decode(error.to_string())
        } else {
            RequestFailure::Transport(error.to_string())
        }
    }
}
