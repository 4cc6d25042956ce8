use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Credential;
use crate::domain::prompt::CompletionPrompt;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    model: String,
    credential: Credential,
}

impl OpenAiClient {
    pub fn new(credential: Credential) -> Self {
        Self::with_endpoint(credential, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(credential: Credential, endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            credential,
        }
    }
}

#[async_trait]
impl LanguageModelService for OpenAiClient {
    async fn complete(&self, prompt: &CompletionPrompt) -> AppResult<String> {
        let request_body = ChatCompletionRequest::new(&self.model, prompt);
        debug!(endpoint = %self.endpoint, model = %self.model, "requesting completion");

        let bearer = format!("Bearer {}", self.credential.as_str());
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "completion service responded");
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }
}

/// Pulls `choices[0].message.content` out of a response body.
fn extract_content(body: &str) -> AppResult<String> {
    let payload: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|err| AppError::MalformedResponse(format!("invalid JSON body: {err}")))?;

    let choices = payload
        .choices
        .ok_or_else(|| AppError::MalformedResponse("missing `choices`".to_string()))?;
    let first = choices
        .into_iter()
        .next()
        .ok_or_else(|| AppError::MalformedResponse("`choices` is empty".to_string()))?;
    first
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| {
            AppError::MalformedResponse("missing `choices[0].message.content`".to_string())
        })
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: &'a str, prompt: &'a CompletionPrompt) -> Self {
        let mut messages = Vec::with_capacity(2);
        if !prompt.system_instruction.trim().is_empty() {
            messages.push(ChatMessage {
                role: "system",
                content: &prompt.system_instruction,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &prompt.user_content,
        });
        Self { model, messages }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
