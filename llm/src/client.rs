//! HTTP client for interacting with an Ollama language model server.
//!
//! This module provides the [`OllamaClient`] type which implements the
//! [`Completer`] trait on top of the chat endpoint. Responses are requested
//! whole; there is no streaming and no retry.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage, MessageRole},
    Ollama,
};
use tracing::debug;

use crate::config::ClientConfig;
use crate::traits::{Completer, LLMError, Message, Role};

pub struct OllamaClient {
    inner: Ollama,
    model: String,
    timeout: Option<Duration>,
}

impl OllamaClient {
    pub fn new(config: ClientConfig) -> Result<Self, LLMError> {
        let inner = Ollama::try_new(config.base_url.as_str())
            .map_err(|e| LLMError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        Ok(Self {
            inner,
            model: config.model,
            timeout: config.timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Names of the models installed on the server.
    pub async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        let models = self
            .bounded(self.inner.list_local_models())
            .await?
            .map_err(|e| self.failure(e.to_string()))?;
        Ok(models.into_iter().map(|m| m.name).collect())
    }

    /// Check that the configured model is installed.
    ///
    /// A bare name such as `llama3` also matches the `llama3:latest` tag.
    pub async fn ensure_model(&self) -> Result<(), LLMError> {
        let names = self.list_models().await?;
        if names.iter().any(|n| model_matches(n, &self.model)) {
            Ok(())
        } else {
            Err(LLMError::ModelNotFound(self.model.clone()))
        }
    }

    async fn bounded<F: Future>(&self, fut: F) -> Result<F::Output, LLMError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut).await.map_err(|_| {
                LLMError::ServiceUnavailable(format!("no reply within {}s", limit.as_secs_f32()))
            }),
            None => Ok(fut.await),
        }
    }

    fn failure(&self, detail: String) -> LLMError {
        classify_failure(&self.model, detail)
    }
}

/// Map a service error message onto the error taxonomy.
///
/// Ollama answers a request for a missing model with a body such as
/// `model "llama3" not found`. Only that message names a missing model; a
/// bare 404 or any other failure means the service could not do the work.
pub(crate) fn classify_failure(model: &str, detail: String) -> LLMError {
    if names_missing_model(&detail, model) {
        LLMError::ModelNotFound(model.to_string())
    } else {
        LLMError::ServiceUnavailable(detail)
    }
}

fn names_missing_model(detail: &str, model: &str) -> bool {
    // JSON error bodies escape the quotes around the name.
    let detail = detail.to_lowercase().replace('\\', "");
    let model = model.to_lowercase();
    ["\"", "'", ""].iter().any(|quote| {
        detail.contains(&format!("model {quote}{model}{quote} not found"))
    })
}

fn model_matches(installed: &str, wanted: &str) -> bool {
    installed == wanted
        || (!wanted.contains(':') && installed.strip_suffix(":latest") == Some(wanted))
}

fn to_chat_message(message: &Message) -> ChatMessage {
    let role = match message.role {
        Role::System => MessageRole::System,
        Role::User => MessageRole::User,
        Role::Assistant => MessageRole::Assistant,
    };
    ChatMessage::new(role, message.content.clone())
}

#[async_trait]
impl Completer for OllamaClient {
    async fn complete(&self, prompt: &str, history: &[Message]) -> Result<String, LLMError> {
        if prompt.trim().is_empty() {
            return Err(LLMError::EmptyPrompt);
        }
        let mut messages: Vec<ChatMessage> = history.iter().map(to_chat_message).collect();
        messages.push(ChatMessage::user(prompt.to_string()));
        debug!(
            model = %self.model,
            history = history.len(),
            prompt_chars = prompt.len(),
            "sending chat request"
        );
        let req = ChatMessageRequest::new(self.model.clone(), messages);
        let res = self
            .bounded(self.inner.send_chat_messages(req))
            .await?
            .map_err(|e| self.failure(e.to_string()))?;
        let text = res.message.content.trim().to_string();
        if text.is_empty() {
            return Err(LLMError::InvalidResponse);
        }
        debug!(model = %self.model, reply_chars = text.len(), "chat reply received");
        Ok(text)
    }
}
