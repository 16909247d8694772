use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Speaker roles for a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged turn of a chat exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("model service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("model not found: {0}")]
    ModelNotFound(String),
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("invalid response")]
    InvalidResponse,
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

/// Text completion against a language model.
///
/// `history` holds prior turns, oldest first. Implementations send it
/// followed by `prompt` as a user turn and return the generated text.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str, history: &[Message]) -> Result<String, LLMError>;
}

#[async_trait]
impl<'a, C: Completer + ?Sized> Completer for &'a C {
    async fn complete(&self, prompt: &str, history: &[Message]) -> Result<String, LLMError> {
        (**self).complete(prompt, history).await
    }
}

#[async_trait]
impl<C: Completer + ?Sized> Completer for Arc<C> {
    async fn complete(&self, prompt: &str, history: &[Message]) -> Result<String, LLMError> {
        (**self).complete(prompt, history).await
    }
}

/// Send a single prompt with no history.
pub async fn ask<C: Completer + ?Sized>(completer: &C, prompt: &str) -> Result<String, LLMError> {
    completer.complete(prompt, &[]).await
}
