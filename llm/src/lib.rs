//! Abstractions for talking to a local language model server.
//!
//! The `llm` crate defines the [`Completer`] trait along with the concrete
//! [`OllamaClient`]. A [`Conversation`] keeps role-tagged history between
//! calls so follow-up questions can refer to earlier turns.

pub mod client;
pub mod config;
pub mod conversation;
pub mod traits;

pub use client::OllamaClient;
pub use config::ClientConfig;
pub use conversation::Conversation;
pub use traits::{ask, Completer, LLMError, Message, Role};
