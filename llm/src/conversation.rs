//! Multi-turn chat with retained history.

use tracing::debug;

use crate::traits::{Completer, LLMError, Message, Role};

/// Chat session that remembers every exchange.
///
/// Each [`send`](Conversation::send) passes the whole history to the
/// [`Completer`] so follow-up questions can refer to earlier turns. An
/// optional system prompt is kept at the front and survives [`clear`].
///
/// [`clear`]: Conversation::clear
pub struct Conversation<C> {
    completer: C,
    messages: Vec<Message>,
}

impl<C: Completer> Conversation<C> {
    pub fn new(completer: C, system_prompt: Option<String>) -> Self {
        let messages = system_prompt.map(Message::system).into_iter().collect();
        Self {
            completer,
            messages,
        }
    }

    /// Send `text` as the next user turn and record the reply.
    ///
    /// The history is only extended when the call succeeds.
    pub async fn send(&mut self, text: &str) -> Result<String, LLMError> {
        let reply = self.completer.complete(text, &self.messages).await?;
        self.messages.push(Message::user(text));
        self.messages.push(Message::assistant(reply.clone()));
        debug!(history = self.messages.len(), "conversation turn recorded");
        Ok(reply)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every turn except the system prompt.
    pub fn clear(&mut self) {
        self.messages.retain(|m| m.role == Role::System);
    }
}
