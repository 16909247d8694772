#![allow(dead_code)]

use async_trait::async_trait;
use llm::{Completer, LLMError, Message};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    Classify,
    Analyze,
    Respond,
}

/// Deterministic stand-in for a model, keyed on which prompt it receives.
#[derive(Clone)]
pub struct Scripted {
    label: String,
    analysis: String,
    fail_on: Option<Call>,
    log: Arc<Mutex<Vec<(Call, String)>>>,
}

impl Scripted {
    pub fn answering(label: &str) -> Self {
        Self {
            label: label.into(),
            analysis: "Key concepts: higher-order functions, wrappers. Difficulty: intermediate."
                .into(),
            fail_on: None,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_on(mut self, call: Call) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().iter().map(|(c, _)| *c).collect()
    }

    pub fn prompt_for(&self, call: Call) -> Option<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .find(|(c, _)| *c == call)
            .map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl Completer for Scripted {
    async fn complete(&self, prompt: &str, history: &[Message]) -> Result<String, LLMError> {
        assert!(history.is_empty(), "graph steps send no history");
        let call = if prompt.starts_with("Classify") {
            Call::Classify
        } else if prompt.starts_with("You are a technical analyst") {
            Call::Analyze
        } else {
            Call::Respond
        };
        self.log.lock().unwrap().push((call, prompt.to_string()));
        if self.fail_on == Some(call) {
            return Err(LLMError::ServiceUnavailable("connection refused".into()));
        }
        Ok(match call {
            Call::Classify => self.label.clone(),
            Call::Analyze => self.analysis.clone(),
            Call::Respond if prompt.contains(&self.analysis) => {
                "A decorator wraps a function; it is a higher-order functions pattern.".into()
            }
            Call::Respond => "Hello! Doing well, thanks for asking.".into(),
        })
    }
}
