use clap::Args;
use llm::config::{parse_timeout, DEFAULT_MODEL, DEFAULT_URL};
use llm::{ClientConfig, LLMError, OllamaClient};
use std::time::Duration;
use tracing::info;

/// How to reach the Ollama server. Every flag falls back to its environment
/// variable, so the programs run without arguments.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_URL)]
    pub host: String,
    /// Model to chat with
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Give up on a reply after this many seconds (0 or unparseable: wait forever)
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", value_parser = lenient_secs)]
    pub timeout_secs: Option<u64>,
}

/// Bad values fall back to no timeout instead of aborting the program.
fn lenient_secs(raw: &str) -> Result<u64, String> {
    Ok(parse_timeout(raw).map_or(0, |limit| limit.as_secs()))
}

impl Connection {
    pub fn config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.host, &self.model);
        match self.timeout_secs {
            Some(secs) if secs > 0 => config.with_timeout(Duration::from_secs(secs)),
            _ => config,
        }
    }

    /// Build a client and check that the model is installed.
    pub async fn connect(&self) -> Result<OllamaClient, LLMError> {
        let client = OllamaClient::new(self.config())?;
        client.ensure_model().await?;
        info!(host = %self.host, model = %self.model, "connected");
        Ok(client)
    }
}

pub fn rule() -> String {
    "=".repeat(60)
}

/// Print `title` between two rules.
pub fn banner(title: &str) {
    println!("{}", rule());
    println!("{title}");
    println!("{}", rule());
}
