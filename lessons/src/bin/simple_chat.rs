use clap::Parser;
use lessons::{banner, init_logging, Connection};
use llm::{ask, OllamaClient};

/// Send single prompts to a local model and print the answers.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    connection: Connection,
}

const PROMPTS: [&str; 3] = [
    "What is Python? Answer in one sentence.",
    "Write a Python function that calculates the factorial of a number.",
    "Give me 3 tips for learning AI programming.",
];

async fn simple_chat(client: &OllamaClient, prompt: &str) -> anyhow::Result<String> {
    println!("\n🤖 Using model: {}", client.model());
    println!("📝 Prompt: {prompt}\n");
    let answer = ask(client, prompt).await?;
    println!("💬 Response:\n{answer}\n");
    Ok(answer)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    banner("Example 1: Simple Chat with Ollama");
    let client = cli.connection.connect().await?;
    for prompt in PROMPTS {
        simple_chat(&client, prompt).await?;
    }
    banner("Example 1 complete!");
    Ok(())
}
