use clap::Parser;
use lessons::{banner, init_logging, rule, Connection};
use llm::{Conversation, OllamaClient};

/// Hold multi-turn conversations where the model remembers earlier turns.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    connection: Connection,
}

const TUTOR: &str =
    "You are a helpful Python programming tutor. Keep your answers concise and practical.";
const STORYTELLER: &str = "You are a creative storyteller. Tell engaging short stories.";

fn start<'a>(client: &'a OllamaClient, system_prompt: &str) -> Conversation<&'a OllamaClient> {
    println!("🤖 Conversation started with model: {}", client.model());
    println!("📋 System prompt: {system_prompt}\n");
    Conversation::new(client, Some(system_prompt.to_string()))
}

async fn turn(convo: &mut Conversation<&OllamaClient>, text: &str) -> anyhow::Result<()> {
    println!("👤 User: {text}");
    let reply = convo.send(text).await?;
    println!("🤖 Assistant: {reply}\n");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    banner("Example 2: Multi-turn Conversation with Memory");
    println!();
    let client = cli.connection.connect().await?;

    let mut tutor = start(&client, TUTOR);
    turn(&mut tutor, "What is a Python decorator?").await?;
    turn(&mut tutor, "Can you show me a simple example of one?").await?;
    turn(&mut tutor, "What's a practical use case for decorators?").await?;

    println!("{}", rule());
    println!("📊 Conversation statistics:");
    println!("   Total messages in history: {}", tutor.len());
    println!("{}", rule());
    println!();

    banner("Example 2: Now demonstrating a different conversation");
    println!();
    let mut storyteller = start(&client, STORYTELLER);
    turn(
        &mut storyteller,
        "Tell me a one-paragraph story about a robot learning to code.",
    )
    .await?;
    turn(&mut storyteller, "What happened to the robot next?").await?;

    banner("Example 2 complete!");
    Ok(())
}
