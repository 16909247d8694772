use agents::{AgentGraph, Decoded, Run, Step};
use clap::Parser;
use lessons::{banner, init_logging, Connection};
use llm::Completer;

/// Route queries through an orchestrator, analyzer and responder.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    connection: Connection,
}

const QUERIES: [&str; 3] = [
    "What is a Python decorator and how does it work?",
    "Hello! How are you today?",
    "Explain async/await in Python",
];

fn report(run: &Run) {
    let state = &run.state;
    if let Some(label) = state.classification() {
        println!("📋 Classification: {label}");
    }
    if let Some(Decoded::Fallback { raw }) = state.decision() {
        println!("⚠️  Unrecognized classification \"{raw}\", using the default");
    }
    let route: Vec<String> = run.path.iter().map(Step::to_string).collect();
    println!("➡️  Route: {}", route.join(" → "));
    if let Some(analysis) = state.analysis() {
        println!("🔍 Analysis:\n{analysis}\n");
    }
    println!("📤 FINAL OUTPUT:\n{}\n", run.response());
}

async fn run_query<C: Completer>(graph: &AgentGraph<C>, query: &str) -> anyhow::Result<Run> {
    println!("\n{}", "🚀 ".repeat(20));
    println!("PROCESSING QUERY: {query}");
    println!("{}\n", "🚀 ".repeat(20));
    let run = graph.run(query).await?;
    report(&run);
    Ok(run)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    banner("Example 3: Simple Agent Routing Graph");
    let client = cli.connection.connect().await?;
    let graph = AgentGraph::new(client);
    println!("✅ Graph ready\n");

    for query in QUERIES {
        run_query(&graph, query).await?;
    }
    banner("Example 3 complete!");
    Ok(())
}
