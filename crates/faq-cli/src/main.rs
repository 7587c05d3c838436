mod chat;
mod server;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faq_core::{FaqStore, to_json};
use faq_store::{Config, Location, load_location};
use rmcp::{ServiceExt, transport::stdio};

#[derive(Parser)]
#[command(name = "faq", about = "FAQ lookup CLI, chat loop and MCP server")]
struct Cli {
    /// FAQ document: file path or http(s) URL (overrides FAQ_DATA and config)
    #[arg(long, global = true)]
    data: Option<String>,

    /// Config file (defaults to FAQ_CONFIG, then ./faq.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// Answer a question
    Ask {
        /// Question text
        text: String,
    },

    /// Suggest stored questions containing the given text
    Suggest {
        /// Partial question text
        text: String,

        /// Maximum number of suggestions (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List stored questions in order
    List {
        /// Print the whole document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document statistics
    Stats,

    /// Interactive chat on stdin/stdout
    Chat,
}

fn load_config(cli: &Cli) -> Result<Config> {
    Config::discover(cli.config.as_deref()).context("failed to load config")
}

async fn open_store(cli: &Cli, config: &Config) -> Result<(Location, FaqStore)> {
    let location = config.data_location(cli.data.as_deref());
    let store = load_location(&location)
        .await
        .with_context(|| format!("failed to load FAQ document from {location}"))?;
    Ok((location, store))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Serve => cmd_serve(&cli, &config).await,
        Commands::Ask { text } => cmd_ask(&cli, &config, text).await,
        Commands::Suggest { text, limit } => cmd_suggest(&cli, &config, text, *limit).await,
        Commands::List { json } => cmd_list(&cli, &config, *json).await,
        Commands::Stats => cmd_stats(&cli, &config).await,
        Commands::Chat => cmd_chat(&cli, &config).await,
    }
}

async fn cmd_serve(cli: &Cli, config: &Config) -> Result<()> {
    let location = config.data_location(cli.data.as_deref());
    tracing::info!("starting MCP server for {location}");

    // Serve immediately; lookups answer the fallback until the load lands.
    let server = server::FaqServer::new(location.to_string(), config.suggestion_limit);
    let loader = server.clone();
    tokio::spawn(async move { loader.load_from(&location).await });

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;
    Ok(())
}

async fn cmd_ask(cli: &Cli, config: &Config, text: &str) -> Result<()> {
    let (_, store) = open_store(cli, config).await?;
    println!("{}", store.find_answer(text));
    Ok(())
}

async fn cmd_suggest(
    cli: &Cli,
    config: &Config,
    text: &str,
    limit: Option<usize>,
) -> Result<()> {
    let (_, store) = open_store(cli, config).await?;
    let limit = limit.unwrap_or(config.suggestion_limit);
    for question in store.suggest(text, limit) {
        println!("{question}");
    }
    Ok(())
}

async fn cmd_list(cli: &Cli, config: &Config, json: bool) -> Result<()> {
    let (_, store) = open_store(cli, config).await?;
    if json {
        println!("{}", to_json(&store).context("failed to serialize FAQ document")?);
    } else {
        for (i, question) in store.questions().enumerate() {
            println!("{:>3}. {question}", i + 1);
        }
    }
    Ok(())
}

async fn cmd_stats(cli: &Cli, config: &Config) -> Result<()> {
    let (location, store) = open_store(cli, config).await?;
    println!("source:     {location}");
    println!("entries:    {}", store.len());
    println!("duplicates: {}", store.duplicate_questions());
    println!("suggest:    {}", config.suggestion_limit);
    Ok(())
}

async fn cmd_chat(cli: &Cli, config: &Config) -> Result<()> {
    let (location, store) = open_store(cli, config).await?;
    tracing::debug!("chat session over {} entries from {location}", store.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    chat::run(&store, config.suggestion_limit, stdin.lock(), &mut stdout)
        .context("chat session failed")?;
    stdout.flush()?;
    Ok(())
}
