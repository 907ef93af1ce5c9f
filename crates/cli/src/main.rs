use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sqlscout")]
#[command(about = "Ask natural-language questions about a SQL database", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP chat server
    Serve {
        #[arg(short, long, default_value = "7878")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// How many table schemas to retrieve per question
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Answer one question and exit
    Ask {
        question: String,
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Interactive chat with conversational follow-up
    Chat {
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Create and seed the demo retail database
    InitDb,
    /// List the tables the retriever indexes
    Tables,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = config::db_path(cli.db);

    match cli.command {
        Commands::Serve { port, host, top_k } => {
            let service =
                commands::build_service(&db_path, config::retrieval_k(top_k)).await?;
            commands::serve::run(service, &host, port).await?;
        },
        Commands::Ask { question, top_k } => {
            let service =
                commands::build_service(&db_path, config::retrieval_k(top_k)).await?;
            commands::ask::run(&service, &question).await?;
        },
        Commands::Chat { top_k } => {
            let service =
                commands::build_service(&db_path, config::retrieval_k(top_k)).await?;
            commands::chat::run(&service).await?;
        },
        Commands::InitDb => {
            commands::init_db::run(&db_path)?;
        },
        Commands::Tables => {
            commands::tables::run(&db_path)?;
        },
    }

    Ok(())
}
