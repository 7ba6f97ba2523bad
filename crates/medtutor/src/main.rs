// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! medtutor - a medical study assistant.
//!
//! Binary entry point: loads configuration, installs logging, and dispatches
//! subcommands.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod ask;
mod concept;
mod graph;
mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use medtutor_config::MedTutorConfig;
use medtutor_core::{MedTutorError, StorageAdapter};
use medtutor_storage::SqliteStorage;

/// medtutor - a medical study assistant.
#[derive(Parser, Debug)]
#[command(name = "medtutor", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show which model configuration a request would use.
    Route {
        /// Task name (qa, flashcards, summary, studyPlan, diagnosis, quiz, wellness, dailyDigest, imageAnalysis).
        #[arg(long)]
        task: String,
        /// The request text to classify.
        text: String,
    },
    /// Print the concept subgraph around a seed concept as JSON.
    Graph {
        /// Name of the seed concept.
        seed: String,
        /// Maximum hops from the seed (defaults to graph.default_max_depth).
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Manage the concept graph.
    Concept {
        #[command(subcommand)]
        action: concept::ConceptCommand,
    },
    /// Ask a study question.
    Ask {
        question: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => medtutor_config::load_and_validate_path(path),
        None => medtutor_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            medtutor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &MedTutorConfig) -> Result<(), MedTutorError> {
    let output = match command {
        Commands::Route { task, text } => route::run_route(config, &task, &text)?,
        Commands::Graph { seed, depth } => {
            let storage = open_storage(config).await?;
            let out = graph::run_graph(config, &storage, &seed, depth).await;
            storage.close().await?;
            out?
        }
        Commands::Concept { action } => {
            let storage = open_storage(config).await?;
            let out = concept::run_concept(&storage, action).await;
            storage.close().await?;
            out?
        }
        Commands::Ask { question } => ask::run_ask(config, &question).await?,
    };
    println!("{output}");
    Ok(())
}

/// Open and migrate the configured concept database.
async fn open_storage(config: &MedTutorConfig) -> Result<SqliteStorage, MedTutorError> {
    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    Ok(storage)
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("medtutor={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Serialize command output as pretty JSON.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, MedTutorError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MedTutorError::Internal(format!("failed to serialize output: {e}")))
}
