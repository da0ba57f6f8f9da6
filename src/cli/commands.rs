use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use super::output;
use crate::ingest::ingest_paths;
use crate::models::{FILTER_ALL, SearchRequest, supported_services};
use crate::search::search;
use crate::store::MemoryStore;
use crate::summary::{recent_chats, stats};

#[derive(Parser)]
#[command(name = "ai-knowledge-garden")]
#[command(version = "0.1.0")]
#[command(about = "Normalize, search and summarize AI chat exports", long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse files and report what was extracted
    Ingest {
        /// Files or directories to ingest
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Keyword search across ingested messages
    Search {
        query: String,
        /// Files or directories to ingest
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Only messages with this role (user, assistant, ...)
        #[arg(long, default_value = FILTER_ALL)]
        speaker: String,
        /// Only messages from this service (e.g. "ChatGPT")
        #[arg(long, default_value = FILTER_ALL)]
        service: String,
        /// Accepted for compatibility; not applied
        #[arg(long, default_value = FILTER_ALL)]
        date: String,
    },
    /// Show the most recent conversations
    Recent {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show message and conversation counts per service
    Stats {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// List supported services and formats
    Services,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Some(Commands::Ingest { paths }) => run_ingest(&paths, json)?,
        Some(Commands::Search { query, paths, speaker, service, date }) => {
            let request = SearchRequest::new(query).speaker(speaker).service(service).date(date);
            run_search(&paths, &request, json)?;
        }
        Some(Commands::Recent { paths }) => {
            let store = load_store(&paths)?;
            output::print_recent(&recent_chats(&store), json)?;
        }
        Some(Commands::Stats { paths }) => {
            let store = load_store(&paths)?;
            output::print_stats(&stats(&store), json)?;
        }
        Some(Commands::Services) => output::print_services(supported_services(), json)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_ingest(paths: &[PathBuf], json: bool) -> Result<()> {
    let store = MemoryStore::new();
    let results = ingest_paths(&store, paths);
    output::print_ingest(&results, json)?;

    if results.iter().all(|(_, result)| result.is_err()) {
        bail!("no file could be ingested");
    }
    Ok(())
}

fn run_search(paths: &[PathBuf], request: &SearchRequest, json: bool) -> Result<()> {
    let store = load_store(paths)?;
    let response = search(&store, request)
        .with_context(|| format!("search for {:?} failed", request.query))?;
    output::print_search(&response, json)
}

/// Ingest `paths` into a fresh store. Individual file failures are logged;
/// only a run where nothing loads is an error.
fn load_store(paths: &[PathBuf]) -> Result<MemoryStore> {
    let store = MemoryStore::new();
    let results = ingest_paths(&store, paths);

    if results.is_empty() {
        bail!("no files found under the given paths");
    }
    if results.iter().all(|(_, result)| result.is_err()) {
        let (path, first) = &results[0];
        if let Err(e) = first {
            bail!("no file could be ingested (first failure: {}: {})", path.display(), e);
        }
    }
    Ok(store)
}
