//! AgentCart CLI - catalog and discovery tooling.
//!
//! # Usage
//!
//! ```bash
//! # Print the built-in catalog as JSON
//! ac-cli catalog export
//!
//! # Check a catalog file before deploying it
//! ac-cli catalog validate catalog.json
//!
//! # Render discovery documents for static hosting
//! ac-cli discovery agent-store --base-url https://shop.example
//! ac-cli discovery robots --catalog catalog.json
//!
//! # Run a search without starting the server
//! ac-cli search --category hoodie --max-price 50
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "ac-cli")]
#[command(author, version, about = "AgentCart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export or validate product catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Render a discovery document
    Discovery {
        /// Which document to render
        document: DiscoveryDocument,

        /// Public base URL advertised to agents
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Catalog file (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Search the catalog offline
    Search {
        /// Free text
        #[arg(long)]
        q: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Minimum price in USD, inclusive
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price in USD, inclusive
        #[arg(long)]
        max_price: Option<String>,

        /// Catalog file (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print a catalog as pretty JSON
    Export {
        /// Catalog file (default: built-in catalog)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Load a catalog file and check every invariant
    Validate {
        /// Catalog file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DiscoveryDocument {
    /// `/.well-known/agent-store.json`
    AgentStore,
    /// `/.well-known/agent.json`
    Agent,
    /// `/robots.txt`
    Robots,
}

fn main() {
    // Initialize tracing (stderr, so command output stays pipeable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentcart_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let output = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Export { path } => commands::catalog::export(path.as_deref())?,
            CatalogAction::Validate { file } => commands::catalog::validate(&file)?,
        },
        Commands::Discovery {
            document,
            base_url,
            catalog,
        } => {
            let document = match document {
                DiscoveryDocument::AgentStore => commands::discovery::Document::AgentStore,
                DiscoveryDocument::Agent => commands::discovery::Document::AgentManifest,
                DiscoveryDocument::Robots => commands::discovery::Document::Robots,
            };
            commands::discovery::render(document, &base_url, catalog.as_deref())?
        }
        Commands::Search {
            q,
            category,
            color,
            min_price,
            max_price,
            catalog,
        } => {
            let query = agentcart_core::SearchQuery {
                q,
                category,
                color,
                min_price,
                max_price,
            };
            commands::search::run(&query, catalog.as_deref())?
        }
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
