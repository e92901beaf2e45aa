//! Emoji-Search CLI
//!
//! Ranks the compiled-in emoji catalog against a query vector read from a
//! text file.
//!
//! # Usage
//!
//! ```bash
//! # Search with the default file names (emoji.csv, test.txt)
//! emoji-search search
//!
//! # Explicit paths
//! emoji-search search --metadata data/emoji.csv --query query.txt
//!
//! # Show catalog statistics
//! emoji-search stats
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use emoji_search::catalog::{self, EMBEDDING_DIM};
use emoji_search::metadata::load_metadata;
use emoji_search::query::load_query_vector;
use emoji_search::search::{rank, SearchError};

#[derive(Parser)]
#[command(name = "emoji-search")]
#[command(about = "Semantic emoji search over a compiled-in embedding catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against a query vector and print the best matches
    Search {
        /// Path to the metadata table (glyph, description per row)
        #[arg(short, long, default_value = "emoji.csv")]
        metadata: PathBuf,

        /// Path to the query vector (768 whitespace-separated floats)
        #[arg(short, long, default_value = "test.txt")]
        query: PathBuf,
    },

    /// Display statistics about the compiled-in catalog
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { metadata, query } => {
            let catalog = catalog::builtin();

            let rows = load_metadata(&metadata)?;
            if rows.len() != catalog.len() {
                return Err(SearchError::MetadataCountMismatch {
                    expected: catalog.len(),
                    actual: rows.len(),
                }
                .into());
            }

            tracing::info!("Reading query vector from {:?}", query);
            let query_vector = load_query_vector(&query)?;

            let ranked = rank(catalog, &query_vector)?;

            println!("\n--- Best Matching Emojis ---");
            for (position, entry) in ranked.iter().enumerate() {
                let meta = &rows[entry.index];
                println!(
                    "{}. {}  {}  [Score: {:.4}]",
                    position + 1,
                    meta.character,
                    meta.description,
                    entry.score
                );
            }
        }

        Commands::Stats => {
            let catalog = catalog::builtin();
            println!("Embedding catalog:");
            println!("  Entries: {}", catalog.len());
            println!("  Dimensions: {}", EMBEDDING_DIM);
            println!(
                "  Size: {:.2} KB",
                (catalog.len() * EMBEDDING_DIM * std::mem::size_of::<f64>()) as f64 / 1024.0
            );
        }
    }

    Ok(())
}
