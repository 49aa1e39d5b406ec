//! CLI commands and argument parsing

use crate::types::Quantity;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Item-range pagination toolkit
#[derive(Parser, Debug)]
#[command(name = "items-range")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve a demo collection over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        collection: CollectionArgs,
    },

    /// Resolve one request offline and print the response status and headers
    Resolve {
        /// Range header value, e.g. `0-99` or `50-` (omit for no Range header)
        #[arg(short, long)]
        range: Option<String>,

        /// Request path and query reused in Link headers
        #[arg(long, default_value = "/items")]
        url: String,

        #[command(flatten)]
        collection: CollectionArgs,
    },
}

/// Describes the collection being paginated
#[derive(Args, Debug, Clone)]
pub struct CollectionArgs {
    /// Number of items in the collection
    #[arg(long, default_value = "1000")]
    pub total: u64,

    /// The collection has no end (overrides --total)
    #[arg(long)]
    pub unbounded: bool,

    /// Largest page served (defaults to the config file's max_page_size)
    #[arg(long)]
    pub max_page_size: Option<u64>,
}

impl CollectionArgs {
    /// Total items as a quantity
    pub fn total_items(&self) -> Quantity {
        if self.unbounded {
            Quantity::Unbounded
        } else {
            Quantity::Finite(self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["items-range", "serve", "--port", "9000", "--unbounded"]);
        match cli.command {
            Commands::Serve { port, collection } => {
                assert_eq!(port, 9000);
                assert_eq!(collection.total_items(), Quantity::Unbounded);
                assert!(collection.max_page_size.is_none());
            }
            other => panic!("Expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "items-range",
            "-v",
            "resolve",
            "--range",
            "20-29",
            "--total",
            "100",
            "--max-page-size",
            "50",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Resolve {
                range,
                url,
                collection,
            } => {
                assert_eq!(range.as_deref(), Some("20-29"));
                assert_eq!(url, "/items");
                assert_eq!(collection.total_items(), Quantity::Finite(100));
                assert_eq!(collection.max_page_size, Some(50));
            }
            other => panic!("Expected Resolve, got {other:?}"),
        }
    }
}
