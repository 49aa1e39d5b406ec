//! CLI module
//!
//! Command-line interface for the items-range toolkit.
//!
//! # Commands
//!
//! - `serve` - Start an HTTP server with a paginated demo collection
//! - `resolve` - Resolve a single request offline and print the response headers

mod commands;
mod runner;
mod server;

pub use commands::{Cli, CollectionArgs, Commands};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
