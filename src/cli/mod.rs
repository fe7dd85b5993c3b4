//! CLI module
//!
//! Command-line interface for the order proxy.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `lookup` - Look up a single order and print it
//! - `orders` - List orders and print them

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve, AppState};
