//! CLI commands and argument parsing

use crate::orders::{BulkFilter, Projection};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storefront order lookup proxy
#[derive(Parser, Debug)]
#[command(name = "order-tracking")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML). Environment variables override it.
    #[arg(short, long, global = true)]
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
    /// Start HTTP server mode
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Look up the most recent order matching an email or order name
    Lookup {
        /// Customer email or order name (e.g. "#1001")
        query: String,

        /// Fields to print
        #[arg(long, value_enum, default_value_t = Projection::Tracking)]
        projection: Projection,
    },

    /// List all orders, following pagination
    Orders {
        /// Which orders to keep (default: pending, or all with --raw)
        #[arg(long, value_enum)]
        filter: Option<BulkFilter>,

        /// Print upstream orders untouched
        #[arg(long)]
        raw: bool,
    },
}
