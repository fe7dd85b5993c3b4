//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::server;
use crate::config::AppConfig;
use crate::error::Result;
use crate::orders::{BulkFilter, BulkProjection, OrderService, Projection};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let mut config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { port, bind } => {
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(bind) = bind {
                    config.server.bind.clone_from(bind);
                }
                server::serve(config).await
            }
            Commands::Lookup { query, projection } => {
                self.lookup(&config, query, *projection).await
            }
            Commands::Orders { filter, raw } => self.orders(&config, *filter, *raw).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => AppConfig::from_file(path),
            None => AppConfig::from_env(),
        }
    }

    async fn lookup(&self, config: &AppConfig, query: &str, projection: Projection) -> Result<()> {
        let service = OrderService::from_config(config.store.clone())?;
        let order = service.lookup_order(query, projection).await?;
        print_json(&json!({ "order": order }))
    }

    async fn orders(
        &self,
        config: &AppConfig,
        filter: Option<BulkFilter>,
        raw: bool,
    ) -> Result<()> {
        let (projection, default_filter) = if raw {
            (BulkProjection::Raw, BulkFilter::All)
        } else {
            (BulkProjection::Summary, BulkFilter::Pending)
        };
        let filter = filter.unwrap_or(default_filter);

        let service = OrderService::from_config(config.store.clone())?;
        let orders = service.list_orders(filter, projection).await?;
        print_json(&json!({ "orders": orders }))
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
