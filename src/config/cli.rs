use crate::config::toml_config::TomlConfig;
use crate::core::ProductId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cart-store")]
#[command(about = "Manage a persisted storefront shopping cart")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override api.base_url")]
    pub api_url: Option<String>,

    #[arg(long, help = "Override storage.path")]
    pub storage_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart contents and total
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product line from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl CliConfig {
    /// Loads the TOML file (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }
        if let Some(storage_path) = &self.storage_path {
            config.storage.path = storage_path.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }

        Ok(config)
    }
}
