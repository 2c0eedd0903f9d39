use crate::core::{ConfigProvider, ElementIds};
use crate::domain::model::{DEFAULT_RECIPES_PATH, DEFAULT_TOTAL_LABEL, DEFAULT_TOTAL_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "calorie-page")]
#[command(about = "Sum calorie values and list recipes from the local calorie service")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:9000")]
    pub base_url: String,

    #[arg(
        long,
        help = "Load settings from a TOML file (overrides the other settings flags)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Reject calorie values that are not non-negative numbers")]
    pub strict: bool,

    #[arg(long, help = "HTML-escape response text before rendering")]
    pub escape_markup: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub element_ids: ElementIds,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sum two calorie values and render the total
    Total {
        #[arg(long)]
        calorie1: String,

        #[arg(long)]
        calorie2: String,
    },
    /// Fetch and render the recipe list
    Recipes,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn total_path(&self) -> &str {
        DEFAULT_TOTAL_PATH
    }

    fn recipes_path(&self) -> &str {
        DEFAULT_RECIPES_PATH
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn element_ids(&self) -> &ElementIds {
        &self.element_ids
    }

    fn total_label(&self) -> &str {
        DEFAULT_TOTAL_LABEL
    }

    fn recipes_label(&self) -> &str {
        ""
    }

    fn escape_markup(&self) -> bool {
        self.escape_markup
    }

    fn strict_inputs(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
