pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "card-view")]
#[command(about = "Normalize Scryfall card data and print card summaries")]
pub struct CliConfig {
    /// JSON file holding one card object or an array of them
    #[arg(long, default_value = "cards.json")]
    pub cards: String,

    /// TOML file with display names for colors
    #[arg(long)]
    pub config: Option<String>,

    /// Card names to look up; every card in the file when empty
    pub names: Vec<String>,

    /// Log as JSON instead of compact text
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("cards", &self.cards)?;
        validate_file_extensions("cards", std::slice::from_ref(&self.cards), &["json"])?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
            validate_file_extensions("config", std::slice::from_ref(config), &["toml"])?;
        }
        Ok(())
    }
}
