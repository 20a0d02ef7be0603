pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "arcade-interface")]
#[command(about = "Initialize the arcade interface and report its status")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the interface name from the config file
    #[arg(long)]
    pub name: Option<String>,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the version and exit
    #[arg(long)]
    pub version_only: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty("--config", path)?;
        }
        if let Some(name) = &self.name {
            validate_non_empty("--name", name)?;
        }
        Ok(())
    }
}
