pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::interface::{ArcadeInterface, InterfaceStatus};
pub use crate::utils::error::{ArcadeError, Result};

/// Crate version, kept equal to the package version in Cargo.toml.
pub const VERSION: &str = "0.1.0";

const GREETING: &str = "ArcadeInterface initialized";

/// Greeting reported once the interface is up.
pub fn hello() -> &'static str {
    GREETING
}
