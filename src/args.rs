pub mod types;
pub mod validation;

use clap::Parser;
use std::fs;

use crate::error::ScorecardError;
pub use types::*;

#[must_use]
pub fn args_checks() -> Cli {
    Cli::parse()
}

/// Builds the settings for a run: command line flags over the config file,
/// the config file over the built-in defaults.
///
/// # Errors
///
/// Will return `Err` if the config file can't be read or isn't valid toml
pub fn load_settings(cli: &Cli) -> Result<Settings, ScorecardError> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                ScorecardError::Io(format!("read config toml {}: {e}", path.display()))
            })?;
            toml::from_str::<FileConfig>(&contents)?
        }
        None => FileConfig::default(),
    };
    Ok(Settings::merge(cli, file_config))
}
