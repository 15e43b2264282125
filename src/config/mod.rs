pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = ">>> ";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "train-registry")]
#[command(about = "Interactive registry of train departures")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON file to load before the first prompt
    #[arg(short, long)]
    pub load: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings the command loop runs with after merging the TOML file and the
/// command line. Flags win over file values.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySettings {
    pub prompt: String,
    pub autoload: Option<String>,
    pub verbose: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            autoload: None,
            verbose: false,
        }
    }
}

impl RegistrySettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Self::merge(cli, file.as_ref()))
    }

    pub fn merge(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = Self::default();

        if let Some(file) = file {
            if let Some(registry) = &file.registry {
                if let Some(prompt) = &registry.prompt {
                    settings.prompt = prompt.clone();
                }
                settings.autoload = registry.autoload.clone();
            }
            settings.verbose = file.verbose();
        }

        if cli.load.is_some() {
            settings.autoload = cli.load.clone();
        }
        settings.verbose |= cli.verbose;

        settings
    }
}

impl Validate for RegistrySettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("registry.prompt", &self.prompt)?;
        if let Some(path) = &self.autoload {
            validate_path("registry.autoload", path)?;
        }
        Ok(())
    }
}
