use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub registry: Option<RegistrySection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySection {
    pub prompt: Option<String>,
    pub autoload: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings, replacing `${VAR}` with the environment value first.
    /// Unknown variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(registry) = &self.registry {
            if let Some(prompt) = &registry.prompt {
                validate_non_empty_string("registry.prompt", prompt)?;
            }
            if let Some(autoload) = &registry.autoload {
                validate_path("registry.autoload", autoload)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[registry]
prompt = "> "
autoload = "trains.json"

[logging]
verbose = true
"#,
        )
        .unwrap();

        let registry = config.registry.as_ref().unwrap();
        assert_eq!(registry.prompt.as_deref(), Some("> "));
        assert_eq!(registry.autoload.as_deref(), Some("trains.json"));
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.registry.is_none());
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRAIN_REGISTRY_TEST_FILE", "from_env.json");

        let config = TomlConfig::from_toml_str(
            r#"
[registry]
autoload = "${TRAIN_REGISTRY_TEST_FILE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.registry.unwrap().autoload.as_deref(),
            Some("from_env.json")
        );
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[registry]
autoload = "${TRAIN_REGISTRY_SURELY_UNSET_VAR}.json"
"#,
        )
        .unwrap();

        assert_eq!(
            config.registry.unwrap().autoload.as_deref(),
            Some("${TRAIN_REGISTRY_SURELY_UNSET_VAR}.json")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[registry\nprompt = 1").unwrap_err();
        assert!(matches!(err, AppError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\nprompt = \"trains> \"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.registry.unwrap().prompt.as_deref(),
            Some("trains> ")
        );
    }

    #[test]
    fn test_blank_prompt_fails_validation() {
        let config = TomlConfig::from_toml_str("[registry]\nprompt = \" \"").unwrap();
        assert!(config.validate().is_err());
    }
}
