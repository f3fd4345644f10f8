use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

/// Display settings loaded from an optional toml file.
#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    /// Prefix used when printing amounts, e.g. "Php" or "$".
    #[serde(default = "default_currency")]
    pub(crate) currency: String,
}

fn default_currency() -> String {
    "Php".to_string()
}

impl Default for Config {
    fn default() -> Config {
        Config { currency: default_currency() }
    }
}

impl Config {
    pub(crate) fn load_from_file(file_path: &str) -> Config {
        let path = Path::new(file_path);
        if !path.exists() || !path.is_file() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<Config>(&text) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config {file_path}: {e}");
                    Config::default()
                }
            },
            Err(e) => {
                warn!("Unable to read config {file_path}: {e}");
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from_file("/nonexistent/payplan.toml");
        assert_eq!(config.currency, "Php");
    }

    #[test]
    fn test_parse_currency() {
        let config: Config = toml::from_str("currency = \"$\"").unwrap();
        assert_eq!(config.currency, "$");
    }
}
