use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = "command: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub book_path: Option<PathBuf>,
    pub prompt: String,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub sorted: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            book_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
            listing: ListingConfig { sorted: true },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid prompt value: {0:?}")]
    InvalidPrompt(String),
    #[error("invalid book_path value: {0}")]
    InvalidBookPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    book_path: Option<PathBuf>,
    prompt: Option<String>,
    listing: Option<ListingFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListingFile {
    sorted: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(book_path) = parsed.book_path {
        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidBookPath(book_path));
        }
        config.book_path = Some(book_path);
    }

    if let Some(prompt) = parsed.prompt {
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidPrompt(prompt));
        }
        config.prompt = prompt;
    }

    if let Some(listing) = parsed.listing {
        if let Some(sorted) = listing.sorted {
            config.listing.sorted = sorted;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, ListingFile, DEFAULT_PROMPT};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            book_path: Some(PathBuf::from("/tmp/book.json")),
            prompt: Some("> ".to_string()),
            listing: Some(ListingFile {
                sorted: Some(false),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.book_path, Some(PathBuf::from("/tmp/book.json")));
        assert_eq!(merged.prompt, "> ");
        assert!(!merged.listing.sorted);
    }

    #[test]
    fn merge_config_keeps_defaults_for_missing_keys() {
        let parsed = ConfigFile {
            book_path: None,
            prompt: None,
            listing: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.prompt, DEFAULT_PROMPT);
        assert!(merged.listing.sorted);
        assert!(merged.book_path.is_none());
    }

    #[test]
    fn merge_config_rejects_blank_prompt() {
        let parsed = ConfigFile {
            book_path: None,
            prompt: Some("  ".to_string()),
            listing: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrompt(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "book_path = \"contacts.json\"\nprompt = \">> \"\n[listing]\nsorted = false\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.book_path, Some(PathBuf::from("contacts.json")));
        assert_eq!(config.prompt, ">> ");
        assert!(!config.listing.sorted);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"blue\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
