use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.dep-checkr/config.toml`.
///
/// Every section and field is optional; missing values fall back to the
/// built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file names used by `split` and `resolve`.
    pub files: FilesConfig,
    /// Maven Central search settings used by `resolve`.
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub with_version: PathBuf,
    pub without_version: PathBuf,
    pub generated_dependencies: PathBuf,
    pub unresolved: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            with_version: PathBuf::from("jars-with-version.txt"),
            without_version: PathBuf::from("jars-without-version.txt"),
            generated_dependencies: PathBuf::from("generated-dependencies.xml"),
            unresolved: PathBuf::from("unresolved-jars.txt"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Solr select endpoint of the artifact search service.
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://search.maven.org/solrsearch/select".to_string(),
            timeout_secs: 10,
            user_agent: concat!("dep-checkr/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// A level (`warn`, `debug`, ...) or a full `EnvFilter` directive string.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.dep-checkr/config.toml`
/// 3. `~/.config/dep-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local = working_dir.join(".dep-checkr").join("config.toml");
    if local.exists() {
        return read_config(&local);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("dep-checkr").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
