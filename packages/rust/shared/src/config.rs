//! Application configuration for confkit.
//!
//! User config lives at `~/.confkit/confkit.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfkitError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "confkit.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".confkit";

// ---------------------------------------------------------------------------
// Config structs (matching confkit.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input/output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Schedule anchor settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Keyword extraction settings.
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Event catalog file (YAML).
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Directory containing talk source files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Directory containing structured transcripts (`<video_id>.json`).
    #[serde(default = "default_transcripts_dir")]
    pub transcripts_dir: String,

    /// Directory containing raw subtitles (`<event>/<speaker>.srt`).
    #[serde(default = "default_srt_dir")]
    pub srt_dir: String,

    /// Root directory for thumbnails and other static assets.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Common-word stoplist file, one word per line.
    #[serde(default = "default_stoplist")]
    pub stoplist: String,

    /// Where the enriched context is written.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: default_data_dir(),
            transcripts_dir: default_transcripts_dir(),
            srt_dir: default_srt_dir(),
            assets_dir: default_assets_dir(),
            stoplist: default_stoplist(),
            output: default_output(),
        }
    }
}

fn default_catalog() -> String {
    "catalog.yml".into()
}
fn default_data_dir() -> String {
    "data".into()
}
fn default_transcripts_dir() -> String {
    "transcripts".into()
}
fn default_srt_dir() -> String {
    "srt".into()
}
fn default_assets_dir() -> String {
    "static".into()
}
fn default_stoplist() -> String {
    "stoplist.txt".into()
}
fn default_output() -> String {
    "context.json".into()
}

/// `[schedule]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Hour (UTC) at which every event's talk block starts.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,

    /// Minute within the start hour.
    #[serde(default)]
    pub start_minute: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            start_minute: 0,
        }
    }
}

fn default_start_hour() -> u32 {
    9
}

/// `[keywords]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Brand label seeded into every talk's keyword set.
    #[serde(default = "default_brand_label")]
    pub brand_label: String,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            brand_label: default_brand_label(),
        }
    }
}

fn default_brand_label() -> String {
    "cloudscale conference".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.confkit/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ConfkitError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.confkit/confkit.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfkitError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ConfkitError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ConfkitError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ConfkitError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfkitError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("catalog"));
        assert!(toml_str.contains("brand_label"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.schedule.start_hour, 9);
        assert_eq!(parsed.paths.catalog, "catalog.yml");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[schedule]
start_hour = 16

[keywords]
brand_label = "summit"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.schedule.start_hour, 16);
        assert_eq!(config.schedule.start_minute, 0);
        assert_eq!(config.keywords.brand_label, "summit");
        assert_eq!(config.paths.data_dir, "data");
    }
}
