use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/oib/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OibConfig {
    /// Words that end interactive mode, compared case-insensitively.
    pub exit_words: Vec<String>,
    /// Prompt printed before reading each interactive line.
    pub prompt: String,
    /// Print the two demonstration checks before entering interactive mode.
    pub show_examples: bool,
}

impl Default for OibConfig {
    fn default() -> Self {
        Self {
            exit_words: vec!["exit".into(), "quit".into(), "q".into()],
            prompt: "Enter an OIB to validate: ".into(),
            show_examples: true,
        }
    }
}

impl OibConfig {
    /// True if `line` equals one of the exit words, ignoring case.
    pub fn is_exit_word(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        self.exit_words.iter().any(|w| w.to_lowercase() == line)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("oib")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OibConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<OibConfig> {
    if !path.exists() {
        let default_cfg = OibConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: OibConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
