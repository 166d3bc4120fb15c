use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Upstream location of the NVRAM defaults table in the asuswrt-merlin tree.
pub const MERLIN_DEFAULTS_URL: &str =
    "https://raw.githubusercontent.com/RMerl/asuswrt-merlin.ng/master/release/src/router/shared/defaults.c";

/// Name of the JSON document written into the working directory by default.
pub const DEFAULT_OUTPUT_FILE: &str = "firmware_variable_defaults.json";

/// Global configuration loaded from `~/.config/nvdefaults/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the raw C source file holding the defaults table.
    pub source_url: String,
    /// Path of the output document. Relative paths resolve against the
    /// current working directory.
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_url: MERLIN_DEFAULTS_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nvdefaults")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScrapeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
