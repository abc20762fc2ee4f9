use crate::fetch::Timeouts;
use crate::mirror;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration loaded from `~/.config/debpin/config.toml`.
///
/// Defaults reproduce the stock behavior: the Debian CD-image archive mirror
/// and the built-in transport deadlines. The `--mirror` flag overrides
/// `mirror_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebpinConfig {
    /// Base URL of the archive index to scrape.
    pub mirror_url: String,
    /// Optional connect deadline in seconds; built-in default if missing.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional overall per-request deadline in seconds; built-in default if missing.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DebpinConfig {
    fn default() -> Self {
        Self {
            mirror_url: mirror::DEFAULT_MIRROR_URL.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

impl DebpinConfig {
    /// Transport deadlines with built-in defaults filled in.
    pub fn timeouts(&self) -> Timeouts {
        let defaults = Timeouts::default();
        Timeouts {
            connect: self
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect),
            request: self
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("debpin")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DebpinConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DebpinConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DebpinConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_debian_archive() {
        let cfg = DebpinConfig::default();
        assert_eq!(
            cfg.mirror_url,
            "https://cdimage.debian.org/mirror/cdimage/archive"
        );
        assert!(cfg.connect_timeout_secs.is_none());
        assert!(cfg.request_timeout_secs.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DebpinConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DebpinConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.mirror_url, cfg.mirror_url);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            mirror_url = "https://mirror.example/archive"
            connect_timeout_secs = 5
            request_timeout_secs = 20
        "#;
        let cfg: DebpinConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.mirror_url, "https://mirror.example/archive");
        assert_eq!(cfg.timeouts().connect, Duration::from_secs(5));
        assert_eq!(cfg.timeouts().request, Duration::from_secs(20));
    }

    #[test]
    fn missing_timeouts_fall_back_to_builtin_defaults() {
        let toml = r#"mirror_url = "https://mirror.example/archive""#;
        let cfg: DebpinConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.timeouts().connect, Timeouts::default().connect);
        assert_eq!(cfg.timeouts().request, Timeouts::default().request);
    }
}
