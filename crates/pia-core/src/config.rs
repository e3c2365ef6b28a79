use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Cosmetic progress indicator parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Milliseconds between progress ticks.
    pub tick_interval_ms: u64,
    /// Largest random step per tick, in percent (exclusive).
    pub max_increment: f64,
    /// The indicator never passes this percentage while waiting.
    pub cap_percent: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            max_increment: 15.0,
            cap_percent: 90.0,
        }
    }
}

/// Global configuration loaded from `~/.config/pia/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiaConfig {
    /// Base URL of the report backend.
    pub server_url: String,
    /// Path of the report endpoint, joined onto `server_url`.
    pub endpoint_path: String,
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request; report generation is slow.
    pub request_timeout_secs: u64,
    /// Optional progress indicator settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub progress: Option<ProgressConfig>,
}

impl Default for PiaConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            endpoint_path: "/process".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 900,
            progress: None,
        }
    }
}

impl PiaConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Where the backend serves the produced reports. Not fetched by this client.
    pub fn download_url(&self) -> String {
        format!("{}/download", self.server_url.trim_end_matches('/'))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pia")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PiaConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PiaConfig> {
    if !path.exists() {
        let default_cfg = PiaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: PiaConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PiaConfig::default();
        assert_eq!(cfg.server_url, "http://localhost:5000");
        assert_eq!(cfg.endpoint_path, "/process");
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(15));
        assert!(cfg.progress.is_none());
        assert_eq!(cfg.download_url(), "http://localhost:5000/download");
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            server_url = "https://reports.example.org/"
            endpoint_path = "/process"
            connect_timeout_secs = 5
            request_timeout_secs = 120
        "#;
        let cfg: PiaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.request_timeout(), Duration::from_secs(120));
        assert!(cfg.progress.is_none());
        assert_eq!(cfg.download_url(), "https://reports.example.org/download");
    }

    #[test]
    fn config_toml_progress_section() {
        let toml = r#"
            server_url = "http://localhost:5000"
            endpoint_path = "/process"
            connect_timeout_secs = 15
            request_timeout_secs = 900

            [progress]
            tick_interval_ms = 250
            max_increment = 5.0
            cap_percent = 80.0
        "#;
        let cfg: PiaConfig = toml::from_str(toml).unwrap();
        let progress = cfg.progress.as_ref().unwrap();
        assert_eq!(progress.tick_interval_ms, 250);
        assert!((progress.max_increment - 5.0).abs() < 1e-9);
        assert!((progress.cap_percent - 80.0).abs() < 1e-9);
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.server_url, "http://localhost:5000");

        fs::write(
            &path,
            "server_url = \"http://10.0.0.2:8000\"\nendpoint_path = \"/process\"\nconnect_timeout_secs = 3\nrequest_timeout_secs = 30\n",
        )
        .unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.server_url, "http://10.0.0.2:8000");
        assert_eq!(loaded.connect_timeout_secs, 3);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server_url = 42").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
