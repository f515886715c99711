use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::SortKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub refresh_interval_ms: u64,
    pub history_capacity: usize,
    pub alert_log_capacity: usize,
    pub cpu_alert_threshold: f64,
    pub memory_alert_threshold: f64,
    pub memory_total_gb: f64,
    pub process_count: usize,
    pub sort_column: String,
    pub sort_descending: bool,
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 2000,
            history_capacity: 60,
            alert_log_capacity: 20,
            cpu_alert_threshold: 80.0,
            memory_alert_threshold: 80.0,
            memory_total_gb: 16.0,
            process_count: 50,
            sort_column: "cpu".into(),
            sort_descending: true,
            dark_mode: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(data) => {
                if let Err(e) = fs::write(path, data) {
                    log::error!("Failed to write config {}: {}", path.display(), e);
                }
            }
            Err(e) => log::error!("Failed to serialize config: {}", e),
        }
    }

    /// Initial sort column; falls back to CPU when the stored name is unknown.
    pub fn sort_key(&self) -> SortKey {
        self.sort_column.parse().unwrap_or_else(|e| {
            log::warn!("{}; sorting by cpu", e);
            SortKey::Cpu
        })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("host-dashboard")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut cfg = Config::default();
        cfg.dark_mode = true;
        cfg.sort_column = "name".into();
        cfg.save_to(&path);

        let loaded = Config::load_from(&path);
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.sort_key(), SortKey::Name);
    }

    #[test]
    fn missing_or_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path), Config::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"refresh_interval_ms": 500, "sort_column": "bogus"}"#).unwrap();

        let cfg = Config::load_from(&path);
        assert_eq!(cfg.refresh_interval_ms, 500);
        assert_eq!(cfg.history_capacity, 60);
        assert_eq!(cfg.sort_key(), SortKey::Cpu);
    }
}
