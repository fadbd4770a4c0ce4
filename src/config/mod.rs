use crate::errors::{AppError, AppResult};
use crate::lookup::DEFAULT_URL;
use crate::utils::path::home_join;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Master establishments spreadsheet.
    #[serde(default = "default_registry")]
    pub registry: String,
    /// Folder of per-collector reports; `{year}` and `{month}` are expanded.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    /// SQLite file holding the audit log.
    #[serde(default = "default_audit_db")]
    pub audit_db: String,
    /// Known collectors; `analyze --collector` warns on names outside this list.
    #[serde(default)]
    pub collectors: Vec<String>,
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_secs: u64,
    #[serde(default = "default_lookup_enabled")]
    pub lookup_enabled: bool,
    /// chrono format of the per-date worksheet title.
    #[serde(default = "default_sheet_title_format")]
    pub sheet_title_format: String,
}

fn default_registry() -> String {
    home_join(&["OneDrive", "Nota Paraná", "Estabelecimentos.xlsx"])
        .to_string_lossy()
        .to_string()
}
fn default_reports_dir() -> String {
    home_join(&[
        "OneDrive",
        "Nota Paraná",
        "Estabelecimentos Não Visitados",
        "{year}",
        "{month}",
    ])
    .to_string_lossy()
    .to_string()
}
fn default_audit_db() -> String {
    Config::audit_db_file().to_string_lossy().to_string()
}
fn default_lookup_url() -> String {
    DEFAULT_URL.to_string()
}
fn default_lookup_timeout() -> u64 {
    30
}
fn default_lookup_enabled() -> bool {
    true
}
fn default_sheet_title_format() -> String {
    "%d-%m".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            reports_dir: default_reports_dir(),
            audit_db: default_audit_db(),
            collectors: Vec::new(),
            lookup_url: default_lookup_url(),
            lookup_timeout_secs: default_lookup_timeout(),
            lookup_enabled: default_lookup_enabled(),
            sheet_title_format: default_sheet_title_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvisitcheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rvisitcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvisitcheck.conf")
    }

    /// Return the default path of the audit database
    pub fn audit_db_file() -> PathBuf {
        Self::config_dir().join("rvisitcheck.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// An existing config file is left untouched.
    pub fn init_all(registry: Option<String>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        let mut config = Self::load_from(&path)?;

        let changed = registry.is_some();
        if let Some(r) = registry {
            config.registry = r;
        }

        if !is_test && (changed || !path.exists()) {
            config.save_to(&path)?;
            println!("✅ Config file: {:?}", path);
        }

        Ok(config)
    }
}
