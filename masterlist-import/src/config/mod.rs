//! Run configuration
//!
//! Built once per invocation and passed down explicitly. Store settings come
//! from the environment (optionally seeded from `.env.local`); source
//! settings default to the fixed masterlist layout.

use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

pub const URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

pub const DEFAULT_ENV_FILE: &str = ".env.local";
pub const DEFAULT_WORKBOOK: &str = "../QI Project Masterlist.xlsx";
pub const DEFAULT_SHEET: &str = "QI Masterlist";
/// 0-based sheet row holding the column headers
pub const DEFAULT_HEADER_ROW: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{} not found in the environment", .0.join(" and "))]
    MissingVars(Vec<&'static str>),
}

/// Where the masterlist lives inside the workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub sheet: String,
    pub header_row: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_string(),
            header_row: DEFAULT_HEADER_ROW,
        }
    }
}

/// Remote store location and credential
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub service_key: String,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}

impl StoreConfig {
    /// Resolve both variables through `lookup`; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let url = read(URL_VAR);
        let service_key = read(KEY_VAR);

        match (url, service_key) {
            (Some(url), Some(service_key)) => Ok(Self { url, service_key }),
            (url, service_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if service_key.is_none() {
                    missing.push(KEY_VAR);
                }
                Err(ConfigError::MissingVars(missing))
            }
        }
    }
}

/// Everything a live import run needs
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub source: SourceConfig,
    pub store: StoreConfig,
}

impl ImportConfig {
    pub fn resolve<F>(source: SourceConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            source,
            store: StoreConfig::from_lookup(lookup)?,
        })
    }
}

/// Process environment lookup
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load variables from an env file without overriding ones already set
pub fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No env file at {}", path.display()),
        Err(e) => warn!("Failed to load {}: {}", path.display(), e),
    }
}
