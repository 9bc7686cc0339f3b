//! Settings
//!
//! User preferences persisted as TOML in the platform config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::table::{PageSize, TableOptions};

/// `[table]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub page_size: PageSize,
    pub searchable: bool,
    pub pagination: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            searchable: true,
            pagination: true,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `pharma_desk=debug`
    pub level: String,
    /// Also write a daily rolling file under the data directory
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Persisted settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: TableSettings,
    pub logging: LoggingSettings,
}

/// Location of the settings file, creating its directory when needed
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from `path`, falling back to defaults on any failure.
    ///
    /// Does not log, so it can run before the subscriber is installed; the
    /// caller reports the returned error once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<Error>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_settings_path()?)
    }

    /// Load from `path`. A missing or empty file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(&value)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }

    /// Table options seeded from the saved preferences
    pub fn table_options(&self) -> TableOptions {
        TableOptions::default()
            .page_size(self.table.page_size)
            .searchable(self.table.searchable)
            .pagination(self.table.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pharma-desk-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&temp_path("missing")).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.table.page_size, PageSize::Ten);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::default();
        settings.table.page_size = PageSize::Fifty;
        settings.table.searchable = false;
        settings.logging.level = "debug".to_string();
        settings.save_to(&path).expect("saved");

        let loaded = Settings::load_from(&path).expect("loaded");
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[table]\npage_size = 20\n").expect("written");
        let settings = Settings::load_from(&path).expect("loaded");
        assert_eq!(settings.table.page_size, PageSize::Twenty);
        assert!(settings.table.pagination);
        assert_eq!(settings.logging.level, "info");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_page_size_is_rejected() {
        let path = temp_path("invalid");
        std::fs::write(&path, "[table]\npage_size = 7\n").expect("written");
        assert!(matches!(Settings::load_from(&path), Err(Error::TomlDe { .. })));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_default_reports_parse_error() {
        let path = temp_path("fallback");
        std::fs::write(&path, "[table]\npage_size = 7\n").expect("written");
        let (settings, err) = Settings::load_or_default(&path);
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(Error::TomlDe { .. })));
        let _ = std::fs::remove_file(&path);

        let (settings, err) = Settings::load_or_default(&temp_path("fallback-missing"));
        assert_eq!(settings, Settings::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_table_options() {
        let mut settings = Settings::default();
        settings.table.page_size = PageSize::Five;
        settings.table.pagination = false;
        let options = settings.table_options();
        assert_eq!(options.page_size, PageSize::Five);
        assert!(!options.pagination);
        assert!(options.searchable);
        assert_eq!(options.key_field, "id");
    }
}
