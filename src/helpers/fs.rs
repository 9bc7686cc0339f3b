//! File System Utilities
//!
//! Per-user directories for settings and logs.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "pharmadesk", "pharma-desk").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/pharma-desk/` or `$XDG_CONFIG_HOME/pharma-desk/`
/// - **macOS**: `~/Library/Application Support/com.pharmadesk.pharma-desk/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pharmadesk\pharma-desk\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the directory that holds rolling log files
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested_path() {
        let root = std::env::temp_dir().join(format!("pharma-desk-fs-{}", std::process::id()));
        let nested = root.join("a").join("b");
        let created = ensure_dir(&nested).expect("created");
        assert!(created.is_dir());
        // Second call is a no-op
        assert_eq!(ensure_dir(&nested).expect("exists"), nested);
        let _ = fs::remove_dir_all(&root);
    }
}
