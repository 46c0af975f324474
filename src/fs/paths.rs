//! Path resolution utilities for stayboard
//!
//! Provides functions to locate the board root and construct paths
//! to the files in its .stayboard directory.

use std::path::{Path, PathBuf};

use crate::errors::{Result, StayboardError};
use crate::schemas::Config;

/// Name of the board directory
pub const BOARD_DIR_NAME: &str = ".stayboard";

/// Find the board root: the nearest directory containing `.stayboard`.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `BoardNotFound` - If no ancestor contains a .stayboard directory
pub fn find_board_root(start_cwd: &Path) -> Result<PathBuf> {
    let start = start_cwd
        .canonicalize()
        .map_err(|e| StayboardError::BoardNotFound(format!("{}: {}", start_cwd.display(), e)))?;

    start
        .ancestors()
        .find(|dir| dir.join(BOARD_DIR_NAME).is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            StayboardError::BoardNotFound(format!(
                "no {} directory above {} (run `stayboard init`)",
                BOARD_DIR_NAME,
                start.display()
            ))
        })
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .stayboard directory.
pub fn get_board_dir(root: &Path) -> PathBuf {
    root.join(BOARD_DIR_NAME)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_board_dir(root).join("config.json")
}

/// Get the path to the reservation data file named by the config.
pub fn get_data_path(root: &Path, config: &Config) -> PathBuf {
    get_board_dir(root).join(&config.data_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_board() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(BOARD_DIR_NAME)).unwrap();
        temp
    }

    #[test]
    fn test_find_board_root_from_root() {
        let temp = setup_board();
        let root = find_board_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_board_root_from_subdir() {
        let temp = setup_board();
        let subdir = temp.path().join("reports").join("2025");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_board_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_board_root_ignores_plain_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(BOARD_DIR_NAME), "not a dir").unwrap();

        // May still find a board in an ancestor of the temp dir; it must not
        // be this one.
        if let Ok(root) = find_board_root(temp.path()) {
            assert_ne!(root, temp.path().canonicalize().unwrap());
        }
    }

    #[test]
    fn test_get_paths() {
        let root = PathBuf::from("/hotel");
        let config = Config::default();

        assert_eq!(get_board_dir(&root), PathBuf::from("/hotel/.stayboard"));
        assert_eq!(get_config_path(&root), PathBuf::from("/hotel/.stayboard/config.json"));
        assert_eq!(
            get_data_path(&root, &config),
            PathBuf::from("/hotel/.stayboard/reservations.json")
        );
    }

    #[test]
    fn test_data_path_follows_config() {
        let root = PathBuf::from("/hotel");
        let config = Config {
            data_file: "spring.json".to_string(),
            ..Config::default()
        };
        assert_eq!(
            get_data_path(&root, &config),
            PathBuf::from("/hotel/.stayboard/spring.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
