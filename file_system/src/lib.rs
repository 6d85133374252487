use std::path::PathBuf;

use directories_next::{ProjectDirs, UserDirs};

const APP_DIR_NAME: &str = "fruits-dashboard";

/// Returns path to the log directory located in default data dir for application,
/// e.g. `~/.local/share/fruits-dashboard/logs` on Linux.
///
/// Falls back to `./fruits-dashboard/logs` when no home directory can be determined.
pub fn get_log_dir() -> PathBuf {
    get_default_data_dir().join("logs")
}

/// Default folder offered for CSV exports: the user's download dir, then home,
/// then the current dir.
pub fn get_default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| {
            dirs.download_dir()
                .map(PathBuf::from)
                .or_else(|| Some(dirs.home_dir().to_path_buf()))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

fn get_default_data_dir() -> PathBuf {
    match ProjectDirs::from("org", "fruits", APP_DIR_NAME) {
        Some(project_dirs) => project_dirs.data_local_dir().to_path_buf(),
        None => PathBuf::from(".").join(APP_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_inside_app_dir() {
        let log_dir = get_log_dir();
        assert!(log_dir.ends_with("logs"));
        assert!(
            log_dir
                .components()
                .any(|c| c.as_os_str().to_string_lossy().contains(APP_DIR_NAME))
        );
    }

    #[test]
    fn test_default_export_dir_is_not_empty() {
        assert!(!get_default_export_dir().as_os_str().is_empty());
    }
}
