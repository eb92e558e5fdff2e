use std::path::{Path, PathBuf};

/// File holding the local key/value session store
pub const SESSION_FILE: &str = "session.json";

/// Optional settings file
pub const CONFIG_FILE: &str = "config.toml";

/// Get the app data directory.
///
/// An explicit directory (from `--data-dir` or `NOTEFLOW_HOME`) wins,
/// otherwise `./data` next to the working directory.
pub fn get_app_data_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from("./data"),
    }
}

pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        assert_eq!(get_app_data_dir(None), PathBuf::from("./data"));
    }

    #[test]
    fn test_override_data_dir() {
        let dir = get_app_data_dir(Some(Path::new("/tmp/noteflow")));
        assert_eq!(session_path(&dir), PathBuf::from("/tmp/noteflow/session.json"));
        assert_eq!(config_path(&dir), PathBuf::from("/tmp/noteflow/config.toml"));
    }
}
