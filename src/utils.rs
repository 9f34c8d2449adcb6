/// Utility functions used throughout the application

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get platform-specific debug log directory and file name
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("sandtui-debug.log");
    path
}

/// Default destination for downloaded `.wsb` files
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Destination file for a downloaded configuration
///
/// The name comes from the backend, so anything that could leave
/// `dest_dir` (separators, drive prefixes, `.`/`..`) is refused.
pub fn download_path(dest_dir: &Path, name: &str) -> Result<PathBuf> {
    let unsafe_name = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', ':']);
    if unsafe_name {
        anyhow::bail!("Refusing to save configuration with unsafe name: {:?}", name);
    }

    Ok(dest_dir.join(format!("{}.wsb", name)))
}

/// Write a downloaded configuration to disk, creating the directory if needed
pub async fn save_download(dest_dir: &Path, name: &str, body: &[u8]) -> Result<PathBuf> {
    let path = download_path(dest_dir, name)?;

    tokio::fs::create_dir_all(dest_dir)
        .await
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_path_appends_extension() {
        let path = download_path(Path::new("/tmp/dl"), "secure").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/dl/secure.wsb"));
    }

    #[test]
    fn test_download_path_refuses_escaping_names() {
        for name in ["../evil", "a/b", "..\\evil", "C:evil", "..", ".", "", "  "] {
            assert!(
                download_path(Path::new("/tmp/dl"), name).is_err(),
                "{:?} should be refused",
                name
            );
        }
        assert!(download_path(Path::new("/tmp/dl"), "my.box v2").is_ok());
    }

    #[tokio::test]
    async fn test_save_download_writes_nothing_for_unsafe_name() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("downloads");

        let err = save_download(&dest, "../escape", b"x").await.unwrap_err();
        assert!(err.to_string().contains("unsafe name"));
        assert!(!dest.exists());
        assert!(!dir.path().join("escape.wsb").exists());
    }

    #[tokio::test]
    async fn test_save_download_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let path = save_download(&nested, "dev", b"<Configuration/>").await.unwrap();

        assert_eq!(path, nested.join("dev.wsb"));
        assert_eq!(std::fs::read(&path).unwrap(), b"<Configuration/>");
    }
}
