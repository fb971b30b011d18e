use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "textcloud";

/// Scratch directory for clouds handed to the external viewer.
/// Created on demand; creation failures surface later when writing into it.
pub fn temp_cloud_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-clouds", APP_DIR));
    let _ = fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_cloud_dir_exists() {
        let dir = temp_cloud_dir();
        assert!(dir.is_dir());
        assert!(dir.starts_with(std::env::temp_dir()));
    }
}
