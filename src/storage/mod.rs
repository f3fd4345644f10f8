use std::fs;
use std::path::PathBuf;

use log::{info, warn};

/// File-backed home of the planner CSV blob. Read and write failures are
/// logged and swallowed so the session keeps running in memory only.
pub(crate) struct BlobFile {
    path: PathBuf,
}

impl BlobFile {
    pub(crate) fn new(path: PathBuf) -> BlobFile {
        BlobFile { path }
    }

    /// Read the stored blob. Absent file means a fresh session.
    pub(crate) fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        match fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Unable to read {}: {e}", self.path.display());
                None
            }
        }
    }

    pub(crate) fn save(&self, text: &str) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("Unable to create {}: {e}", parent.display());
                    return;
                }
            }
        }

        if let Err(e) = fs::write(&self.path, text) {
            warn!("Unable to write {}: {e}", self.path.display());
        }
    }

    pub(crate) fn remove(&self) {
        if !self.path.exists() {
            return;
        }

        match fs::remove_file(&self.path) {
            Ok(_) => info!("Removed {}", self.path.display()),
            Err(e) => warn!("Unable to remove {}: {e}", self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        let blob = BlobFile::new(dir.path().join("missing.csv"));
        assert_eq!(blob.load(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let blob = BlobFile::new(dir.path().join("planner.csv"));

        blob.save("type,date,name,amount,text\npayment,2024-01-01,Rent,1,");
        let text = blob.load().unwrap();
        assert!(text.starts_with("type,date,name,amount,text"));

        blob.remove();
        assert_eq!(blob.load(), None);
        // Removing twice is a no-op
        blob.remove();
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let blob = BlobFile::new(dir.path().join("nested").join("planner.csv"));
        blob.save("type,date,name,amount,text");
        assert!(blob.load().is_some());
    }
}
