use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

const PREFIX: &str = ".linguist-tmp";

/// Disposable staging directory, removed when dropped.
///
/// The name is derived from the current time and process id, and creation
/// fails rather than reusing a directory that already exists.
#[derive(Debug)]
pub struct StagingWorkspace {
    path: PathBuf,
}

impl StagingWorkspace {
    pub fn create_in(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        let name = format!(
            "{PREFIX}-{}-{}",
            Utc::now().timestamp_millis(),
            std::process::id()
        );
        let path = root.join(name);
        fs::create_dir(&path)?;
        tracing::info!("Created temporary directory: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for StagingWorkspace {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => tracing::info!("Cleaned up temporary directory: {}", self.path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(
                "Failed to clean up temporary directory {}: {err}",
                self.path.display()
            ),
        }
    }
}
