use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn init_repository(&self, dir: &Path) -> AppResult<()>;
    /// Stages everything under `dir` and records it as a single commit.
    async fn commit_all(&self, dir: &Path, message: &str) -> AppResult<()>;
}
