use std::path::Path;

use async_trait::async_trait;

use crate::domain::language::Breakdown;
use crate::error::AppResult;

/// Per-language breakdown of a committed snapshot at `dir`.
#[async_trait]
pub trait LanguageClassifierService: Send + Sync {
    async fn breakdown(&self, dir: &Path) -> AppResult<Breakdown>;
}
