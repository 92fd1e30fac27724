use async_trait::async_trait;

use crate::domain::snippet::Snippet;
use crate::error::AppResult;

#[async_trait]
pub trait SnippetStoreService: Send + Sync {
    async fn fetch_snippet(&self, id: &str) -> AppResult<Snippet>;
    async fn update_file(&self, id: &str, filename: &str, content: &str) -> AppResult<()>;
}
