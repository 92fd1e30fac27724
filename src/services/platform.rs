use async_trait::async_trait;

use crate::domain::commit::CommitDetail;
use crate::domain::event::{Event, RepoName};
use crate::error::AppResult;

#[async_trait]
pub trait PlatformService: Send + Sync {
    /// One page of the public activity feed of `username`; `page` starts at 1.
    async fn user_events(
        &self,
        username: &str,
        per_page: u32,
        page: u32,
    ) -> AppResult<Vec<Event>>;
    async fn commit(&self, repo: &RepoName, sha: &str) -> AppResult<CommitDetail>;
}
