use futures::future::join_all;

use crate::domain::commit::CommitDetail;
use crate::domain::event::CommitRef;
use crate::services::PlatformService;

/// Resolves every reference concurrently. Failures are logged and dropped.
pub async fn collect_commits(
    platform: &dyn PlatformService,
    refs: &[CommitRef],
) -> Vec<CommitDetail> {
    let outcomes = join_all(refs.iter().map(|commit| async move {
        (commit, platform.commit(&commit.repo, &commit.sha).await)
    }))
    .await;

    outcomes
        .into_iter()
        .filter_map(|(commit, outcome)| match outcome {
            Ok(detail) => Some(detail),
            Err(err) => {
                tracing::warn!(
                    "Failed to fetch commit {} for {}: {err}",
                    short_sha(&commit.sha),
                    commit.repo.as_str()
                );
                None
            }
        })
        .collect()
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
