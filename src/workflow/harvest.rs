use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::domain::event::{CommitRef, Event};
use crate::services::PlatformService;

/// The feed serves at most 300 events, 100 per page.
pub const MAX_EVENTS: u32 = 300;
pub const PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub per_page: u32,
    pub max_events: u32,
    /// Only events strictly after this instant count.
    pub since: DateTime<Utc>,
}

impl HarvestOptions {
    pub fn within_days(days: u32, now: DateTime<Utc>) -> Self {
        Self {
            per_page: PER_PAGE,
            max_events: MAX_EVENTS,
            since: now - Duration::days(days as i64),
        }
    }

    fn page_size(&self) -> u32 {
        self.per_page.clamp(1, PER_PAGE)
    }

    fn page_count(&self) -> u32 {
        self.max_events.div_ceil(self.page_size())
    }
}

/// Walks the activity feed of `username` and returns the distinct commits
/// pushed inside the window, one batch per page read. References are
/// deduplicated across batches and keep feed order.
///
/// A page containing pushes older than the window is the last one read.
/// A failing page ends the walk but keeps what was gathered so far.
pub async fn harvest_commit_refs(
    platform: &dyn PlatformService,
    username: &str,
    options: &HarvestOptions,
) -> Vec<Vec<CommitRef>> {
    let mut batches = Vec::new();
    let mut seen = HashSet::new();

    for page in 1..=options.page_count() {
        let events = match platform
            .user_events(username, options.page_size(), page)
            .await
        {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!("No more pages to load (page {page}): {err}");
                break;
            }
        };
        if events.is_empty() {
            break;
        }

        let pushes: Vec<&Event> = events
            .iter()
            .filter(|event| event.is_push() && event.is_by(username))
            .collect();
        let recent: Vec<&Event> = pushes
            .iter()
            .copied()
            .filter(|event| event.is_after(options.since))
            .collect();

        tracing::info!("{} events fetched from page {page}.", recent.len());

        let batch: Vec<CommitRef> = recent
            .iter()
            .flat_map(|event| event.commit_refs())
            .filter(|commit| commit.distinct)
            .filter(|commit| seen.insert(commit.clone()))
            .collect();
        if !batch.is_empty() {
            batches.push(batch);
        }

        if recent.len() < pushes.len() {
            break;
        }
    }

    batches
}
