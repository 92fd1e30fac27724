use chrono::{DateTime, Utc};

use crate::context::AppContext;
use crate::domain::commit::attributable_changes;
use crate::domain::language::LanguageStat;
use crate::error::{AppError, AppResult};
use crate::report::Report;
use crate::workflow::classify::classify_changes;
use crate::workflow::collect::collect_commits;
use crate::workflow::harvest::{HarvestOptions, harvest_commit_refs};

pub struct LanguageSummary {
    pub languages: Vec<LanguageStat>,
    pub report: Report,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    Skipped,
    Published { filename: String },
}

/// Harvests recent pushes, classifies what they touched and renders the
/// report. Nothing is published here.
pub async fn summarize_recent_languages(
    ctx: &AppContext,
    now: DateTime<Utc>,
) -> AppResult<LanguageSummary> {
    let options = HarvestOptions::within_days(ctx.config.days, now);
    let batches =
        harvest_commit_refs(ctx.platform.as_ref(), &ctx.config.username, &options).await;

    let mut commits = Vec::new();
    for batch in &batches {
        commits.extend(collect_commits(ctx.platform.as_ref(), batch).await);
    }
    tracing::info!("Total commits fetched: {}", commits.len());

    let changes = attributable_changes(commits);
    let languages = classify_changes(ctx, &changes).await?;

    for language in &languages {
        tracing::info!(
            "{}: {} files, {} changes",
            language.name,
            language.file_count,
            language.changes()
        );
    }

    let report = Report::from_stats(&languages);
    Ok(LanguageSummary { languages, report })
}

/// Overwrites the first file of the configured snippet with the report.
/// An empty report leaves the snippet untouched.
pub async fn publish_report(ctx: &AppContext, report: &Report) -> AppResult<PublishOutcome> {
    if report.is_empty() {
        return Ok(PublishOutcome::Skipped);
    }

    let gist_id = &ctx.config.gist_id;
    let snippet = ctx.snippet_store.fetch_snippet(gist_id).await?;
    let file = snippet
        .first_file()
        .ok_or_else(|| AppError::SnippetStore(format!("gist {} has no files", snippet.id)))?;

    ctx.snippet_store
        .update_file(gist_id, &file.filename, &report.render())
        .await?;

    Ok(PublishOutcome::Published {
        filename: file.filename.clone(),
    })
}
