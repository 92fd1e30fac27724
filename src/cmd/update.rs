use chrono::Utc;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::pipeline::{PublishOutcome, publish_report, summarize_recent_languages};

pub async fn run(ctx: &AppContext) -> AppResult<PublishOutcome> {
    let summary = summarize_recent_languages(ctx, Utc::now()).await?;

    if summary.languages.is_empty() {
        tracing::info!("No languages detected. Skipping gist update.");
        tracing::info!("This usually means no commits were found in the specified time period.");
        return Ok(PublishOutcome::Skipped);
    }

    println!("{}", summary.report);

    let outcome = publish_report(ctx, &summary.report).await?;
    match &outcome {
        PublishOutcome::Published { filename } => {
            tracing::info!("Gist update succeeded ({filename})")
        }
        PublishOutcome::Skipped => {}
    }
    Ok(outcome)
}
