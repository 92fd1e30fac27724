use chrono::Utc;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::pipeline::summarize_recent_languages;

/// Renders the report to stdout without touching the gist.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let summary = summarize_recent_languages(ctx, Utc::now()).await?;
    if summary.report.is_empty() {
        tracing::info!("No languages detected in the last {} days.", ctx.config.days);
        return Ok(());
    }
    println!("{}", summary.report);
    Ok(())
}
