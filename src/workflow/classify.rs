use std::collections::HashMap;
use std::path::Path;

use crate::context::AppContext;
use crate::domain::commit::FileChange;
use crate::domain::diff::reconstruct;
use crate::domain::language::{Breakdown, LanguageStat, sort_by_share};
use crate::error::{AppError, AppResult};
use crate::workspace::StagingWorkspace;

const ATTRIBUTES_FILE: &str = ".gitattributes";
const ATTRIBUTES: &str = "* linguist-detectable\n";
const SNAPSHOT_MESSAGE: &str = "dummy";

/// Line counts of the change a staged file was reconstructed from.
#[derive(Debug, Clone, Copy, Default)]
struct StagedCounts {
    additions: u64,
    deletions: u64,
}

/// Classifies the reconstructed changes and returns one stat per detected
/// language, largest share first.
///
/// The staging workspace is removed on every path out of this function.
pub async fn classify_changes(
    ctx: &AppContext,
    changes: &[FileChange],
) -> AppResult<Vec<LanguageStat>> {
    let workspace = StagingWorkspace::create_in(&ctx.config.staging_root)?;
    if changes.is_empty() {
        return Ok(Vec::new());
    }

    let dir = workspace.path();
    ctx.version_control.init_repository(dir).await?;
    let staged = stage_files(&workspace, changes).await?;
    tokio::fs::write(workspace.file_path(ATTRIBUTES_FILE), ATTRIBUTES).await?;
    ctx.version_control.commit_all(dir, SNAPSHOT_MESSAGE).await?;

    let breakdown = ctx.classifier.breakdown(dir).await?;
    aggregate(breakdown, &staged)
}

async fn stage_files(
    workspace: &StagingWorkspace,
    changes: &[FileChange],
) -> AppResult<HashMap<String, StagedCounts>> {
    let mut staged = HashMap::with_capacity(changes.len());
    for (index, change) in changes.iter().enumerate() {
        let name = staged_name(index, &change.path);
        tracing::debug!("Staging {} ({}) as {name}", change.path, change.status);
        tokio::fs::write(workspace.file_path(&name), reconstruct(change)).await?;
        staged.insert(
            name,
            StagedCounts {
                additions: change.additions,
                deletions: change.deletions,
            },
        );
    }
    Ok(staged)
}

/// `<index>.<ext>`; only the extension of the original path is kept.
fn staged_name(index: usize, path: &str) -> String {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{index}.{ext}"),
        _ => index.to_string(),
    }
}

fn aggregate(
    breakdown: Breakdown,
    staged: &HashMap<String, StagedCounts>,
) -> AppResult<Vec<LanguageStat>> {
    let mut stats = breakdown
        .into_iter()
        .map(|(name, share)| {
            let percent = share.percentage.trim().parse::<f64>().map_err(|_| {
                AppError::Classifier(format!(
                    "invalid percentage '{}' for {name}",
                    share.percentage
                ))
            })?;
            let totals = share
                .files
                .iter()
                .filter_map(|file| staged.get(file))
                .fold(StagedCounts::default(), |acc, counts| StagedCounts {
                    additions: acc.additions + counts.additions,
                    deletions: acc.deletions + counts.deletions,
                });
            Ok(LanguageStat {
                name,
                percent,
                additions: totals.additions,
                deletions: totals.deletions,
                file_count: share.files.len(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    sort_by_share(&mut stats);
    Ok(stats)
}
