use crate::domain::commit::FileChange;

/// Approximates a file's content from its diff so the classifier has
/// something to sniff.
///
/// Only added and removed lines survive, without their marker. When the
/// platform elided the patch, `changes` newlines stand in for the content
/// so the file still weighs in proportionally.
pub fn reconstruct(change: &FileChange) -> String {
    match change.patch.as_deref().filter(|patch| !patch.is_empty()) {
        Some(patch) => patch
            .split('\n')
            .filter(|line| line.starts_with('+') || line.starts_with('-'))
            .map(|line| &line[1..])
            .collect::<Vec<_>>()
            .join("\n"),
        None => "\n".repeat(change.changes as usize),
    }
}
