use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<ParentCommit>,
    #[serde(default)]
    pub files: Vec<FileChange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParentCommit {
    pub sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileChange {
    #[serde(rename = "filename")]
    pub path: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changes: u64,
    #[serde(default)]
    pub status: String,
    /// Elided by the platform for very large diffs.
    pub patch: Option<String>,
}

impl CommitDetail {
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn parent_shas(&self) -> Vec<&str> {
        self.parents.iter().map(|parent| parent.sha.as_str()).collect()
    }
}

/// Flattens the changed files of every non-merge commit.
pub fn attributable_changes(commits: Vec<CommitDetail>) -> Vec<FileChange> {
    commits
        .into_iter()
        .filter(|commit| {
            if commit.is_merge() {
                tracing::debug!(
                    "Skipping merge commit {} (parents {})",
                    commit.sha,
                    commit.parent_shas().join(", ")
                );
            }
            !commit.is_merge()
        })
        .flat_map(|commit| commit.files)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(parents: usize, files: &[&str]) -> CommitDetail {
        CommitDetail {
            sha: "sha".to_string(),
            parents: (0..parents)
                .map(|i| ParentCommit { sha: format!("p{i}") })
                .collect(),
            files: files
                .iter()
                .map(|path| FileChange {
                    path: path.to_string(),
                    additions: 1,
                    deletions: 0,
                    changes: 1,
                    status: "modified".to_string(),
                    patch: None,
                })
                .collect(),
        }
    }

    #[test]
    fn merge_commits_contribute_no_files() {
        let files = attributable_changes(vec![
            commit(2, &["merged.rs", "other.rs"]),
            commit(1, &["kept.rs"]),
            commit(0, &["root.rs"]),
        ]);
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["kept.rs", "root.rs"]);
    }

    #[test]
    fn parses_commit_without_patch() {
        let detail: CommitDetail = serde_json::from_str(
            r#"{
                "sha": "abc",
                "parents": [{"sha": "p1", "url": "https://example.test"}],
                "files": [
                    {"filename": "big.json", "additions": 4000, "deletions": 10, "changes": 4010, "status": "modified"}
                ]
            }"#,
        )
        .unwrap();
        assert!(!detail.is_merge());
        assert_eq!(detail.files[0].changes, 4010);
        assert!(detail.files[0].patch.is_none());
    }
}
