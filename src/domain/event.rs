use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::IgnoredAny;

pub const PUSH_EVENT: &str = "PushEvent";

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub actor: Actor,
    pub repo: EventRepo,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Push payloads differ by feed endpoint: repository feeds list every
/// pushed commit, the user feed only carries the head sha.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    CommitList { commits: Vec<PushedCommit> },
    HeadOnly { head: String },
    Other(IgnoredAny),
}

impl Default for EventPayload {
    fn default() -> Self {
        EventPayload::Other(IgnoredAny)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushedCommit {
    pub sha: String,
    #[serde(default = "default_distinct")]
    pub distinct: bool,
}

fn default_distinct() -> bool {
    true
}

/// `owner/name` as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(pub String);

impl RepoName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn split(&self) -> Option<(&str, &str)> {
        let (owner, name) = self.0.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((owner, name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitRef {
    pub repo: RepoName,
    pub sha: String,
    pub distinct: bool,
}

impl Event {
    pub fn is_push(&self) -> bool {
        self.kind.as_deref() == Some(PUSH_EVENT)
    }

    /// Logins are compared case-insensitively.
    pub fn is_by(&self, login: &str) -> bool {
        self.actor.login.eq_ignore_ascii_case(login)
    }

    pub fn is_after(&self, since: DateTime<Utc>) -> bool {
        self.created_at.is_some_and(|created| created > since)
    }

    /// Expands the payload into one reference per pushed commit. A head-only
    /// payload yields its head as the single, distinct reference.
    pub fn commit_refs(&self) -> Vec<CommitRef> {
        let repo = RepoName(self.repo.name.clone());
        match &self.payload {
            EventPayload::CommitList { commits } => commits
                .iter()
                .map(|commit| CommitRef {
                    repo: repo.clone(),
                    sha: commit.sha.clone(),
                    distinct: commit.distinct,
                })
                .collect(),
            EventPayload::HeadOnly { head } => vec![CommitRef {
                repo,
                sha: head.clone(),
                distinct: true,
            }],
            EventPayload::Other(_) => Vec::new(),
        }
    }
}
