//! In-memory fakes for the service seams.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::commit::{CommitDetail, FileChange, ParentCommit};
use crate::domain::event::{Actor, Event, EventPayload, EventRepo, RepoName};
use crate::domain::language::{Breakdown, LanguageShare};
use crate::domain::snippet::{Snippet, SnippetFile};
use crate::error::{AppError, AppResult};
use crate::services::{
    LanguageClassifierService, PlatformService, SnippetStoreService, VersionControlService,
};

pub fn push_event(login: &str, repo: &str, created_at: DateTime<Utc>, head: &str) -> Event {
    Event {
        kind: Some("PushEvent".to_string()),
        actor: Actor {
            login: login.to_string(),
        },
        repo: EventRepo {
            name: repo.to_string(),
        },
        created_at: Some(created_at),
        payload: EventPayload::HeadOnly {
            head: head.to_string(),
        },
    }
}

pub fn file_change(path: &str, additions: u64, deletions: u64, patch: Option<&str>) -> FileChange {
    FileChange {
        path: path.to_string(),
        additions,
        deletions,
        changes: additions + deletions,
        status: "modified".to_string(),
        patch: patch.map(str::to_string),
    }
}

pub fn commit_detail(sha: &str, parents: usize, files: Vec<FileChange>) -> CommitDetail {
    CommitDetail {
        sha: sha.to_string(),
        parents: (0..parents)
            .map(|i| ParentCommit {
                sha: format!("{sha}-parent{i}"),
            })
            .collect(),
        files,
    }
}

/// Serves scripted event pages (page N is `pages[N - 1]`) and a fixed set
/// of commits keyed by sha.
#[derive(Default)]
pub struct FakePlatform {
    pub pages: Vec<Result<Vec<Event>, String>>,
    pub commits: HashMap<String, CommitDetail>,
    pub requested_pages: Mutex<Vec<u32>>,
    pub requested_commits: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn with_pages(pages: Vec<Result<Vec<Event>, String>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn with_commit(mut self, commit: CommitDetail) -> Self {
        self.commits.insert(commit.sha.clone(), commit);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for FakePlatform {
    async fn user_events(
        &self,
        _username: &str,
        _per_page: u32,
        page: u32,
    ) -> AppResult<Vec<Event>> {
        self.requested_pages.lock().unwrap().push(page);
        match self.pages.get(page as usize - 1) {
            Some(Ok(events)) => Ok(events.clone()),
            Some(Err(message)) => Err(AppError::Platform(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    async fn commit(&self, repo: &RepoName, sha: &str) -> AppResult<CommitDetail> {
        self.requested_commits.lock().unwrap().push(sha.to_string());
        self.commits.get(sha).cloned().ok_or_else(|| {
            AppError::Platform(format!("{}: commit {sha} not found", repo.as_str()))
        })
    }
}

pub struct RecordingSnippetStore {
    pub snippet: Snippet,
    pub fetches: Mutex<usize>,
    pub updates: Mutex<Vec<(String, String, String)>>,
}

impl RecordingSnippetStore {
    pub fn with_files(id: &str, names: &[&str]) -> Self {
        Self {
            snippet: Snippet {
                id: id.to_string(),
                files: names
                    .iter()
                    .map(|name| SnippetFile {
                        filename: name.to_string(),
                        content: String::new(),
                    })
                    .collect(),
            },
            fetches: Mutex::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn updates(&self) -> Vec<(String, String, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl SnippetStoreService for RecordingSnippetStore {
    async fn fetch_snippet(&self, id: &str) -> AppResult<Snippet> {
        *self.fetches.lock().unwrap() += 1;
        if id != self.snippet.id {
            return Err(AppError::SnippetStore(format!("gist {id} not found")));
        }
        Ok(self.snippet.clone())
    }

    async fn update_file(&self, id: &str, filename: &str, content: &str) -> AppResult<()> {
        self.updates.lock().unwrap().push((
            id.to_string(),
            filename.to_string(),
            content.to_string(),
        ));
        Ok(())
    }
}

/// Shared, ordered record of workspace calls. Each entry is the call name
/// followed by the number of entries in the workspace at that moment.
pub type CallLog = Arc<Mutex<Vec<String>>>;

fn log_call(log: &CallLog, call: &str, dir: &Path) {
    let entries = std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0);
    log.lock().unwrap().push(format!("{call} {entries}"));
}

/// Records calls without touching the directory; optionally fails one.
#[derive(Default)]
pub struct RecordingVersionControl {
    pub log: CallLog,
    pub fail_on: Option<&'static str>,
}

impl RecordingVersionControl {
    pub fn failing_on(call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, dir: &Path) -> AppResult<()> {
        log_call(&self.log, call, dir);
        if self.fail_on == Some(call) {
            return Err(AppError::VersionControl(format!("git {call} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControlService for RecordingVersionControl {
    async fn init_repository(&self, dir: &Path) -> AppResult<()> {
        self.record("init", dir)
    }

    async fn commit_all(&self, dir: &Path, _message: &str) -> AppResult<()> {
        self.record("commit", dir)
    }
}

/// Returns a canned breakdown and remembers what was staged.
pub struct StubClassifier {
    pub result: Result<Breakdown, String>,
    pub invocations: Mutex<usize>,
    pub staged: Mutex<HashMap<String, String>>,
    pub staged_in: Mutex<Option<PathBuf>>,
    pub log: CallLog,
}

impl StubClassifier {
    pub fn returning(shares: Vec<(&str, &str, Vec<&str>)>) -> Self {
        let breakdown = shares
            .into_iter()
            .map(|(name, percentage, files)| {
                (
                    name.to_string(),
                    LanguageShare {
                        percentage: percentage.to_string(),
                        files: files.iter().map(|f| f.to_string()).collect(),
                    },
                )
            })
            .collect();
        Self::with_result(Ok(breakdown))
    }

    /// Appends `breakdown` to `log` when invoked.
    pub fn sharing_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn failing(message: &str) -> Self {
        Self::with_result(Err(message.to_string()))
    }

    fn with_result(result: Result<Breakdown, String>) -> Self {
        Self {
            result,
            invocations: Mutex::new(0),
            staged: Mutex::new(HashMap::new()),
            staged_in: Mutex::new(None),
            log: CallLog::default(),
        }
    }

    pub fn invocations(&self) -> usize {
        *self.invocations.lock().unwrap()
    }

    pub fn staged_in(&self) -> Option<PathBuf> {
        self.staged_in.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageClassifierService for StubClassifier {
    async fn breakdown(&self, dir: &Path) -> AppResult<Breakdown> {
        *self.invocations.lock().unwrap() += 1;
        log_call(&self.log, "breakdown", dir);
        *self.staged_in.lock().unwrap() = Some(dir.to_path_buf());
        let mut staged = self.staged.lock().unwrap();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            staged.insert(name, std::fs::read_to_string(entry.path())?);
        }
        self.result.clone().map_err(AppError::Classifier)
    }
}

pub fn test_config(staging_root: &Path) -> AppConfig {
    AppConfig {
        github_token: "ghp_test".to_string(),
        gist_id: "gist-1".to_string(),
        username: "octocat".to_string(),
        days: 14,
        api_base_url: "http://127.0.0.1:9".to_string(),
        linguist_bin: "github-linguist".to_string(),
        git_bin: "git".to_string(),
        staging_root: staging_root.to_path_buf(),
    }
}

pub fn test_context(
    staging_root: &Path,
    platform: Arc<FakePlatform>,
    snippet_store: Arc<RecordingSnippetStore>,
    classifier: Arc<StubClassifier>,
) -> AppContext {
    test_context_with_vcs(
        staging_root,
        platform,
        snippet_store,
        Arc::new(RecordingVersionControl::default()),
        classifier,
    )
}

pub fn test_context_with_vcs(
    staging_root: &Path,
    platform: Arc<FakePlatform>,
    snippet_store: Arc<RecordingSnippetStore>,
    version_control: Arc<RecordingVersionControl>,
    classifier: Arc<StubClassifier>,
) -> AppContext {
    AppContext::new(
        test_config(staging_root),
        platform,
        snippet_store,
        version_control,
        classifier,
    )
}
