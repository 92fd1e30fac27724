use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DEFAULT_DAYS: u32 = 14;
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_LINGUIST_BIN: &str = "github-linguist";
const DEFAULT_GIT_BIN: &str = "git";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: String,
    pub gist_id: String,
    pub username: String,
    pub days: u32,
    pub api_base_url: String,
    pub linguist_bin: String,
    pub git_bin: String,
    pub staging_root: PathBuf,
}

/// Raw environment values, loaded without validation.
///
/// Backs `langbox config`, which must be able to show a partially
/// configured environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub github_token: Option<String>,
    pub gist_id: Option<String>,
    pub username: Option<String>,
    pub days: Option<String>,
    pub api_base_url: Option<String>,
    pub linguist_bin: Option<String>,
    pub git_bin: Option<String>,
    pub staging_root: Option<String>,
}

impl EnvSnapshot {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            github_token: read("GH_TOKEN"),
            gist_id: read("GIST_ID"),
            username: read("USERNAME"),
            days: read("DAYS"),
            api_base_url: read("GITHUB_API_URL"),
            linguist_bin: read("LINGUIST_BIN"),
            git_bin: read("GIT_BIN"),
            staging_root: read("LANGBOX_STAGING_DIR"),
        }
    }
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_snapshot(EnvSnapshot::from_lookup(lookup))
    }

    pub fn from_snapshot(snapshot: EnvSnapshot) -> AppResult<Self> {
        let github_token = require(snapshot.github_token, "GH_TOKEN")?;
        let gist_id = require(snapshot.gist_id, "GIST_ID")?;
        let username = require(snapshot.username, "USERNAME")?;

        let days = match snapshot.days {
            Some(raw) => {
                let parsed = raw.trim().parse::<i64>().map_err(|_| {
                    AppError::Configuration(format!("DAYS must be an integer, got '{raw}'"))
                })?;
                clamp_days(parsed)
            }
            None => DEFAULT_DAYS,
        };

        Ok(Self {
            github_token,
            gist_id,
            username: username.trim().to_string(),
            days,
            api_base_url: snapshot
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            linguist_bin: snapshot
                .linguist_bin
                .unwrap_or_else(|| DEFAULT_LINGUIST_BIN.to_string()),
            git_bin: snapshot
                .git_bin
                .unwrap_or_else(|| DEFAULT_GIT_BIN.to_string()),
            staging_root: snapshot
                .staging_root
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        })
    }

    pub fn with_days_override(mut self, days: Option<i64>) -> Self {
        if let Some(days) = days {
            self.days = clamp_days(days);
        }
        self
    }
}

pub fn clamp_days(days: i64) -> u32 {
    days.clamp(MIN_DAYS as i64, MAX_DAYS as i64) as u32
}

fn require(value: Option<String>, key: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::Configuration(format!("{key} environment variable is required")))
}
