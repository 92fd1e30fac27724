use std::path::Path;

use async_trait::async_trait;

use crate::domain::language::Breakdown;
use crate::error::{AppError, AppResult};
use crate::infra::command;
use crate::services::LanguageClassifierService;

/// `github-linguist` run against a committed snapshot.
pub struct LinguistCli {
    program: String,
}

impl LinguistCli {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

#[async_trait]
impl LanguageClassifierService for LinguistCli {
    async fn breakdown(&self, dir: &Path) -> AppResult<Breakdown> {
        let stdout = command::run(&self.program, &["--breakdown", "--json"], dir)
            .await
            .map_err(AppError::Classifier)?;
        parse_breakdown(&stdout)
    }
}

pub fn parse_breakdown(stdout: &str) -> AppResult<Breakdown> {
    serde_json::from_str(stdout.trim())
        .map_err(|err| AppError::Classifier(format!("failed to parse linguist output: {err}")))
}
