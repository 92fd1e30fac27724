use std::path::Path;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::infra::command;
use crate::services::VersionControlService;

const SNAPSHOT_USER: &str = "user.name=dummy";
const SNAPSHOT_EMAIL: &str = "user.email=dummy@github.com";

pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: String) -> Self {
        Self { program }
    }

    async fn git(&self, dir: &Path, args: &[&str]) -> AppResult<String> {
        command::run(&self.program, args, dir)
            .await
            .map_err(AppError::VersionControl)
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn init_repository(&self, dir: &Path) -> AppResult<()> {
        self.git(dir, &["init", "--quiet"]).await?;
        Ok(())
    }

    async fn commit_all(&self, dir: &Path, message: &str) -> AppResult<()> {
        if message.trim().is_empty() {
            return Err(AppError::VersionControl(
                "commit message cannot be empty".to_string(),
            ));
        }
        self.git(dir, &["add", "--all", "."]).await?;
        self.git(
            dir,
            &[
                "-c",
                SNAPSHOT_USER,
                "-c",
                SNAPSHOT_EMAIL,
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--quiet",
                "--no-verify",
                "-m",
                message,
            ],
        )
        .await?;
        Ok(())
    }
}
