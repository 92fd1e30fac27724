use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::commit::CommitDetail;
use crate::domain::event::{Event, RepoName};
use crate::domain::snippet::{Snippet, SnippetFile};
use crate::error::{AppError, AppResult};
use crate::services::{PlatformService, SnippetStoreService};

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST client for the event feed, commits and gists.
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, String> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|err| format!("failed to fetch {what}: {err}"))?;
        let response = ensure_success(response, what).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| format!("failed to parse {what}: {err}"))
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unable to read response>".to_string());
    Err(format!("{what}: GitHub responded with {status}: {body}"))
}

#[async_trait]
impl PlatformService for GitHubClient {
    async fn user_events(
        &self,
        username: &str,
        per_page: u32,
        page: u32,
    ) -> AppResult<Vec<Event>> {
        let request = self
            .http
            .get(self.endpoint(&format!("users/{username}/events")))
            .query(&[("per_page", per_page), ("page", page)]);
        self.get_json(request, "events")
            .await
            .map_err(AppError::Platform)
    }

    async fn commit(&self, repo: &RepoName, sha: &str) -> AppResult<CommitDetail> {
        let (owner, name) = repo.split().ok_or_else(|| {
            AppError::Platform(format!("invalid repository name '{}'", repo.as_str()))
        })?;
        let request = self
            .http
            .get(self.endpoint(&format!("repos/{owner}/{name}/commits/{sha}")));
        self.get_json(request, "commit")
            .await
            .map_err(AppError::Platform)
    }
}

#[async_trait]
impl SnippetStoreService for GitHubClient {
    async fn fetch_snippet(&self, id: &str) -> AppResult<Snippet> {
        let request = self.http.get(self.endpoint(&format!("gists/{id}")));
        let gist: GistResponse = self
            .get_json(request, "gist")
            .await
            .map_err(AppError::SnippetStore)?;
        Ok(gist.into_snippet(id))
    }

    async fn update_file(&self, id: &str, filename: &str, content: &str) -> AppResult<()> {
        let body = GistUpdateRequest::single(filename, content);
        let request = self
            .http
            .patch(self.endpoint(&format!("gists/{id}")))
            .json(&body);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|err| AppError::SnippetStore(format!("failed to update gist: {err}")))?;
        ensure_success(response, "gist update")
            .await
            .map_err(AppError::SnippetStore)?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct GistResponse {
    #[serde(default)]
    files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct GistFile {
    filename: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl GistResponse {
    fn into_snippet(self, id: &str) -> Snippet {
        let files = self
            .files
            .into_iter()
            .map(|(key, value)| {
                let file = serde_json::from_value::<GistFile>(value).ok();
                let (filename, content) = match file {
                    Some(file) => (file.filename.unwrap_or(key), file.content.unwrap_or_default()),
                    None => (key, String::new()),
                };
                SnippetFile { filename, content }
            })
            .collect();
        Snippet {
            id: id.to_string(),
            files,
        }
    }
}

#[derive(Serialize)]
struct GistUpdateRequest<'a> {
    files: HashMap<&'a str, GistFileContent<'a>>,
}

#[derive(Serialize)]
struct GistFileContent<'a> {
    content: &'a str,
}

impl<'a> GistUpdateRequest<'a> {
    fn single(filename: &'a str, content: &'a str) -> Self {
        Self {
            files: HashMap::from([(filename, GistFileContent { content })]),
        }
    }
}
