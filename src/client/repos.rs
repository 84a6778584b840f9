use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use super::{http_error, ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub full_name: Option<String>,
    pub owner: Option<RepoOwner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub id: i64,
    // Gogs serves the account name as `username`; newer forks use `login`.
    #[serde(alias = "username")]
    pub login: String,
}

#[derive(Debug, Serialize)]
struct RepoCreate<'a> {
    name: &'a str,
}

/// Import request for `/repos/migrate`. `uid` is the numeric id of the
/// receiving account, so this cannot be built until the current user has
/// been resolved.
#[derive(Debug, Clone, Serialize)]
pub struct MigrateRequest {
    pub clone_addr: String,
    pub repo_name: String,
    pub uid: i64,
    pub mirror: bool,
    pub private: bool,
}

/// A repository that is already gone is the desired end state of a remove,
/// not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl ApiClient {
    pub async fn create_repo(&self, name: &str) -> Result<Repo, ApiError> {
        let response = self
            .build_request(Method::POST, "/user/repos")
            .json(&RepoCreate { name })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        Ok(response.json().await?)
    }

    pub async fn list_repos(&self) -> Result<Vec<Repo>, ApiError> {
        let response = self
            .build_request(Method::GET, "/user/repos")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        Ok(response.json().await?)
    }

    pub async fn remove_repo(&self, owner: &str, name: &str) -> Result<RemoveOutcome, ApiError> {
        let response = self
            .build_request(Method::DELETE, &format!("/repos/{owner}/{name}"))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(RemoveOutcome::NotFound),
            status if status.is_success() => Ok(RemoveOutcome::Removed),
            _ => Err(http_error(response).await),
        }
    }

    /// One attempt, no retries. The import endpoint is atomic from the
    /// client's perspective, so a failure here leaves nothing to clean up.
    pub async fn migrate_repo(&self, request: &MigrateRequest) -> Result<Repo, ApiError> {
        let response = self
            .build_request(Method::POST, "/repos/migrate")
            .json(request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(response.json().await?),
            _ => Err(http_error(response).await),
        }
    }
}
