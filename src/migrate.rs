use thiserror::Error;

use crate::client::{ApiClient, ApiError, MigrateRequest, Repo};

/// Either step failing ends the workflow; there is no rollback because the
/// import endpoint creates nothing on failure.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("could not resolve the receiving account: {0}")]
    OwnerResolution(#[source] ApiError),
    #[error("migration was not accepted: {0}")]
    Submission(#[source] ApiError),
}

/// Imports a repository from a remote host into the authenticated user's
/// account. The import endpoint wants the numeric id of the receiving
/// account rather than a name, so the current user is resolved first; the
/// import request is never sent if that step fails.
pub async fn migrate_repo(
    client: &ApiClient,
    source_url: &str,
    name: Option<&str>,
) -> Result<Repo, MigrateError> {
    let repo_name = match name {
        Some(name) => name.to_string(),
        None => target_name(source_url),
    };

    let user = client
        .current_user()
        .await
        .map_err(MigrateError::OwnerResolution)?;

    let request = MigrateRequest {
        clone_addr: source_url.to_string(),
        repo_name,
        uid: user.id,
        mirror: false,
        private: false,
    };

    client
        .migrate_repo(&request)
        .await
        .map_err(MigrateError::Submission)
}

/// Default target name: the last non-empty `/`-segment of the source URL,
/// extension kept.
pub fn target_name(source_url: &str) -> String {
    source_url
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or(source_url)
        .to_string()
}
