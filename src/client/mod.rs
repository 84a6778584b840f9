mod repos;
mod users;

pub use repos::{MigrateRequest, RemoveOutcome, Repo, RepoOwner};
pub use users::CurrentUser;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use thiserror::Error;

use crate::auth::AuthContext;

/// Classification of a failed call. 2xx responses never produce one of
/// these; remove's 404 is reported as a success sub-case, not an error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error ({status}): {body}")]
    Http { status: StatusCode, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(base_url: &str, auth: AuthContext) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.auth.apply(self.client.request(method, url))
    }
}

/// Turns a non-success response into `ApiError::Http`, keeping whatever body
/// the server sent for the user-facing message.
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Http { status, body }
}
