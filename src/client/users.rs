use reqwest::Method;
use serde::Deserialize;

use super::{http_error, ApiClient, ApiError};

/// The authenticated account. `id` feeds migration's `uid` field; `login`
/// is the owner segment for repository deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    #[serde(alias = "username")]
    pub login: String,
}

impl ApiClient {
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        let response = self.build_request(Method::GET, "/user").send().await?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        Ok(response.json().await?)
    }
}
