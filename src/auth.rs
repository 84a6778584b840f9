use reqwest::RequestBuilder;

use crate::config::{FileConfig, DEFAULT_API_KEY};

/// Resolved authentication for one invocation. Exactly one mode is active:
/// a non-empty API token always wins over username/password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    Token(String),
    Basic { username: String, password: String },
}

impl AuthContext {
    /// Explicit flags win over the config file; the built-in demo key is the
    /// last resort, applied only when neither level supplies a key. An empty
    /// `--api` value falls through to the configured key rather than masking
    /// it, so a token present anywhere keeps precedence over Basic mode.
    ///
    /// Missing Basic credentials resolve to empty strings and are rejected
    /// by the server; resolution itself never fails.
    pub fn resolve(
        config: &FileConfig,
        api_flag: Option<&str>,
        username_flag: Option<&str>,
        password_flag: Option<&str>,
    ) -> Self {
        let api_key = match (api_flag, config.api.key.as_deref()) {
            (Some(flag), _) if !flag.is_empty() => flag.to_string(),
            (_, Some(key)) => key.to_string(),
            (Some(_), None) => String::new(),
            (None, None) => DEFAULT_API_KEY.to_string(),
        };

        if !api_key.is_empty() {
            return AuthContext::Token(api_key);
        }

        AuthContext::Basic {
            username: username_flag
                .map(|s| s.to_string())
                .or_else(|| config.auth.username.clone())
                .unwrap_or_default(),
            password: password_flag
                .map(|s| s.to_string())
                .or_else(|| config.auth.password.clone())
                .unwrap_or_default(),
        }
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            AuthContext::Token(key) => request.header("Authorization", format!("token {key}")),
            AuthContext::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}
