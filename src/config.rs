use std::env;

use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    /// Raw `Cookie` header value of an existing login session.
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            session_cookie: None,
        })
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url =
            env::var("HALLBOOK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let session_cookie = env::var("HALLBOOK_SESSION_COOKIE")
            .ok()
            .filter(|c| !c.trim().is_empty());

        let mut config = Self::new(base_url)?;
        config.session_cookie = session_cookie;
        Ok(config)
    }
}

fn normalize_base_url(raw: String) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "HALLBOOK_BASE_URL must start with http:// or https://, got '{}'",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:5000/").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn rejects_url_without_scheme() {
        let err = ClientConfig::new("localhost:5000").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
