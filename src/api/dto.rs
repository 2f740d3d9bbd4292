use serde::Deserialize;

/// Error body the server sends with any non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
