/// Why a payload could not be turned into a model value.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown card category: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnknownCardCategory { found: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum TcgDexError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Decoding failed: {0}")]
    DecodingFailed(#[from] DecodeError),
}

impl TcgDexError {
    /// HTTP status attached to a [`TcgDexError::RequestFailed`], if the
    /// upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TcgDexError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, TcgDexError::RequestFailed { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, TcgDexError::DecodingFailed(_))
    }
}

impl From<serde_json::Error> for TcgDexError {
    fn from(e: serde_json::Error) -> Self {
        TcgDexError::DecodingFailed(DecodeError::Json(e))
    }
}

impl From<reqwest::Error> for TcgDexError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            return TcgDexError::InvalidRequest(e.to_string());
        }
        TcgDexError::RequestFailed {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TcgDexError>;
