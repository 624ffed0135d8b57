use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("process {id} not found for this owner")]
    NotFound { id: String },

    #[error("store returned no rows")]
    NoRows,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
