use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Carries the id as the caller supplied it, which may not be an integer.
    #[error("Product with ID {0} does not exist")]
    ProductNotFound(String),

    #[error("No products found")]
    NoProducts,

    #[error("No products found in category '{0}'")]
    CategoryEmpty(String),

    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Invalid action")]
    InvalidAction,

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::ProductNotFound(id.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MissingInput(_) | Self::InvalidAction => {
                StatusCode::BAD_REQUEST
            }
            Self::ProductNotFound(_) | Self::NoProducts | Self::CategoryEmpty(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Io(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // HTTP clients get the fixed wording regardless of which id was asked for
            Self::ProductNotFound(_) => "Product not found".to_string(),
            other => other.to_string(),
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
