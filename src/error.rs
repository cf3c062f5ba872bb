use std::io;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures of the download path. A missing metadata record is not an error:
/// the handler answers it with an empty 404 directly.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("malformed upload id: {0:?}")]
    MalformedId(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("blob for upload {id} is unavailable: {source}")]
    BlobUnavailable {
        id: i64,
        #[source]
        source: io::Error,
    },
}

impl ResponseError for DownloadError {
    fn status_code(&self) -> StatusCode {
        match self {
            DownloadError::MalformedId(_) => StatusCode::BAD_REQUEST,
            DownloadError::Database(_) | DownloadError::BlobUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // Detail stays in the logs; clients only see a generic message.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            DownloadError::MalformedId(_) => "Malformed upload id",
            _ => "Internal server error",
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
