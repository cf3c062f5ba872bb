use std::io;

use actix_web::http::header;
use actix_web::web::Bytes;
use actix_web::{web, HttpResponse};
use futures_util::{Stream, TryStreamExt};
use tracing::{error, info, warn};

use crate::db;
use crate::encoding;
use crate::error::DownloadError;
use crate::state::AppState;
use crate::storage;

fn parse_upload_id(raw: &str) -> Result<i64, DownloadError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DownloadError::MalformedId(raw.to_string()))
}

// Once the 200 is committed a read failure can only be logged; the client
// sees a truncated body.
fn log_stream_errors<S>(upload_id: i64, stream: S) -> impl Stream<Item = io::Result<Bytes>> + 'static
where
    S: Stream<Item = io::Result<Bytes>> + 'static,
{
    stream.inspect_err(move |e| error!(upload_id, "Download aborted mid-stream: {}", e))
}

/// Streams a stored upload back as an attachment. Unknown ids get an empty 404.
pub async fn download_file(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, DownloadError> {
    let raw_id = path.into_inner();
    let upload_id = parse_upload_id(&raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "Rejected download request: {}", e);
        e
    })?;

    let record = match db::find_upload(&state.pool, upload_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!(upload_id, "Failed to look up upload: {}", e);
            return Err(e.into());
        }
    };

    // Open before committing a 200 so a missing blob never sends file bytes
    let config = &state.config;
    let stream = storage::open_for_read(&config.storage_root, upload_id, config.chunk_size)
        .await
        .map_err(|source| {
            error!(upload_id, "Failed to open blob: {}", source);
            DownloadError::BlobUnavailable { id: upload_id, source }
        })?;

    let response = HttpResponse::Ok()
        .insert_header((
            header::CONTENT_DISPOSITION,
            encoding::content_disposition(&record.original_name),
        ))
        .content_type("application/octet-stream")
        .streaming(log_stream_errors(upload_id, stream));

    info!(
        upload_id = record.id,
        size = record.size,
        uploaded_at = %record.created_at,
        "Download file ID: {}",
        upload_id
    );
    Ok(response)
}
