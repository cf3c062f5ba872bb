use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio_util::io::ReaderStream;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Blobs live flat under the storage root, named by their upload id.
pub fn blob_path(storage_root: &Path, upload_id: i64) -> PathBuf {
    storage_root.join(upload_id.to_string())
}

/// Opens the blob for `upload_id` as a stream of chunks no larger than
/// `chunk_size`. Anything other than a regular file is rejected up front.
/// The file handle is released when the stream is dropped.
pub async fn open_for_read(
    storage_root: &Path,
    upload_id: i64,
    chunk_size: usize,
) -> io::Result<ReaderStream<File>> {
    let file = File::open(blob_path(storage_root, upload_id)).await?;
    if !file.metadata().await?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("blob for upload {} is not a regular file", upload_id),
        ));
    }
    Ok(ReaderStream::with_capacity(file, chunk_size.max(1)))
}

pub async fn ensure_storage_root(storage_root: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(storage_root).await
}
