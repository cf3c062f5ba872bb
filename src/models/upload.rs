/// Metadata stored for one uploaded file. The bytes live in the storage
/// root under the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub id: i64,
    pub original_name: String,
    pub size: i64,
    pub created_at: String,
}
