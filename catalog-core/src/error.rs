use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A record source was unreachable or not a JSON array.
    #[error("failed to load {file}: {reason}")]
    Load { file: String, reason: String },

    /// A single record in an otherwise valid source was malformed.
    #[error("malformed record at index {index}: {reason}")]
    Data { index: usize, reason: String },

    /// Writing the bookmark slot to persistent storage failed.
    #[error("bookmark storage write failed: {0}")]
    Storage(String),
}
