#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    /// The underlying slot could not be read. Recovered locally: callers
    /// treat the record as absent and fall back to defaults.
    #[error("Storage read failed: {0}")]
    StorageRead(anyhow::Error),

    /// The slot held a payload that is not a structurally valid record.
    /// Recovered the same way as a read failure.
    #[error("Invalid consent record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// The record could not be written (quota, denied, I/O). Not caught
    /// internally; propagates out of `save` and the manager actions.
    #[error("Storage write failed: {0}")]
    StorageWrite(anyhow::Error),
}
