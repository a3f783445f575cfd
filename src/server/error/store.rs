use thiserror::Error;

/// Key conflicts and lookups failing inside the in-memory state store.
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    /// A channel descriptor with this Discord channel ID is already mirrored.
    ///
    /// Raised by `create` so callers can tell a fresh insert from an existing
    /// record. The reconciler treats it as already satisfied.
    #[error("Channel {0} is already stored")]
    DuplicateChannel(String),
}
