use thiserror::Error;

/// Errors reported by the dynamically sized [`HashAdaptor`].
///
/// [`HashAdaptor`]: crate::container::hash_adaptor::HashAdaptor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAdaptorError {
    /// Every slot holds a key and none of them equals the key being inserted.
    #[error("Hash table is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },
}
