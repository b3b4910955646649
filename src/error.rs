//! Errors surfaced by store lookups and view accessors.

/// Failures reported by [`ColumnarStore`](crate::ColumnarStore) and the views it hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index fell outside `0 .. len`.
    ///
    /// Signed indices from other surfaces arrive wrapped (`-1` becomes `usize::MAX`)
    /// and land here as well.
    #[error("index {index} out of range for store of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// A key or value was read through a view whose slot is missing.
    #[error("key/value read on a missing view; check `is_missing()` before reading")]
    MissingValueAccess,
    /// A sequential store was requested with no elements.
    #[error("a store must hold at least one element")]
    EmptyStore,
    /// Key and value columns of different lengths were offered as one store.
    #[error("key column has {keys} entries but value column has {values}")]
    ColumnLengthMismatch { keys: usize, values: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn messages_name_the_bounds() {
        let err = Error::OutOfRange { index: 5, len: 5 };
        assert_eq!(err.to_string(), "index 5 out of range for store of length 5");
        let err = Error::ColumnLengthMismatch { keys: 3, values: 2 };
        assert_eq!(err.to_string(), "key column has 3 entries but value column has 2");
    }
}
