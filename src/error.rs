use thiserror::Error;

/// The error type for fallible map operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A bounds-checked lookup was performed with a key the map does not contain.
    #[error("key not found")]
    KeyNotFound,
    /// A cursor operation was given a cursor that does not refer to a live entry
    /// of this map: it belongs to another map, its entry has been removed, or it
    /// was moved past the ends of the sequence.
    #[error("invalid cursor")]
    InvalidCursor,
}
