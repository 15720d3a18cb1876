use std::error::Error;
use std::fmt;

/// Hard failure raised by positional operations handed an index outside
/// `[0, len)`.
///
/// Soft refusals (an absent value, a search with no match) are reported
/// through `bool` / `Option` return values instead; only a bad index is
/// an error. The distinction is part of the collection contract and is
/// exercised by the shared test suites.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The supplied index was not a valid position.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}

impl fmt::Debug for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for CollectionError {}

pub type CollectionResult<T> = Result<T, CollectionError>;
