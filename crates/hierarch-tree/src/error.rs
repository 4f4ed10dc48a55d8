//! Error types for segment paths.

use thiserror::Error;

/// Errors returned when a segment path is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// At least one segment of the path is the empty string.
    #[error("path {path:?} contains an empty segment")]
    EmptySegment {
        /// The offending path, segment by segment.
        path: Vec<String>,
    },
}

impl PathError {
    /// Creates a new `EmptySegment` error from the rejected path.
    #[must_use]
    pub fn empty_segment<S: AsRef<str>>(path: &[S]) -> Self {
        Self::EmptySegment {
            path: path.iter().map(|segment| segment.as_ref().to_owned()).collect(),
        }
    }
}

/// Rejects paths that contain an empty segment.
pub(crate) fn ensure_segments<S: AsRef<str>>(path: &[S]) -> Result<(), PathError> {
    if path.iter().any(|segment| segment.as_ref().is_empty()) {
        return Err(PathError::empty_segment(path));
    }
    Ok(())
}
