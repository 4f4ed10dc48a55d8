//! Error types for handler registration and dispatch.

use hierarch_tree::PathError;
use thiserror::Error;

/// Errors returned by [`Dispatcher`](crate::Dispatcher) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A tag split into a path with an empty segment.
    #[error("invalid tag path: {0}")]
    InvalidPath(#[from] PathError),

    /// `extend` was called for a tag that already has a handler.
    #[error("a handler is already registered for tag '{tag}'; use override_handler to replace it")]
    DuplicateHandler {
        /// The conflicting tag.
        tag: String,
    },

    /// No handler was found for the tag or any of its ancestors.
    #[error("could not resolve a handler for tag '{tag}'")]
    UnresolvedDispatch {
        /// The full tag read from the item.
        tag: String,
    },

    /// The item carries no string tag where the tag source looks for one.
    #[error("item has no string tag in field '{field}'")]
    MissingTag {
        /// Field the tag was expected in.
        field: String,
    },

    /// The configured tag separator is empty.
    #[error("tag separator must not be empty")]
    InvalidSeparator,

    /// A tag does not descend from the base tag while lineage is enforced.
    #[error("tag '{tag}' does not descend from base tag '{base}'")]
    ForeignTag {
        /// The rejected tag.
        tag: String,
        /// The dispatcher's base tag.
        base: String,
    },
}

impl DispatchError {
    /// Creates a new `DuplicateHandler` error.
    #[must_use]
    pub fn duplicate_handler(tag: impl Into<String>) -> Self {
        Self::DuplicateHandler { tag: tag.into() }
    }

    /// Creates a new `UnresolvedDispatch` error.
    #[must_use]
    pub fn unresolved(tag: impl Into<String>) -> Self {
        Self::UnresolvedDispatch { tag: tag.into() }
    }

    /// Creates a new `MissingTag` error.
    #[must_use]
    pub fn missing_tag(field: impl Into<String>) -> Self {
        Self::MissingTag {
            field: field.into(),
        }
    }

    /// Creates a new `ForeignTag` error.
    #[must_use]
    pub fn foreign_tag(tag: impl Into<String>, base: impl Into<String>) -> Self {
        Self::ForeignTag {
            tag: tag.into(),
            base: base.into(),
        }
    }
}
