//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Separator and lineage settings for a [`Dispatcher`](crate::Dispatcher).
///
/// # Defaults
///
/// - `separator`: `";"`
/// - `require_base_prefix`: `false`
///
/// With `require_base_prefix` unset, a tag that does not start with the base
/// tag is still walked and simply fails to resolve unless some registered
/// prefix matches. Setting it rejects such tags up front with
/// [`DispatchError::ForeignTag`].
///
/// # Example
///
/// ```
/// use hierarch::DispatchConfig;
///
/// let config = DispatchConfig::default().with_separator("/");
/// assert_eq!(config.separator(), "/");
/// assert!(!config.requires_base_prefix());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// String placed between tag segments.
    separator: String,
    /// Whether every tag must equal or extend the base tag.
    require_base_prefix: bool,
}

impl DispatchConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(separator: impl Into<String>, require_base_prefix: bool) -> Self {
        Self {
            separator: separator.into(),
            require_base_prefix,
        }
    }

    /// Returns a copy using `separator` between tag segments.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns a copy with base-tag lineage checking switched on or off.
    #[must_use]
    pub const fn require_base_prefix(mut self, required: bool) -> Self {
        self.require_base_prefix = required;
        self
    }

    /// Returns the tag separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns whether tags must descend from the base tag.
    #[must_use]
    pub const fn requires_base_prefix(&self) -> bool {
        self.require_base_prefix
    }

    /// Checks that the configuration can split tags.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidSeparator`] when the separator is
    /// empty.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.separator.is_empty() {
            return Err(DispatchError::InvalidSeparator);
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            separator: ";".to_owned(),
            require_base_prefix: false,
        }
    }
}
