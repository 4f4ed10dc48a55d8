//! Prefix tree keyed by string segments.

use std::collections::HashMap;
use std::fmt;

use crate::error::{PathError, ensure_segments};

/// Result of [`SegmentedMapping::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOutcome {
    /// No value was stored at the path before.
    AddedNew,
    /// A previous value at the path was replaced.
    ReplacedExisting,
}

/// Result of [`SegmentedMapping::lookup`].
///
/// Separates a path the tree has never seen from one that exists only as
/// the ancestor of another stored path.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, T> {
    /// Some segment of the path has no node.
    Missing,
    /// Every segment has a node, but no value was set at the final one.
    Vacant,
    /// A value is stored at the path.
    Occupied(&'a T),
}

impl<'a, T> Lookup<'a, T> {
    /// Returns the stored value, if any.
    #[must_use]
    pub fn value(self) -> Option<&'a T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Missing | Self::Vacant => None,
        }
    }

    /// Returns `true` when a node exists for the full path.
    #[must_use]
    pub const fn is_known_path(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

// Hand-written so that `Lookup<T>` is `Copy` without requiring `T: Copy`.
impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

struct Node<T> {
    value: Option<T>,
    children: HashMap<String, Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }
}

/// A prefix tree mapping non-empty segment paths to values.
///
/// Nodes are created on demand by [`set`](Self::set) and never removed. The
/// empty path addresses the root node.
pub struct SegmentedMapping<T> {
    root: Node<T>,
    len: usize,
}

impl<T> SegmentedMapping<T> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Stores `value` at `path`, creating intermediate nodes as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if any segment is empty. The tree
    /// is left untouched in that case.
    pub fn set<S: AsRef<str>>(&mut self, path: &[S], value: T) -> Result<SetOutcome, PathError> {
        ensure_segments(path)?;

        let mut node = &mut self.root;
        for segment in path {
            node = node.children.entry(segment.as_ref().to_owned()).or_default();
        }

        if node.value.replace(value).is_some() {
            Ok(SetOutcome::ReplacedExisting)
        } else {
            self.len += 1;
            Ok(SetOutcome::AddedNew)
        }
    }

    /// Returns the value stored at exactly `path`.
    ///
    /// Values stored at ancestors or descendants of `path` are not
    /// considered.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if any segment is empty.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<&T>, PathError> {
        Ok(self.lookup(path)?.value())
    }

    /// Looks up `path`, reporting whether its node exists at all.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if any segment is empty.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<Lookup<'_, T>, PathError> {
        ensure_segments(path)?;

        let mut node = &self.root;
        for segment in path {
            match node.children.get(segment.as_ref()) {
                Some(child) => node = child,
                None => return Ok(Lookup::Missing),
            }
        }

        Ok(node.value.as_ref().map_or(Lookup::Vacant, Lookup::Occupied))
    }

    /// Returns the number of stored values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no value has been stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for SegmentedMapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SegmentedMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedMapping")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
