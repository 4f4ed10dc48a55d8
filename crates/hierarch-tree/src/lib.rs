//! Segment-keyed prefix tree used as handler storage by `hierarch`.
//!
//! A [`SegmentedMapping`] maps an ordered sequence of non-empty string
//! segments to a value. Only exact paths are addressed: there is no removal,
//! no enumeration, and no prefix query. Callers that need ancestor lookups
//! walk shrinking paths themselves.
//!
//! # Core types
//!
//! - [`SegmentedMapping`] - the tree itself
//! - [`SetOutcome`] - whether a `set` added or replaced a value
//! - [`Lookup`] - the three-way result of an exact-path lookup
//! - [`PathError`] - rejected paths
//!
//! # Example
//!
//! ```
//! use hierarch_tree::{SegmentedMapping, SetOutcome};
//!
//! let mut tree = SegmentedMapping::new();
//! let outcome = tree.set(&["a", "b", "c"], 5).expect("valid path");
//! assert_eq!(outcome, SetOutcome::AddedNew);
//! assert_eq!(tree.get(&["a", "b", "c"]).expect("valid path"), Some(&5));
//! assert_eq!(tree.get(&["a", "b"]).expect("valid path"), None);
//! ```

mod error;
mod mapping;

pub use error::PathError;
pub use mapping::{Lookup, SegmentedMapping, SetOutcome};

#[cfg(test)]
mod tests;
