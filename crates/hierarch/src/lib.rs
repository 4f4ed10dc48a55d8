//! Hierarchical tag dispatch.
//!
//! A [`Dispatcher`] routes a call to the most specific handler registered
//! for an item's type tag. Tags are strings of segments joined by a
//! separator (`;` by default), for example `creature;animal;cat`. When no
//! handler exists for the full tag the dispatcher falls back to the nearest
//! registered ancestor, and every handler receives an [`Ancestor`] it can use
//! to run the next less specific handler on the resolved chain.
//!
//! Handlers are stored in a [`SegmentedMapping`] from the `hierarch-tree`
//! crate, whose public types are re-exported here.
//!
//! # Core types
//!
//! - [`Dispatcher`] - handler registration and resolution
//! - [`Ancestor`] - the base-call capability passed to each handler
//! - [`TagSource`] and [`FieldTag`] - how the tag is read from an item
//! - [`DispatchConfig`] - separator and lineage checking
//! - [`DispatchError`] - registration and dispatch failures
//!
//! # Example
//!
//! ```
//! use hierarch::Dispatcher;
//!
//! struct Shape {
//!     tag: String,
//! }
//!
//! let mut area = Dispatcher::new(
//!     |shape: &Shape| shape.tag.as_str(),
//!     "shape",
//!     |_, _, _: &()| "shape".to_owned(),
//! )
//! .expect("valid base tag");
//!
//! area.extend("shape;polygon;square", |base, _, _| {
//!     format!("square < {}", base.call().unwrap_or_default())
//! })
//! .expect("new tag");
//!
//! let square = Shape { tag: "shape;polygon;square".to_owned() };
//! assert_eq!(area.invoke(&square, &()).expect("resolves"), "square < shape");
//! ```

mod ancestor;
mod config;
mod dispatcher;
mod error;
mod source;

pub use ancestor::{Ancestor, Handler};
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use source::{FieldTag, TagSource};

pub use hierarch_tree::{Lookup, PathError, SegmentedMapping, SetOutcome};

#[cfg(test)]
mod tests;
