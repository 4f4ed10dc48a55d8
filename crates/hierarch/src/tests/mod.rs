//! Unit tests for the `hierarch` crate.

mod support;
