//! Unit tests for `hierarch_tree`.

mod mapping_tests;
