//! Shared test helpers for dispatcher test cases.

use crate::{Ancestor, Dispatcher};

/// An item carrying nothing but its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Tagged {
    pub(super) tag: String,
}

pub(super) fn tagged(tag: &str) -> Tagged {
    Tagged {
        tag: tag.to_owned(),
    }
}

pub(super) fn tag_of(item: &Tagged) -> &str {
    &item.tag
}

/// Handler that reports its own name after whatever its ancestor reports.
pub(super) fn trail(
    name: &'static str,
) -> impl Fn(&Ancestor<'_, Tagged, (), String>, &Tagged, &()) -> String + 'static {
    move |base, _, _| match base.call() {
        Some(above) => format!("{above}>{name}"),
        None => name.to_owned(),
    }
}

/// Dispatcher on base tag `a` whose handlers build a trail of names.
pub(super) fn trail_dispatcher() -> Dispatcher<Tagged, (), String> {
    Dispatcher::new(tag_of, "a", trail("a")).expect("valid base tag")
}
