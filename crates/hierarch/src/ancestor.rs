//! Base-call capability handed to every handler.

use std::fmt;

/// A registered handler.
///
/// The first argument is the handler's [`Ancestor`]; the remaining two are
/// the dispatched item and the dispatcher's argument value.
pub type Handler<I, A, R> = Box<HandlerFn<I, A, R>>;

pub(crate) type HandlerFn<I, A, R> = dyn Fn(&Ancestor<'_, I, A, R>, &I, &A) -> R;

/// The part of a resolved handler chain that lies above the running handler.
///
/// [`call`](Self::call) runs the nearest ancestor with the item and arguments
/// of the current dispatch. That ancestor receives its own `Ancestor`, so base
/// calls telescope up to the least specific handler on the chain. Tags
/// without a registered handler never appear on the chain.
pub struct Ancestor<'a, I, A, R> {
    /// Handlers ordered from least to most specific.
    chain: &'a [&'a HandlerFn<I, A, R>],
    item: &'a I,
    args: &'a A,
}

impl<'a, I, A, R> Ancestor<'a, I, A, R> {
    pub(crate) const fn new(chain: &'a [&'a HandlerFn<I, A, R>], item: &'a I, args: &'a A) -> Self {
        Self { chain, item, args }
    }

    /// Runs the nearest ancestor handler with the current item and arguments.
    ///
    /// Returns `None` when the running handler is the root of its chain.
    #[must_use]
    pub fn call(&self) -> Option<R> {
        self.call_with(self.item, self.args)
    }

    /// Runs the nearest ancestor handler with an explicit item and arguments.
    ///
    /// Further base calls made by that ancestor see `item` and `args`.
    /// Returns `None` when the running handler is the root of its chain.
    #[must_use]
    pub fn call_with(&self, item: &I, args: &A) -> Option<R> {
        let (nearest, rest) = self.chain.split_last()?;
        let parent = Ancestor::new(rest, item, args);
        Some(nearest(&parent, item, args))
    }

    /// Returns `true` when there is an ancestor to call.
    #[must_use]
    pub const fn exists(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Returns how many handlers lie above the running one.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.chain.len()
    }

    /// Returns the item being dispatched.
    #[must_use]
    pub const fn item(&self) -> &'a I {
        self.item
    }

    /// Returns the arguments of the current dispatch.
    #[must_use]
    pub const fn args(&self) -> &'a A {
        self.args
    }
}

impl<I, A, R> fmt::Debug for Ancestor<'_, I, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestor")
            .field("depth", &self.chain.len())
            .finish_non_exhaustive()
    }
}
