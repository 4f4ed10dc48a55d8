//! Handler registration and tag resolution.

use std::{fmt, iter};

use hierarch_tree::{SegmentedMapping, SetOutcome};
use serde_json::Value;
use tracing::debug;

use crate::ancestor::{Ancestor, Handler, HandlerFn};
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::source::{FieldTag, TagSource};

/// A handler found while walking a tag, with the number of segments of the
/// tag it is registered under.
type Link<'d, I, A, R> = (usize, &'d HandlerFn<I, A, R>);

/// The most specific link of a resolved tag and the links above it.
type Chain<'d, I, A, R> = (Link<'d, I, A, R>, Vec<Link<'d, I, A, R>>);

/// Routes items to handlers by hierarchical type tag.
///
/// Each dispatcher owns a base tag with a mandatory base handler. More
/// specific handlers are added with [`extend`](Self::extend) or
/// [`override_handler`](Self::override_handler). On
/// [`invoke`](Self::invoke) the item's tag is shortened one segment at a time
/// and every handler registered on the way forms the chain; the most specific
/// one runs, and the others are reachable through its [`Ancestor`].
///
/// # Example
///
/// ```
/// use hierarch::Dispatcher;
/// use serde_json::json;
///
/// let mut describe = Dispatcher::by_field("type", "creature", |_, item, note: &String| {
///     format!("{} ({note})", item["type"].as_str().unwrap_or_default())
/// })
/// .expect("valid base tag");
///
/// describe
///     .extend("creature;animal;cat", |base, _, _| {
///         format!("cat, {}", base.call().unwrap_or_default())
///     })
///     .expect("new tag");
///
/// let cat = json!({ "type": "creature;animal;cat" });
/// let note = "777".to_owned();
/// assert_eq!(
///     describe.invoke(&cat, &note).expect("resolves"),
///     "cat, creature;animal;cat (777)"
/// );
/// ```
pub struct Dispatcher<I, A, R> {
    handlers: SegmentedMapping<Handler<I, A, R>>,
    source: Box<dyn TagSource<I>>,
    base_tag: String,
    config: DispatchConfig,
}

impl<I, A, R> Dispatcher<I, A, R> {
    /// Creates a dispatcher reading tags with `extract` and using the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidPath`] if `base_tag` contains an empty
    /// segment.
    pub fn new<E, H>(
        extract: E,
        base_tag: impl Into<String>,
        base_handler: H,
    ) -> Result<Self, DispatchError>
    where
        E: Fn(&I) -> &str + 'static,
        H: Fn(&Ancestor<'_, I, A, R>, &I, &A) -> R + 'static,
    {
        Self::with_config(DispatchConfig::default(), extract, base_tag, base_handler)
    }

    /// Creates a dispatcher with an explicit configuration and tag source.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidSeparator`] if the configured
    /// separator is empty, or [`DispatchError::InvalidPath`] if `base_tag`
    /// contains an empty segment.
    pub fn with_config<S, H>(
        config: DispatchConfig,
        source: S,
        base_tag: impl Into<String>,
        base_handler: H,
    ) -> Result<Self, DispatchError>
    where
        S: TagSource<I> + 'static,
        H: Fn(&Ancestor<'_, I, A, R>, &I, &A) -> R + 'static,
    {
        config.validate()?;
        let mut dispatcher = Self {
            handlers: SegmentedMapping::new(),
            source: Box::new(source),
            base_tag: base_tag.into(),
            config,
        };
        let base = dispatcher.base_tag.clone();
        dispatcher.add(&base, Box::new(base_handler))?;
        Ok(dispatcher)
    }

    /// Registers `handler` for exactly `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateHandler`] if `tag` already has a
    /// handler, [`DispatchError::InvalidPath`] if it contains an empty
    /// segment, or [`DispatchError::ForeignTag`] if lineage is enforced and
    /// `tag` does not descend from the base tag.
    pub fn extend<H>(&mut self, tag: &str, handler: H) -> Result<(), DispatchError>
    where
        H: Fn(&Ancestor<'_, I, A, R>, &I, &A) -> R + 'static,
    {
        self.add(tag, Box::new(handler))
    }

    /// Registers `handler` for exactly `tag`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidPath`] if `tag` contains an empty
    /// segment, or [`DispatchError::ForeignTag`] if lineage is enforced and
    /// `tag` does not descend from the base tag.
    pub fn override_handler<H>(
        &mut self,
        tag: &str,
        handler: H,
    ) -> Result<SetOutcome, DispatchError>
    where
        H: Fn(&Ancestor<'_, I, A, R>, &I, &A) -> R + 'static,
    {
        self.ensure_lineage(tag)?;
        let path = self.split(tag);
        let outcome = self.handlers.set(&path, Box::new(handler))?;
        debug!(tag, ?outcome, "registered handler");
        Ok(outcome)
    }

    /// Dispatches `item` to the most specific handler for its tag.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnresolvedDispatch`] if neither the tag nor
    /// any of its prefixes has a handler. Tag source, path and lineage
    /// failures are returned as their own variants.
    pub fn invoke(&self, item: &I, args: &A) -> Result<R, DispatchError> {
        let tag = self.source.tag_of(item)?;
        let ((_, target), links) = self.chain(tag)?;
        let ancestors: Vec<&HandlerFn<I, A, R>> =
            links.into_iter().map(|(_, handler)| handler).collect();
        debug!(tag, depth = ancestors.len() + 1, "dispatching");
        let ancestor = Ancestor::new(&ancestors, item, args);
        Ok(target(&ancestor, item, args))
    }

    /// Returns the tags of the handlers `tag` resolves to, least specific
    /// first, without running any of them.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`invoke`](Self::invoke).
    pub fn resolve(&self, tag: &str) -> Result<Vec<String>, DispatchError> {
        let segments = self.split(tag);
        let (target, links) = self.chain(tag)?;
        Ok(links
            .into_iter()
            .chain(iter::once(target))
            .map(|(depth, _)| {
                segments
                    .iter()
                    .take(depth)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(self.config.separator())
            })
            .collect())
    }

    /// Returns the handler storage for inspection.
    #[must_use]
    pub const fn concrete_methods(&self) -> &SegmentedMapping<Handler<I, A, R>> {
        &self.handlers
    }

    /// Returns the base tag.
    #[must_use]
    pub fn base_tag(&self) -> &str {
        &self.base_tag
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    fn add(&mut self, tag: &str, handler: Handler<I, A, R>) -> Result<(), DispatchError> {
        self.ensure_lineage(tag)?;
        let path = self.split(tag);
        if self.handlers.get(&path)?.is_some() {
            return Err(DispatchError::duplicate_handler(tag));
        }
        self.handlers.set(&path, handler)?;
        debug!(tag, "registered handler");
        Ok(())
    }

    /// Walks `tag` towards the root and returns the most specific handler
    /// together with its ancestors, least specific first.
    fn chain(&self, tag: &str) -> Result<Chain<'_, I, A, R>, DispatchError> {
        self.ensure_lineage(tag)?;
        let mut path = self.split(tag);
        let mut links = Vec::new();
        while !path.is_empty() {
            if let Some(handler) = self.handlers.get(&path)? {
                links.push((path.len(), &**handler));
            }
            path.pop();
        }
        let mut found = links.into_iter();
        let Some(target) = found.next() else {
            debug!(tag, "no handler on tag or its prefixes");
            return Err(DispatchError::unresolved(tag));
        };
        let mut ancestors: Vec<_> = found.collect();
        ancestors.reverse();
        Ok((target, ancestors))
    }

    fn split<'t>(&self, tag: &'t str) -> Vec<&'t str> {
        tag.split(self.config.separator()).collect()
    }

    fn ensure_lineage(&self, tag: &str) -> Result<(), DispatchError> {
        if !self.config.requires_base_prefix() || self.descends_from_base(tag) {
            return Ok(());
        }
        Err(DispatchError::foreign_tag(tag, self.base_tag.as_str()))
    }

    fn descends_from_base(&self, tag: &str) -> bool {
        tag.strip_prefix(self.base_tag.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(self.config.separator()))
    }
}

impl<A, R> Dispatcher<Value, A, R> {
    /// Creates a dispatcher for JSON items whose tag is the string in
    /// `field`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidPath`] if `base_tag` contains an empty
    /// segment.
    pub fn by_field<H>(
        field: impl Into<String>,
        base_tag: impl Into<String>,
        base_handler: H,
    ) -> Result<Self, DispatchError>
    where
        H: Fn(&Ancestor<'_, Value, A, R>, &Value, &A) -> R + 'static,
    {
        Self::with_config(
            DispatchConfig::default(),
            FieldTag::new(field),
            base_tag,
            base_handler,
        )
    }
}

impl<I, A, R> fmt::Debug for Dispatcher<I, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_tag", &self.base_tag)
            .field("config", &self.config)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}
