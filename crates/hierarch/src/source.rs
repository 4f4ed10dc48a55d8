//! Reading a type tag from an item.

use serde_json::Value;

use crate::error::DispatchError;

/// Reads the type tag of an item at dispatch time.
///
/// Any `Fn(&I) -> &str` is a tag source. [`FieldTag`] covers JSON items
/// whose tag sits in a named field.
pub trait TagSource<I: ?Sized> {
    /// Returns the tag carried by `item`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingTag`] when the item has no usable tag.
    fn tag_of<'i>(&self, item: &'i I) -> Result<&'i str, DispatchError>;
}

impl<I, F> TagSource<I> for F
where
    I: ?Sized,
    F: Fn(&I) -> &str,
{
    fn tag_of<'i>(&self, item: &'i I) -> Result<&'i str, DispatchError> {
        Ok(self(item))
    }
}

/// Reads the tag from a string field of a JSON object.
///
/// # Example
///
/// ```
/// use hierarch::{FieldTag, TagSource};
/// use serde_json::json;
///
/// let source = FieldTag::new("type");
/// let item = json!({ "type": "creature;animal", "weight": 5 });
/// assert_eq!(source.tag_of(&item).expect("tagged"), "creature;animal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    field: String,
}

impl FieldTag {
    /// Creates a source reading the tag from `field`.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl TagSource<Value> for FieldTag {
    fn tag_of<'i>(&self, item: &'i Value) -> Result<&'i str, DispatchError> {
        item.get(&self.field)
            .and_then(Value::as_str)
            .ok_or_else(|| DispatchError::missing_tag(&self.field))
    }
}
