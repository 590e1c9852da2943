//! Attribute key records.
//!
//! An [`AttributeKey`] is a declarative binding of the positional list
//! builder to one attribute: which field to read, which value counts as the
//! attribute's default, which URL parameter tag it is written under, and
//! whether its text needs token encoding. All keys share
//! [`AttributeKey::get_values_with`]; adding an attribute means adding one
//! entry to a roster.

use std::fmt;

use crate::format::{format_value, AttrValue, FormatPolicy};
use crate::keys::positional::positional_list;
use crate::model::IndexedItem;
use crate::token;

/// Reads one attribute from an item, `None` when the item has no such
/// attribute (e.g. a design key applied to a color object).
pub type Extractor<T> = for<'a> fn(&'a T) -> Option<AttrValue<'a>>;

/// Specification for a single encoded attribute.
pub struct AttributeKey<T: 'static> {
    /// Human readable attribute name (e.g. "gloss", "overlay time")
    pub name: &'static str,

    /// URL parameter tag, without the `=` (e.g. "p.tg")
    pub tag: &'static str,

    /// Field accessor
    pub extract: Extractor<T>,

    /// Value that is left out of the URL, if any.
    ///
    /// Keys without a default encode every value they read.
    pub default: Option<AttrValue<'static>>,

    /// Whether text values are written as [`token`]s
    pub text_encoded: bool,
}

impl<T: 'static> AttributeKey<T> {
    /// Create a key that encodes every value it reads.
    pub const fn new(name: &'static str, tag: &'static str, extract: Extractor<T>) -> Self {
        Self {
            name,
            tag,
            extract,
            default: None,
            text_encoded: false,
        }
    }

    /// Leave `value` out of the URL.
    pub const fn omit_default(mut self, value: AttrValue<'static>) -> Self {
        self.default = Some(value);
        self
    }

    /// Write text values as URL-safe tokens.
    pub const fn text_encoded(mut self) -> Self {
        self.text_encoded = true;
        self
    }

    /// The text for one item, or `None` for an empty marker.
    fn resolve(&self, item: &T, policy: &FormatPolicy) -> Option<String> {
        let value = (self.extract)(item)?;
        if self.default.is_some_and(|default| default == value) {
            return None;
        }
        match value {
            AttrValue::Text(text) if self.text_encoded => Some(token::encode(text)),
            _ => Some(format_value(&value, policy)),
        }
    }
}

impl<T: IndexedItem + 'static> AttributeKey<T> {
    /// Encode this attribute across `items` with the default policy.
    pub fn get_values(&self, items: &[T]) -> String {
        self.get_values_with(items, &FormatPolicy::default())
    }

    /// Encode this attribute across `items`.
    ///
    /// Returns `"<tag>=<list>"`, or an empty string when no item carries a
    /// value other than the default.
    pub fn get_values_with(&self, items: &[T], policy: &FormatPolicy) -> String {
        let list = positional_list(items, |item| self.resolve(item, policy));
        match list.join(T::DELIMITER) {
            Some(list) => format!("{}={}", self.tag, list),
            None => String::new(),
        }
    }
}

impl<T: 'static> fmt::Debug for AttributeKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeKey")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("default", &self.default)
            .field("text_encoded", &self.text_encoded)
            .finish()
    }
}
