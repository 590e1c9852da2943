//! Key sets: the fixed roster of attribute keys for one collection.

use tracing::trace;

use crate::format::FormatPolicy;
use crate::keys::attribute::AttributeKey;
use crate::model::IndexedItem;

/// Separator between query-string parameters.
pub const FIELD_SEPARATOR: char = '&';

/// An ordered roster of attribute keys.
///
/// Roster order only decides the order parameters appear in the URL.
#[derive(Debug)]
pub struct KeySet<T: 'static> {
    pub name: &'static str,
    keys: &'static [AttributeKey<T>],
}

impl<T: 'static> KeySet<T> {
    pub const fn new(name: &'static str, keys: &'static [AttributeKey<T>]) -> Self {
        Self { name, keys }
    }

    pub fn keys(&self) -> &'static [AttributeKey<T>] {
        self.keys
    }
}

impl<T: IndexedItem + 'static> KeySet<T> {
    /// All non-empty fragments (`tag=list`), in roster order.
    pub fn fragments(&self, items: &[T], policy: &FormatPolicy) -> Vec<String> {
        self.keys
            .iter()
            .map(|key| key.get_values_with(items, policy))
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Append every non-empty fragment to `buffer`, each preceded by `&`.
    pub fn append_to(&self, buffer: &mut String, items: &[T]) {
        self.append_to_with(buffer, items, &FormatPolicy::default());
    }

    pub fn append_to_with(&self, buffer: &mut String, items: &[T], policy: &FormatPolicy) {
        let fragments = self.fragments(items, policy);
        trace!(
            set = self.name,
            items = items.len(),
            fragments = fragments.len(),
            "encoded key set"
        );
        for fragment in fragments {
            buffer.push(FIELD_SEPARATOR);
            buffer.push_str(&fragment);
        }
    }
}
