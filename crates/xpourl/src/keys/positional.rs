//! The positional list builder shared by every attribute key.
//!
//! Given a collection of [`IndexedItem`]s, produces one position per index
//! from `0` up to the highest index whose winning item resolves to a value.
//! A position holds text when the winning item at that index resolves to a
//! value, and is an empty marker otherwise.
//!
//! ```text
//! items:  {0, gloss 5}  {2, gloss 9}  {2, gloss 4}  {3, gloss 0}
//! slots:  "5"           <empty>       "4"           <trimmed>
//! joined: 5,,4
//! ```
//!
//! Internal empty markers stay: they keep position `i` of this attribute
//! aligned with position `i` of every other attribute of the same
//! collection. Trailing empty markers are dropped, since nothing after them
//! needs to line up.
//!
//! Only positions that carry a value are stored, so memory follows the item
//! count rather than the highest index. The joined text still holds one
//! delimiter per position, so its length grows with the highest index that
//! resolves to a value.

use std::collections::BTreeMap;

use crate::model::IndexedItem;

/// The resolved positions of one attribute, in ascending index order.
///
/// Positions without an entry are empty markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalList {
    values: Vec<(u32, String)>,
}

impl PositionalList {
    /// True when no position carries a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of positions up to and including the last value.
    pub fn len(&self) -> usize {
        self.values
            .last()
            .map_or(0, |(index, _)| *index as usize + 1)
    }

    /// The value at `index`, `None` for an empty marker.
    pub fn get(&self, index: u32) -> Option<&str> {
        self.values
            .binary_search_by_key(&index, |(i, _)| *i)
            .ok()
            .map(|found| self.values[found].1.as_str())
    }

    /// Join positions with `delimiter`, or `None` when no position carries a
    /// value.
    pub fn join(&self, delimiter: char) -> Option<String> {
        if self.values.is_empty() {
            return None;
        }

        let mut joined = String::new();
        let mut position = 0;
        for (index, text) in &self.values {
            while position < *index {
                joined.push(delimiter);
                position += 1;
            }
            joined.push_str(text);
        }
        Some(joined)
    }
}

/// Build the positional list for one attribute.
///
/// A single pass records the last item seen for each index, then every
/// winner is resolved once, in index order.
pub fn positional_list<'a, T, F>(items: &'a [T], mut resolve: F) -> PositionalList
where
    T: IndexedItem,
    F: FnMut(&'a T) -> Option<String>,
{
    let mut winners: BTreeMap<u32, &'a T> = BTreeMap::new();
    for item in items {
        winners.insert(item.index(), item);
    }

    let values = winners
        .into_iter()
        .filter_map(|(index, item)| resolve(item).map(|text| (index, text)))
        .collect();
    PositionalList { values }
}
