//! # Attribute Keys
//!
//! Each attribute of an object or overlay collection becomes one URL
//! parameter holding a positional list:
//!
//! ```text
//! objects:  {0, gloss 5}   {2, gloss 9, width 80}
//! p.tg=5,,9
//! p.tw=,,80
//! ```
//!
//! ## Pieces
//!
//! - [`positional`]: the list algorithm shared by every key (last item wins
//!   per index, internal gaps kept, trailing gaps dropped).
//! - [`AttributeKey`]: one declarative record per attribute (field accessor,
//!   default to omit, parameter tag, token encoding).
//! - [`design`] / [`overlay`] / [`template`]: the rosters of object,
//!   overlay and template parameter keys.
//! - [`KeySet`]: walks a roster and appends each non-empty parameter to a
//!   query buffer.
//!
//! ## Omission Rules
//!
//! A key writes nothing at all when every position is empty. A position is
//! empty when there is no item at that index, when the item has no such
//! attribute, or when the value equals the key's declared default.

pub mod attribute;
pub mod design;
pub mod overlay;
pub mod positional;
pub mod set;
pub mod template;

pub use attribute::{AttributeKey, Extractor};
pub use design::{COLOR_KEYS, DESIGN_KEYS};
pub use overlay::OVERLAY_KEYS;
pub use set::{KeySet, FIELD_SEPARATOR};
pub use template::TEMPLATE_KEYS;

use crate::model::{Overlay, TemplateParameter, XpoObject};

pub const DESIGN_KEY_SET: KeySet<XpoObject> = KeySet::new("design", DESIGN_KEYS);
pub const COLOR_KEY_SET: KeySet<XpoObject> = KeySet::new("color", COLOR_KEYS);
pub const OVERLAY_KEY_SET: KeySet<Overlay> = KeySet::new("overlay", OVERLAY_KEYS);
pub const TEMPLATE_KEY_SET: KeySet<TemplateParameter> = KeySet::new("template", TEMPLATE_KEYS);
