//! # xpourl
//!
//! Builds query-string URLs for the XPO image render API.
//!
//! A render request describes a scene (the primary key) plus two sparse,
//! index-addressed collections: the objects placed in the scene (designs or
//! plain colors) and the overlays drawn on top of it. The render service
//! expects every attribute of those collections as its own URL parameter,
//! holding one comma-separated value per object index:
//!
//! ```text
//! p.tg=5,,9        gloss of object 0 is 5, object 1 has none, object 2 is 9
//! p.tw=120,,80     width  of object 0 is 120, object 2 is 80
//! ```
//!
//! Positions line up across parameters, so position 2 of `p.tg` and position
//! 2 of `p.tw` both describe object index 2.
//!
//! ## Layering
//!
//! ```text
//! generator   UrlRequest -> full URL (general parameters, key sets, custom)
//!    │
//! keys        KeySet -> AttributeKey -> positional list builder
//!    │
//! format      AttrValue -> text under an explicit FormatPolicy
//! token       free text -> URL-safe base-64 token
//! ```
//!
//! Everything below [`generator`] is total: formatting and key encoding never
//! fail. Errors only come from the outer surfaces (token decoding, loading
//! requests and configuration, URL preconditions).
//!
//! ## Example
//!
//! ```
//! use xpourl::keys::DESIGN_KEY_SET;
//! use xpourl::model::{Design, XpoObject};
//!
//! let objects = vec![
//!     XpoObject::design(0, Design { gloss: 5, ..Design::default() }),
//!     XpoObject::design(2, Design { gloss: 9, ..Design::default() }),
//! ];
//!
//! let mut query = String::from("p=c2NlbmU.");
//! DESIGN_KEY_SET.append_to(&mut query, &objects);
//! assert_eq!(query, "p=c2NlbmU.&p.tg=5,,9");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod keys;
pub mod model;
pub mod request;
pub mod token;
