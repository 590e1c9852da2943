//! Overlay attribute keys.
//!
//! Mode, time and operation are always written: their first variant (code
//! `0`) is a real choice the service must see, not an absent value. The
//! location is written only when set, the name only when non-empty.

use crate::format::AttrValue;
use crate::keys::attribute::AttributeKey;
use crate::model::Overlay;

fn location(overlay: &Overlay) -> Option<AttrValue<'_>> {
    overlay.location.map(|l| AttrValue::Pair(l.x, l.y))
}

fn mode(overlay: &Overlay) -> Option<AttrValue<'_>> {
    Some(AttrValue::Code(overlay.mode.code()))
}

fn time(overlay: &Overlay) -> Option<AttrValue<'_>> {
    Some(AttrValue::Code(overlay.time.code()))
}

fn operation(overlay: &Overlay) -> Option<AttrValue<'_>> {
    Some(AttrValue::Code(overlay.operation.code()))
}

fn name(overlay: &Overlay) -> Option<AttrValue<'_>> {
    Some(AttrValue::Text(&overlay.name))
}

/// Overlay attribute keys, in URL order.
pub const OVERLAY_KEYS: &[AttributeKey<Overlay>] = &[
    AttributeKey::new("overlay location", "p.ol", location),
    AttributeKey::new("overlay mode", "p.om", mode),
    AttributeKey::new("overlay time", "p.ot", time),
    AttributeKey::new("overlay operation", "p.oo", operation),
    AttributeKey::new("overlay name", "p.on", name)
        .omit_default(AttrValue::Text(""))
        .text_encoded(),
];
