//! Object attribute keys: one per design attribute, plus the color key.
//!
//! | Attribute | Tag | Omitted when |
//! |-----------|-----|--------------|
//! | entity name | `p.d` | empty (token encoded) |
//! | width | `p.tw` | `0` |
//! | height | `p.th` | `0` |
//! | gloss | `p.tg` | `0` |
//! | contrast | `p.tc` | `0` |
//! | drop x / y | `p.dx` / `p.dy` | `0` |
//! | placing point x / y | `p.ppx` / `p.ppy` | `0` |
//! | rotation | `p.tr` | `0` |
//! | flip | `p.tf` | `false` |
//! | repeat | `p.rp` | `false` |
//! | color | `p.c` | not an `RRGGBB` hex color |
//!
//! Design keys read nothing from color objects and the color key reads
//! nothing from design objects, so both kinds can share one collection
//! without breaking alignment.

use crate::format::AttrValue;
use crate::keys::attribute::AttributeKey;
use crate::model::{Color, XpoObject};

const ZERO: AttrValue<'static> = AttrValue::Float(0.0);

fn entity_name(object: &XpoObject) -> Option<AttrValue<'_>> {
    object
        .as_design()
        .map(|d| AttrValue::Text(d.entity_name.as_str()))
}

fn width(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.width))
}

fn height(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.height))
}

fn gloss(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Int(d.gloss.into()))
}

fn contrast(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Int(d.contrast.into()))
}

fn drop_x(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.drop_x))
}

fn drop_y(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.drop_y))
}

fn placing_point_x(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.placing_point_x))
}

fn placing_point_y(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.placing_point_y))
}

fn rotation(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Float(d.rotation))
}

fn flip(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Bool(d.flip))
}

fn repeat(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_design().map(|d| AttrValue::Bool(d.repeat))
}

fn color(object: &XpoObject) -> Option<AttrValue<'_>> {
    object.as_color().and_then(Color::hex).map(AttrValue::Text)
}

/// Design attribute keys, in URL order.
pub const DESIGN_KEYS: &[AttributeKey<XpoObject>] = &[
    AttributeKey::new("entity name", "p.d", entity_name)
        .omit_default(AttrValue::Text(""))
        .text_encoded(),
    AttributeKey::new("width", "p.tw", width).omit_default(ZERO),
    AttributeKey::new("height", "p.th", height).omit_default(ZERO),
    AttributeKey::new("gloss", "p.tg", gloss).omit_default(AttrValue::Int(0)),
    AttributeKey::new("contrast", "p.tc", contrast).omit_default(AttrValue::Int(0)),
    AttributeKey::new("drop x", "p.dx", drop_x).omit_default(ZERO),
    AttributeKey::new("drop y", "p.dy", drop_y).omit_default(ZERO),
    AttributeKey::new("placing point x", "p.ppx", placing_point_x).omit_default(ZERO),
    AttributeKey::new("placing point y", "p.ppy", placing_point_y).omit_default(ZERO),
    AttributeKey::new("rotation", "p.tr", rotation).omit_default(ZERO),
    AttributeKey::new("flip", "p.tf", flip).omit_default(AttrValue::Bool(false)),
    AttributeKey::new("repeat", "p.rp", repeat).omit_default(AttrValue::Bool(false)),
];

/// Color fill key. Malformed colors read as absent.
pub const COLOR_KEYS: &[AttributeKey<XpoObject>] = &[AttributeKey::new("color", "p.c", color)];
