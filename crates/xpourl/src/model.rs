//! # Domain Model: Objects and Overlays
//!
//! A render request carries two index-addressed collections:
//!
//! - [`XpoObject`]: what is placed on each numbered object slot of the
//!   scene, either a [`Design`] (a texture with placement attributes) or a
//!   plain [`Color`].
//! - [`Overlay`]: images composited on top of the rendered scene.
//!
//! Template parameters ([`TemplateParameter`]) follow the same indexing
//! rules for scenes rendered from a server-side template.
//!
//! ## Sparse, Overridable Indexes
//!
//! The `index` of an item is the slot it targets, not its position in the
//! collection. Collections may skip slots (`0, 2, 5`) and may repeat one;
//! when a slot repeats, the item that comes **last** in the collection
//! replaces the earlier ones. Nothing is merged.
//!
//! ## Defaults
//!
//! Every design attribute has an explicit default (empty name, `0`,
//! `false`). A default value means "leave it to the service" and is not
//! written to the URL; see [`crate::keys::design`].

use serde::{Deserialize, Serialize};

/// An item addressed by a slot index.
pub trait IndexedItem {
    /// Separator between positions of one attribute list.
    const DELIMITER: char = ',';

    fn index(&self) -> u32;
}

/// A texture placed on an object slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Design {
    pub entity_name: String,
    pub width: f64,
    pub height: f64,
    pub gloss: i32,
    pub contrast: i32,
    pub drop_x: f64,
    pub drop_y: f64,
    pub placing_point_x: f64,
    pub placing_point_y: f64,
    pub rotation: f64,
    pub flip: bool,
    pub repeat: bool,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            entity_name: String::new(),
            width: 0.0,
            height: 0.0,
            gloss: 0,
            contrast: 0,
            drop_x: 0.0,
            drop_y: 0.0,
            placing_point_x: 0.0,
            placing_point_y: 0.0,
            rotation: 0.0,
            flip: false,
            repeat: false,
        }
    }
}

impl Design {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            ..Self::default()
        }
    }
}

/// The hex digits of an `RRGGBB` color, with or without a leading `#`.
///
/// Returns `None` for anything else, so a color can never carry a list
/// delimiter or query separator into the URL.
pub fn hex_color(text: &str) -> Option<&str> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    (hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())).then_some(hex)
}

/// A flat color fill, `RRGGBB` with or without a leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub color: String,
}

impl Color {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// The color as sent to the service: hex digits only, `None` when the
    /// color is malformed.
    pub fn hex(&self) -> Option<&str> {
        hex_color(&self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Design(Design),
    Color(Color),
}

/// One entry of the object collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpoObject {
    pub index: u32,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

impl XpoObject {
    pub fn design(index: u32, design: Design) -> Self {
        Self {
            index,
            kind: ObjectKind::Design(design),
        }
    }

    pub fn color(index: u32, color: impl Into<String>) -> Self {
        Self {
            index,
            kind: ObjectKind::Color(Color::new(color)),
        }
    }

    pub fn as_design(&self) -> Option<&Design> {
        match &self.kind {
            ObjectKind::Design(design) => Some(design),
            ObjectKind::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match &self.kind {
            ObjectKind::Color(color) => Some(color),
            ObjectKind::Design(_) => None,
        }
    }
}

impl IndexedItem for XpoObject {
    fn index(&self) -> u32 {
        self.index
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayMode {
    #[default]
    MatchSizeOfOutput,
    KeepOriginalSize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayTime {
    #[default]
    BeforeResize,
    AfterResize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayOperation {
    #[default]
    Normal,
    ColoredMapping,
}

impl OverlayMode {
    pub fn code(self) -> u32 {
        match self {
            OverlayMode::MatchSizeOfOutput => 0,
            OverlayMode::KeepOriginalSize => 1,
        }
    }
}

impl OverlayTime {
    pub fn code(self) -> u32 {
        match self {
            OverlayTime::BeforeResize => 0,
            OverlayTime::AfterResize => 1,
        }
    }
}

impl OverlayOperation {
    pub fn code(self) -> u32 {
        match self {
            OverlayOperation::Normal => 0,
            OverlayOperation::ColoredMapping => 1,
        }
    }
}

/// Where an overlay is anchored on the output image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayLocation {
    pub x: f64,
    pub y: f64,
}

/// An image composited over the rendered scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overlay {
    pub index: u32,
    pub name: String,
    pub mode: OverlayMode,
    pub time: OverlayTime,
    pub operation: OverlayOperation,
    pub location: Option<OverlayLocation>,
}

impl Overlay {
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            ..Self::default()
        }
    }
}

impl IndexedItem for Overlay {
    fn index(&self) -> u32 {
        self.index
    }
}

/// A value for one numbered placeholder of a server-side template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateParameter {
    pub index: u32,
    pub value: String,
}

impl TemplateParameter {
    pub fn new(index: u32, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

impl IndexedItem for TemplateParameter {
    fn index(&self) -> u32 {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_strips_hash() {
        assert_eq!(Color::new("#ff8800").hex(), Some("ff8800"));
        assert_eq!(Color::new("FF8800").hex(), Some("FF8800"));
    }

    #[test]
    fn malformed_colors_have_no_hex() {
        for bad in ["", "#", "ff,000", "fff", "ff00000", "fff&debug=1", "gg0000", "##ff0000"] {
            assert_eq!(hex_color(bad), None, "color {bad:?}");
        }
        assert_eq!(hex_color("#A1b2C3"), Some("A1b2C3"));
    }

    #[test]
    fn object_accessors_match_kind() {
        let design = XpoObject::design(1, Design::new("oak"));
        assert_eq!(design.as_design().unwrap().entity_name, "oak");
        assert!(design.as_color().is_none());

        let color = XpoObject::color(2, "#000000");
        assert!(color.as_design().is_none());
        assert_eq!(color.as_color().unwrap().hex(), Some("000000"));
    }

    #[test]
    fn enum_codes() {
        assert_eq!(OverlayMode::KeepOriginalSize.code(), 1);
        assert_eq!(OverlayTime::AfterResize.code(), 1);
        assert_eq!(OverlayOperation::ColoredMapping.code(), 1);
        assert_eq!(OverlayOperation::default().code(), 0);
    }

    #[test]
    fn object_json_uses_type_tag() {
        let json = r##"[
            {"index": 0, "type": "design", "entity_name": "oak", "gloss": 4},
            {"index": 3, "type": "color", "color": "#ff0000"}
        ]"##;
        let objects: Vec<XpoObject> = serde_json::from_str(json).unwrap();

        assert_eq!(objects[0].index, 0);
        let design = objects[0].as_design().unwrap();
        assert_eq!(design.entity_name, "oak");
        assert_eq!(design.gloss, 4);
        assert_eq!(design.width, 0.0);

        assert_eq!(objects[1].index(), 3);
        assert_eq!(objects[1].as_color().unwrap().color, "#ff0000");
    }

    #[test]
    fn overlay_json_defaults() {
        let overlay: Overlay =
            serde_json::from_str(r#"{"index": 2, "name": "frame.png", "time": "AfterResize"}"#)
                .unwrap();
        assert_eq!(overlay.index, 2);
        assert_eq!(overlay.mode, OverlayMode::MatchSizeOfOutput);
        assert_eq!(overlay.time, OverlayTime::AfterResize);
        assert!(overlay.location.is_none());
    }
}
