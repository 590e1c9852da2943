//! Render requests.
//!
//! A [`UrlRequest`] is everything one generated URL describes: the scene,
//! output options and the object, overlay and template parameter
//! collections. Requests are plain serde data so they can be written by
//! hand as JSON:
//!
//! ```json
//! {
//!   "primary_key": "living-room",
//!   "width": 800,
//!   "image_type": "Png",
//!   "objects": [
//!     { "index": 0, "type": "design", "entity_name": "oak", "gloss": 4 },
//!     { "index": 2, "type": "color", "color": "#ffcc00" }
//!   ],
//!   "overlays": [ { "index": 0, "name": "logo.png", "time": "AfterResize" } ]
//! }
//! ```
//!
//! Colors (object fills, background, transparency and all-color) must be
//! `RRGGBB` hex, with or without `#`. [`UrlRequest::validate`] checks them;
//! loading a request runs it.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XpoError};
use crate::model::{hex_color, ObjectKind, Overlay, TemplateParameter, XpoObject};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrlType {
    /// The bare render address, no endpoint segment
    Url,
    #[default]
    Image,
    Coords,
}

impl UrlType {
    /// Path segment of the render endpoint, `None` for [`UrlType::Url`].
    pub fn segment(self) -> Option<&'static str> {
        match self {
            UrlType::Url => None,
            UrlType::Image => Some("image"),
            UrlType::Coords => Some("coords"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    Jpg,
    Png,
    Bmp,
}

impl ImageType {
    pub fn code(self) -> u32 {
        match self {
            ImageType::Jpg => 1,
            ImageType::Png => 2,
            ImageType::Bmp => 3,
        }
    }
}

/// Response format of a coordinates request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputType {
    Xml,
    Json,
    Javascript,
}

impl OutputType {
    pub fn code(self) -> u32 {
        match self {
            OutputType::Xml => 1,
            OutputType::Json => 2,
            OutputType::Javascript => 3,
        }
    }
}

/// Kind of entity the primary key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    Scene,
    Design,
    Color,
    SceneThumb,
    Image,
}

impl FileType {
    pub fn code(self) -> u32 {
        match self {
            FileType::Scene => 1,
            FileType::Design => 2,
            FileType::Color => 3,
            FileType::SceneThumb => 4,
            FileType::Image => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeMethod {
    KeepAspect,
    Stretch,
    Crop,
    Repeat,
    KeepAspectMax,
    Canvas,
}

impl ResizeMethod {
    pub fn code(self) -> u32 {
        match self {
            ResizeMethod::KeepAspect => 1,
            ResizeMethod::Stretch => 2,
            ResizeMethod::Crop => 3,
            ResizeMethod::Repeat => 4,
            ResizeMethod::KeepAspectMax => 5,
            ResizeMethod::Canvas => 6,
        }
    }
}

/// One render request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlRequest {
    pub url_type: UrlType,
    /// Scene (or design) to render
    pub primary_key: String,
    pub file_type: Option<FileType>,
    pub is_entity: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output_quality: Option<u8>,
    pub image_type: Option<ImageType>,
    /// Only written for [`UrlType::Coords`]
    pub output_type: Option<OutputType>,
    pub resize_method: Option<ResizeMethod>,
    pub background_color: Option<String>,
    pub transparency_color: Option<String>,
    /// Fill every object slot with one color
    pub all_color: Option<String>,
    pub texture_repeat: Option<bool>,
    pub frame: Option<u32>,
    pub scene_thumbnail_object: Option<u32>,
    pub highlight_object: Option<u32>,
    pub watermark_image: Option<String>,
    pub template_name: Option<String>,
    pub absolute_url: Option<String>,
    pub caching: Option<bool>,
    pub design_caching: Option<bool>,
    pub prefill_caching: Option<bool>,
    pub debug: bool,
    pub objects: Vec<XpoObject>,
    pub overlays: Vec<Overlay>,
    pub template_parameters: Vec<TemplateParameter>,
    /// Extra parameters passed through verbatim, in key order
    pub custom: BTreeMap<String, String>,
}

impl UrlRequest {
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON request.
    pub fn from_json(text: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(text)?;
        request.validate()?;
        Ok(request)
    }

    /// Read a JSON request from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        } else {
            std::fs::read_to_string(path)?
        };
        Self::from_json(&text)
    }

    /// Check every color of the request.
    pub fn validate(&self) -> Result<()> {
        let general = [
            ("background color", &self.background_color),
            ("transparency color", &self.transparency_color),
            ("all color", &self.all_color),
        ];
        for (field, value) in general {
            if let Some(value) = value {
                check_color(field.to_string(), value)?;
            }
        }

        for object in &self.objects {
            if let ObjectKind::Color(color) = &object.kind {
                check_color(format!("color of object {}", object.index), &color.color)?;
            }
        }
        Ok(())
    }
}

fn check_color(field: String, value: &str) -> Result<()> {
    match hex_color(value) {
        Some(_) => Ok(()),
        None => Err(XpoError::InvalidColor {
            field,
            value: value.to_string(),
        }),
    }
}
