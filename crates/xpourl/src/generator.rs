//! # URL Generation
//!
//! Assembles the full render URL for a [`UrlRequest`]:
//!
//! ```text
//! <base_url>[/<image|coords>]?p=<token>[&general][&design keys][&color keys]
//!     [&overlay keys][&template keys][&custom]
//! ```
//!
//! The `Url` request type has no endpoint segment.
//!
//! ## General Parameters
//!
//! Written only when set on the request, in this order:
//!
//! | Parameter | Source |
//! |-----------|--------|
//! | `w`, `h` | output width / height |
//! | `q` | output quality |
//! | `f` | image type code (`1` jpg, `2` png, `3` bmp) |
//! | `o` | output type code (`1` xml, `2` json, `3` javascript), coords only |
//! | `rm` | resize method code |
//! | `bg` | background color, hex digits only |
//! | `tc` | transparency color, hex digits only |
//! | `ac` | all-color fill, hex digits only |
//! | `tr` | texture repeat flag |
//! | `fr` | frame |
//! | `st` | scene thumbnail object number |
//! | `hl` | highlighted object number |
//! | `ft` | file type code (`1` scene ... `5` image) |
//! | `e` | is-entity flag |
//! | `wm` | watermark image name |
//! | `tn` | template name |
//! | `au` | absolute url |
//! | `c`, `dc`, `pc` | caching / design caching / prefill caching flags |
//! | `debug` | debug flag (only when true) |
//!
//! Free text (`wm`, `tn`, `au`) and custom parameters are
//! form-url-encoded. Custom parameters come last, sorted by name. Colors
//! are checked with [`UrlRequest::validate`] before anything is written.

use tracing::debug;
use url::form_urlencoded::byte_serialize;

use crate::config::XpoConfig;
use crate::error::{Result, XpoError};
use crate::format::{format_value, AttrValue, FormatPolicy};
use crate::keys::{
    COLOR_KEY_SET, DESIGN_KEY_SET, FIELD_SEPARATOR, OVERLAY_KEY_SET, TEMPLATE_KEY_SET,
};
use crate::model::hex_color;
use crate::request::{UrlRequest, UrlType};
use crate::token;

/// Turns requests into render URLs for one endpoint.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    base_url: String,
    policy: FormatPolicy,
}

impl UrlGenerator {
    pub fn new(base_url: impl Into<String>, policy: FormatPolicy) -> Self {
        Self {
            base_url: base_url.into(),
            policy,
        }
    }

    pub fn from_config(config: &XpoConfig) -> Self {
        Self::new(config.base_url.clone(), config.format_policy())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for `request`.
    pub fn url(&self, request: &UrlRequest) -> Result<String> {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(XpoError::InvalidBaseUrl(self.base_url.clone()));
        }
        let query = self.query(request)?;
        Ok(match request.url_type.segment() {
            Some(segment) => format!("{}/{}?{}", base, segment, query),
            None => format!("{}?{}", base, query),
        })
    }

    /// Build only the query string (everything after `?`).
    pub fn query(&self, request: &UrlRequest) -> Result<String> {
        if request.primary_key.trim().is_empty() {
            return Err(XpoError::MissingPrimaryKey);
        }
        request.validate()?;

        let mut query = format!("p={}", token::encode(&request.primary_key));
        self.append_general(&mut query, request);
        DESIGN_KEY_SET.append_to_with(&mut query, &request.objects, &self.policy);
        COLOR_KEY_SET.append_to_with(&mut query, &request.objects, &self.policy);
        OVERLAY_KEY_SET.append_to_with(&mut query, &request.overlays, &self.policy);
        TEMPLATE_KEY_SET.append_to_with(&mut query, &request.template_parameters, &self.policy);
        for (name, value) in &request.custom {
            push_param(&mut query, &encode_component(name), &encode_component(value));
        }

        debug!(
            primary_key = %request.primary_key,
            objects = request.objects.len(),
            overlays = request.overlays.len(),
            templates = request.template_parameters.len(),
            len = query.len(),
            "generated query"
        );
        Ok(query)
    }

    fn append_general(&self, query: &mut String, request: &UrlRequest) {
        let policy = &self.policy;
        let mut general = |name: &str, value: Option<AttrValue>| {
            let rendered = match value {
                Some(AttrValue::Text(text)) => encode_component(text),
                Some(value) => format_value(&value, policy),
                None => return,
            };
            push_param(query, name, &rendered);
        };
        let coords = request.url_type == UrlType::Coords;

        general("w", number(request.width));
        general("h", number(request.height));
        general("q", request.output_quality.map(|v| AttrValue::Int(v.into())));
        general("f", request.image_type.map(|t| AttrValue::Code(t.code())));
        general(
            "o",
            request
                .output_type
                .filter(|_| coords)
                .map(|t| AttrValue::Code(t.code())),
        );
        general("rm", request.resize_method.map(|m| AttrValue::Code(m.code())));
        general("bg", color(&request.background_color));
        general("tc", color(&request.transparency_color));
        general("ac", color(&request.all_color));
        general("tr", request.texture_repeat.map(AttrValue::Bool));
        general("fr", number(request.frame));
        general("st", number(request.scene_thumbnail_object));
        general("hl", number(request.highlight_object));
        general("ft", request.file_type.map(|t| AttrValue::Code(t.code())));
        general("e", request.is_entity.map(AttrValue::Bool));
        general("wm", text(&request.watermark_image));
        general("tn", text(&request.template_name));
        general("au", text(&request.absolute_url));
        general("c", request.caching.map(AttrValue::Bool));
        general("dc", request.design_caching.map(AttrValue::Bool));
        general("pc", request.prefill_caching.map(AttrValue::Bool));
        general("debug", request.debug.then_some(AttrValue::Bool(true)));
    }
}

impl Default for UrlGenerator {
    fn default() -> Self {
        Self::from_config(&XpoConfig::default())
    }
}

fn color(value: &Option<String>) -> Option<AttrValue<'_>> {
    value.as_deref().and_then(hex_color).map(AttrValue::Text)
}

fn text(value: &Option<String>) -> Option<AttrValue<'_>> {
    value
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(AttrValue::Text)
}

fn number(value: Option<u32>) -> Option<AttrValue<'static>> {
    value.map(|v| AttrValue::Int(v.into()))
}

fn push_param(query: &mut String, name: &str, value: &str) {
    query.push(FIELD_SEPARATOR);
    query.push_str(name);
    query.push('=');
    query.push_str(value);
}

fn encode_component(text: &str) -> String {
    byte_serialize(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Design, Overlay, TemplateParameter, XpoObject};
    use crate::request::{FileType, ImageType, OutputType};

    fn generator() -> UrlGenerator {
        UrlGenerator::new("https://xpo.example.com/api/", FormatPolicy::default())
    }

    #[test]
    fn minimal_request() {
        let url = generator().url(&UrlRequest::new("scene")).unwrap();
        assert_eq!(url, "https://xpo.example.com/api/image?p=c2NlbmU.");
    }

    #[test]
    fn coords_request_uses_coords_segment() {
        let request = UrlRequest {
            url_type: UrlType::Coords,
            ..UrlRequest::new("scene")
        };
        let url = generator().url(&request).unwrap();
        assert!(url.starts_with("https://xpo.example.com/api/coords?"));
    }

    #[test]
    fn general_parameters_in_order() {
        let request = UrlRequest {
            width: Some(800),
            height: Some(600),
            output_quality: Some(90),
            image_type: Some(ImageType::Png),
            background_color: Some("#FFFFFF".to_string()),
            caching: Some(false),
            debug: true,
            ..UrlRequest::new("scene")
        };
        let query = generator().query(&request).unwrap();
        assert_eq!(
            query,
            "p=c2NlbmU.&w=800&h=600&q=90&f=2&bg=FFFFFF&c=0&debug=1"
        );
    }

    #[test]
    fn collections_follow_general_parameters() {
        let request = UrlRequest {
            width: Some(100),
            objects: vec![
                XpoObject::design(
                    0,
                    Design {
                        gloss: 5,
                        ..Design::default()
                    },
                ),
                XpoObject::color(1, "#00ff00"),
            ],
            overlays: vec![Overlay::new(0, "")],
            ..UrlRequest::new("scene")
        };
        let query = generator().query(&request).unwrap();
        assert_eq!(
            query,
            "p=c2NlbmU.&w=100&p.tg=5&p.c=,00ff00&p.om=0&p.ot=0&p.oo=0"
        );
    }

    #[test]
    fn custom_parameters_are_escaped_and_sorted() {
        let mut request = UrlRequest::new("scene");
        request.custom.insert("z".to_string(), "a b&c".to_string());
        request.custom.insert("a".to_string(), "1".to_string());
        let query = generator().query(&request).unwrap();
        assert_eq!(query, "p=c2NlbmU.&a=1&z=a+b%26c");
    }

    #[test]
    fn missing_primary_key() {
        let err = generator().url(&UrlRequest::default()).unwrap_err();
        assert!(matches!(err, XpoError::MissingPrimaryKey));
    }

    #[test]
    fn empty_base_url() {
        let err = UrlGenerator::new("/", FormatPolicy::default())
            .url(&UrlRequest::new("scene"))
            .unwrap_err();
        assert!(matches!(err, XpoError::InvalidBaseUrl(_)));
    }

    #[test]
    fn policy_from_config() {
        let config = XpoConfig {
            true_token: "true".to_string(),
            ..XpoConfig::default()
        };
        let request = UrlRequest {
            caching: Some(true),
            ..UrlRequest::new("scene")
        };
        let query = UrlGenerator::from_config(&config).query(&request).unwrap();
        assert!(query.ends_with("&c=true"));
    }

    #[test]
    fn same_request_same_url() {
        let mut request = UrlRequest::new("scene");
        request.objects = vec![
            XpoObject::design(3, Design::new("oak")),
            XpoObject::design(1, Design::new("pine")),
        ];
        let g = generator();
        assert_eq!(g.url(&request).unwrap(), g.url(&request).unwrap());
    }

    #[test]
    fn url_type_has_no_segment() {
        let request = UrlRequest {
            url_type: UrlType::Url,
            ..UrlRequest::new("scene")
        };
        let url = generator().url(&request).unwrap();
        assert_eq!(url, "https://xpo.example.com/api?p=c2NlbmU.");
    }

    #[test]
    fn service_options_in_order() {
        let request = UrlRequest {
            url_type: UrlType::Coords,
            output_type: Some(OutputType::Json),
            transparency_color: Some("#00ff00".to_string()),
            all_color: Some("112233".to_string()),
            texture_repeat: Some(true),
            frame: Some(2),
            scene_thumbnail_object: Some(3),
            highlight_object: Some(1),
            file_type: Some(FileType::Design),
            is_entity: Some(true),
            watermark_image: Some("brand mark.png".to_string()),
            template_name: Some("banner".to_string()),
            absolute_url: Some("https://cdn.example.com/a.jpg?x=1&y=2".to_string()),
            prefill_caching: Some(false),
            ..UrlRequest::new("scene")
        };
        let query = generator().query(&request).unwrap();
        assert_eq!(
            query,
            "p=c2NlbmU.&o=2&tc=00ff00&ac=112233&tr=1&fr=2&st=3&hl=1&ft=2&e=1\
             &wm=brand+mark.png&tn=banner\
             &au=https%3A%2F%2Fcdn.example.com%2Fa.jpg%3Fx%3D1%26y%3D2&pc=0"
        );
    }

    #[test]
    fn output_type_only_for_coords() {
        let request = UrlRequest {
            output_type: Some(OutputType::Xml),
            ..UrlRequest::new("scene")
        };
        let query = generator().query(&request).unwrap();
        assert_eq!(query, "p=c2NlbmU.");
    }

    #[test]
    fn template_parameters_follow_overlays() {
        let request = UrlRequest {
            overlays: vec![Overlay::new(0, "")],
            template_parameters: vec![
                TemplateParameter::new(1, "Sale"),
                TemplateParameter::new(0, "Big"),
            ],
            ..UrlRequest::new("scene")
        };
        let query = generator().query(&request).unwrap();
        assert_eq!(
            query,
            format!(
                "p=c2NlbmU.&p.om=0&p.ot=0&p.oo=0&p.tp={},{}",
                token::encode("Big"),
                token::encode("Sale")
            )
        );
    }

    #[test]
    fn malformed_background_color_cannot_inject_parameters() {
        let request = UrlRequest {
            background_color: Some("fff&debug=1".to_string()),
            ..UrlRequest::new("scene")
        };
        let err = generator().query(&request).unwrap_err();
        assert!(matches!(err, XpoError::InvalidColor { .. }));
    }

    #[test]
    fn malformed_object_color_is_rejected() {
        let request = UrlRequest {
            objects: vec![XpoObject::color(0, "ff,00"), XpoObject::color(1, "00ff00")],
            ..UrlRequest::new("scene")
        };
        let err = generator().url(&request).unwrap_err();
        assert!(matches!(err, XpoError::InvalidColor { ref value, .. } if value == "ff,00"));
    }
}
