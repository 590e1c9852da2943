//! Command handlers.
//!
//! Each handler takes its parsed arguments and returns the text to print;
//! `mod.rs` does the printing. Library errors are wrapped with `anyhow`
//! context so the message names the file or token involved.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use xpourl::config::XpoConfig;
use xpourl::generator::UrlGenerator;
use xpourl::keys::{COLOR_KEY_SET, DESIGN_KEY_SET, OVERLAY_KEY_SET, TEMPLATE_KEY_SET};
use xpourl::request::UrlRequest;
use xpourl::token;

/// State shared by all handlers.
pub struct AppState {
    pub config: XpoConfig,
}

impl AppState {
    pub fn new(config: XpoConfig) -> Self {
        Self { config }
    }

    fn generator(&self, base_url: Option<&str>) -> UrlGenerator {
        match base_url {
            Some(base_url) => UrlGenerator::new(base_url, self.config.format_policy()),
            None => UrlGenerator::from_config(&self.config),
        }
    }
}

fn load_request(path: &Path) -> Result<UrlRequest> {
    UrlRequest::load(path).with_context(|| format!("reading request {}", path.display()))
}

pub fn url(state: &AppState, request: &Path, base_url: Option<&str>) -> Result<String> {
    let request = load_request(request)?;
    let generator = state.generator(base_url);
    debug!(base_url = generator.base_url(), "building url");
    Ok(generator.url(&request)?)
}

pub fn keys(state: &AppState, request: &Path) -> Result<String> {
    let request = load_request(request)?;
    let policy = state.config.format_policy();

    let mut lines = DESIGN_KEY_SET.fragments(&request.objects, &policy);
    lines.extend(COLOR_KEY_SET.fragments(&request.objects, &policy));
    lines.extend(OVERLAY_KEY_SET.fragments(&request.overlays, &policy));
    lines.extend(TEMPLATE_KEY_SET.fragments(&request.template_parameters, &policy));
    Ok(lines.join("\n"))
}

pub fn encode(text: &str) -> String {
    token::encode(text)
}

pub fn decode(value: &str) -> Result<String> {
    token::decode(value).with_context(|| format!("decoding {:?}", value))
}

pub fn config(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&state.config)?)
}
