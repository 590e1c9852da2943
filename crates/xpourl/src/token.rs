//! URL-safe text tokens.
//!
//! Free-form text (design entity names, overlay names, the primary key) is
//! carried as base-64 of its UTF-8 bytes. The standard alphabet's `+` and `/`
//! and the `=` padding all have meaning inside a query string, so the token
//! uses `-`, `_` and `.` in their place:
//!
//! ```text
//! "Ünïcödé?"  ->  w5xuw69jw7Zkw6k_
//! "ab"        ->  YWI.
//! ```

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use thiserror::Error;

const PAD: char = '=';
const URL_PAD: char = '.';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    InvalidBase64(String),

    #[error("Token does not decode to UTF-8 text")]
    InvalidUtf8,
}

/// Encode text into a token that can be embedded in a query string as-is.
pub fn encode(text: &str) -> String {
    URL_SAFE
        .encode(text.as_bytes())
        .replace(PAD, &URL_PAD.to_string())
}

/// Decode a token produced by [`encode`].
pub fn decode(token: &str) -> Result<String, TokenError> {
    let padded = token.replace(URL_PAD, &PAD.to_string());
    let bytes = URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| TokenError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| TokenError::InvalidUtf8)
}
