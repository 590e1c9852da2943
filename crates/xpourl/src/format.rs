//! Value formatting.
//!
//! Every attribute value that ends up in a URL goes through [`format_value`].
//! The output never depends on the host environment: the decimal separator,
//! and the tokens used for booleans, come from an explicit [`FormatPolicy`]
//! handed to each call.
//!
//! | Value | Rendering | Example |
//! |-------|-----------|---------|
//! | `Int` | plain decimal digits | `-12` |
//! | `Code` | plain decimal digits | `3` |
//! | `Float` | shortest round-trip form | `3.5`, `2` |
//! | `Bool` | policy tokens | `1` / `0` |
//! | `Text` | unchanged | `FF0000` |
//! | `Pair` | `x:y`, both as floats | `10.5:20` |

/// A single attribute value borrowed from a model object.
///
/// Values are `Copy` so keys can compare them against their declared
/// defaults without allocating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Numeric code of an enumerated value (overlay mode, image type, ...)
    Code(u32),
    Text(&'a str),
    /// A coordinate pair such as an overlay location
    Pair(f64, f64),
}

/// Formatting rules applied to every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPolicy {
    pub decimal_separator: char,
    pub true_token: String,
    pub false_token: String,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            true_token: "1".to_string(),
            false_token: "0".to_string(),
        }
    }
}

impl FormatPolicy {
    pub fn with_bool_tokens(true_token: impl Into<String>, false_token: impl Into<String>) -> Self {
        Self {
            true_token: true_token.into(),
            false_token: false_token.into(),
            ..Self::default()
        }
    }

    fn float(&self, value: f64) -> String {
        // `Display` for f64 is locale independent and already the shortest
        // representation that round-trips.
        let text = value.to_string();
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

/// Render one value into its URL text.
pub fn format_value(value: &AttrValue<'_>, policy: &FormatPolicy) -> String {
    match *value {
        AttrValue::Int(v) => v.to_string(),
        AttrValue::Code(v) => v.to_string(),
        AttrValue::Float(v) => policy.float(v),
        AttrValue::Bool(true) => policy.true_token.clone(),
        AttrValue::Bool(false) => policy.false_token.clone(),
        AttrValue::Text(s) => s.to_string(),
        AttrValue::Pair(x, y) => format!("{}:{}", policy.float(x), policy.float(y)),
    }
}
