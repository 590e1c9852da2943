//! Template parameter key.
//!
//! Parameter values are free text, so they are written as tokens under
//! `p.tp`, one position per placeholder number. Empty values are left to
//! the template's own default.

use crate::format::AttrValue;
use crate::keys::attribute::AttributeKey;
use crate::model::TemplateParameter;

fn value(parameter: &TemplateParameter) -> Option<AttrValue<'_>> {
    Some(AttrValue::Text(&parameter.value))
}

pub const TEMPLATE_KEYS: &[AttributeKey<TemplateParameter>] = &[AttributeKey::new(
    "template parameter",
    "p.tp",
    value,
)
.omit_default(AttrValue::Text(""))
.text_encoded()];
