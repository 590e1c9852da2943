use thiserror::Error;

use crate::token::TokenError;

#[derive(Error, Debug)]
pub enum XpoError {
    #[error("Request has no primary key")]
    MissingPrimaryKey,

    #[error("Invalid base url: {0:?}")]
    InvalidBaseUrl(String),

    #[error("Invalid {field}: {value:?} is not an RRGGBB hex color")]
    InvalidColor { field: String, value: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, XpoError>;
