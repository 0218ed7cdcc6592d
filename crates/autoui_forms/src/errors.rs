use std::io;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Unsupported property type '{type_name}' on property '{property}'")]
    UnsupportedType { property: String, type_name: String },
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Type mismatch on '{property}': expected {expected}, found {found}")]
    TypeMismatch {
        property: String,
        expected: String,
        found: String,
    },
    #[error("Control '{0}' cannot accept this value")]
    Conversion(String),
    #[error("Unknown window: {0}")]
    UnknownWindow(Uuid),
    #[error("Window {0} is blocked by a modal form")]
    Blocked(Uuid),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl FormError {
    pub fn type_mismatch(property: &str, expected: &str, found: &crate::PropertyValue) -> Self {
        FormError::TypeMismatch {
            property: property.to_string(),
            expected: expected.to_string(),
            found: found.kind_name().to_string(),
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;
