use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required text field was empty or whitespace only.
    EmptyField {
        field: &'static str,
        index: Option<usize>,
    },
    /// A catalog must contain at least one testimonial.
    EmptyCatalog,
    /// Theme names other than `light` / `dark`.
    UnknownTheme(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyField {
                field,
                index: Some(index),
            } => write!(f, "testimonial #{index} has an empty {field}"),
            ModelError::EmptyField { field, index: None } => {
                write!(f, "testimonial has an empty {field}")
            }
            ModelError::EmptyCatalog => {
                write!(f, "catalog must contain at least one testimonial")
            }
            ModelError::UnknownTheme(name) => {
                write!(f, "unknown theme {name:?} (expected light or dark)")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
