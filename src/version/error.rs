use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<quick_xml::Error> for RegistryError {
    fn from(e: quick_xml::Error) -> Self {
        RegistryError::InvalidResponse(e.to_string())
    }
}

impl From<quick_xml::DeError> for RegistryError {
    fn from(e: quick_xml::DeError) -> Self {
        RegistryError::InvalidResponse(e.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("empty constraint")]
    Empty,

    #[error("malformed constraint: {0}")]
    Malformed(String),

    #[error("invalid version in constraint: {0}")]
    InvalidVersion(String),
}
