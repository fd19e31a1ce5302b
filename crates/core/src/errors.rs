use thiserror::Error;

use crate::{catalog::CatalogError, config::ConfigError};

/// Client input rejected before it reaches the resolver or routine builder.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("skinType is required")]
    MissingSkinType,
    #[error("categories[] must contain at least one category")]
    MissingCategories,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Every failure an entry point (server bootstrap, CLI command) can surface.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("catalog load failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl ApplicationError {
    /// Stable machine-readable class for structured output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Validation(_) => "input_validation",
            Self::Catalog(_) => "catalog_load",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Client-facing rejection, tagged with the correlation id it was logged under.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("bad request: {message}")]
pub struct InterfaceError {
    pub message: String,
    pub correlation_id: String,
}

impl ValidationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        InterfaceError { message: self.to_string(), correlation_id: correlation_id.into() }
    }
}
