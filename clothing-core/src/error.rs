use thiserror::Error;

/// Caller-facing failure of a clothing suggestion request.
#[derive(Debug, Error)]
pub enum ClothingError {
    /// Required fields are missing or have the wrong type.
    #[error("Invalid clothing request: {0}")]
    Validation(String),

    /// Recommendation construction failed; the inner message is kept.
    #[error("Failed to generate clothing suggestions: {source}")]
    Generation {
        #[source]
        source: GenerateError,
    },
}

impl ClothingError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClothingError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClothingError::Validation(_))
    }
}

impl From<GenerateError> for ClothingError {
    fn from(source: GenerateError) -> Self {
        ClothingError::Generation { source }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("no temperature band covers {0}°C")]
    NoTemperatureBand(f64),
}

/// Encoded precipitation text that could not be read as an amount.
#[derive(Debug, Error)]
pub enum PrecipitationError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found null")]
    Null,
}
