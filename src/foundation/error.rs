/// Convenience result type used across Gripline.
pub type GriplineResult<T> = Result<T, GriplineError>;

/// Top-level error taxonomy used by session and adapter APIs.
#[derive(thiserror::Error, Debug)]
pub enum GriplineError {
    /// Invalid numeric parameters or malformed serialized data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unusable configuration, including unknown scene objects.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A host adapter rejected a scene or render call.
    #[error("host error: {0}")]
    Host(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GriplineError {
    /// Build a [`GriplineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GriplineError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`GriplineError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`GriplineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GriplineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
