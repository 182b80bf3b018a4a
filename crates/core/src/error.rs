use thiserror::Error;

/// Result type for name generation operations
pub type Result<T> = std::result::Result<T, NameError>;

/// Errors surfaced to callers of the name engine.
///
/// Out-of-range counts, unknown keywords and unknown characters are absorbed by the engine and
/// never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Style outside the recognized set
    #[error("Invalid style '{value}': expected one of {expected}")]
    InvalidStyle { value: String, expected: String },

    /// Gender outside the recognized set
    #[error("Invalid gender '{value}': expected one of {expected}")]
    InvalidGender { value: String, expected: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NameError {
    /// Create an invalid style error listing the accepted styles
    pub fn invalid_style(value: impl Into<String>) -> Self {
        Self::InvalidStyle {
            value: value.into(),
            expected: crate::Style::ALL
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create an invalid gender error listing the accepted genders
    pub fn invalid_gender(value: impl Into<String>) -> Self {
        Self::InvalidGender {
            value: value.into(),
            expected: crate::Gender::ALL
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Stable machine-readable code for tool envelopes.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidStyle { .. } | Self::InvalidGender { .. } => "invalid_request",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}
