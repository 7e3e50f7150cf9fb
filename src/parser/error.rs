//! Error types for Turtle parsing

/// Error type for parse operations.
///
/// Every variant aborts the whole parse; no triples are returned alongside it.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document is malformed.
    #[error("syntax error at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// The parser failed to make progress. Indicates a parser defect.
    #[error("internal error at byte {position}: {message}")]
    Internal { position: usize, message: String },

    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    pub fn internal(position: usize, message: impl Into<String>) -> Self {
        Self::Internal {
            position,
            message: message.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Byte offset the error refers to, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax { position, .. } | Self::Internal { position, .. } => Some(*position),
            Self::Encoding(e) => Some(e.valid_up_to()),
        }
    }
}
