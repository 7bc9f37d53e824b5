/// Errors that can occur while loading a listing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading at line {line} for {message}")]
    Syntax { line: u64, message: String },

    #[error("Error reading at line {line} for element/attribute `{tag}' for invalid state")]
    InvalidState { tag: String, line: u64 },

    #[error("Error reading at line {line} for element/attribute `{tag}' for low memory")]
    LowMemory { tag: String, line: u64 },
}

impl LoadError {
    pub fn syntax(line: u64, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_state(tag: impl Into<String>, line: u64) -> Self {
        Self::InvalidState {
            tag: tag.into(),
            line,
        }
    }

    pub fn low_memory(tag: impl Into<String>, line: u64) -> Self {
        Self::LowMemory {
            tag: tag.into(),
            line,
        }
    }

    /// Line the error was detected on, if it has one.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Io(_) => None,
            Self::Syntax { line, .. }
            | Self::InvalidState { line, .. }
            | Self::LowMemory { line, .. } => Some(*line),
        }
    }
}

/// A field handler fired without the record it writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid state")]
pub struct InvalidState;
