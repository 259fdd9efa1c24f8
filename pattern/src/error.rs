use std::result;
use thiserror::Error;

use crate::size::Size;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Size {value} is out of range ({min}-{max})", min = Size::MIN, max = Size::MAX)]
    OutOfRangeSize { value: i64 },

    #[error("Expected a number but got '{0}'")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<PatternError>),
}

impl PatternError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        PatternError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            PatternError::OutOfRangeSize { .. } => {
                format!("Size must be between {}-{}!", Size::MIN, Size::MAX)
            }
            PatternError::MalformedInput(token) => format!("'{}' is not a number", token),
            PatternError::Io(e) => format!("I/O operation failed: {}", e),
            PatternError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        match self {
            PatternError::OutOfRangeSize { .. } => true,
            PatternError::WithContext(_, err) => err.is_out_of_range(),
            _ => false,
        }
    }
}

pub type Result<T> = result::Result<T, PatternError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<PatternError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let pattern_err: PatternError = err.into();
            pattern_err.with_context(context())
        })
    }
}
