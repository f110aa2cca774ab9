//! Error types for part token parsing and sorting operations

use std::fmt;

/// Which caller-supplied input a token was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartInput {
    /// The multiset of parts being ordered
    Parts,
    /// The layout template guiding the order
    Layout,
}

impl fmt::Display for PartInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parts => f.write_str("parts"),
            Self::Layout => f.write_str("layout"),
        }
    }
}

/// Main error type for all part operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartError {
    /// Token does not name one of the eight recognized part kinds
    ///
    /// Raised before any output is produced; sorting never yields a
    /// partial sequence.
    InvalidPartKind {
        /// The offending token as supplied
        token: String,
        /// Zero-based position of the token within its input, if known
        position: Option<usize>,
        /// Input the token came from, if known
        input: Option<PartInput>,
    },
}

impl fmt::Display for PartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPartKind {
                token,
                position,
                input,
            } => {
                write!(f, "Invalid part kind '{token}'")?;
                match (input, position) {
                    (Some(input), Some(position)) => {
                        write!(f, " in {input} at position {position}")
                    }
                    (Some(input), None) => write!(f, " in {input}"),
                    (None, Some(position)) => write!(f, " at position {position}"),
                    (None, None) => Ok(()),
                }
            }
        }
    }
}

impl std::error::Error for PartError {}

/// Convenience type alias for part results
pub type Result<T> = std::result::Result<T, PartError>;

/// Attaches the input and position of a token to a parse failure
pub trait WithInput<T> {
    /// Tag the error with where the token was found
    ///
    /// # Errors
    ///
    /// Propagates the original error with the location applied
    fn with_input(self, input: PartInput, position: usize) -> Result<T>;
}

impl<T> WithInput<T> for Result<T> {
    fn with_input(self, input: PartInput, position: usize) -> Result<T> {
        self.map_err(|error| match error {
            PartError::InvalidPartKind { token, .. } => PartError::InvalidPartKind {
                token,
                position: Some(position),
                input: Some(input),
            },
        })
    }
}

/// Create an invalid part kind error for a bare token
pub fn invalid_part_kind(token: &impl ToString) -> PartError {
    PartError::InvalidPartKind {
        token: token.to_string(),
        position: None,
        input: None,
    }
}
