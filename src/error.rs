use std::fmt;

/// Error type for building truth tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The formula contains no variables.
    NoVariables,
    /// The formula has more variables than the configured limit.
    TooManyVariables { count: usize, limit: usize },
    /// A fragment has neither a connective nor a variable (strict mode only).
    Malformed { fragment: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoVariables => write!(f, "formula contains no variables (A-Z)"),
            Error::TooManyVariables { count, limit } => {
                write!(f, "formula has {} variables, at most {} are supported", count, limit)
            }
            Error::Malformed { fragment } => write!(f, "malformed fragment: {:?}", fragment),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
