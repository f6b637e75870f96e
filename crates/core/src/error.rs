//! Error taxonomy for the sample service.
//!
//! Three kinds are user facing and carry a numeric service code:
//!
//! | Kind | Code | Meaning |
//! |------|------|---------|
//! | `Unauthorized` | 20000 | permission check failed |
//! | `MissingParameter` | 30000 | a required field was absent |
//! | `IllegalParameter` | 30001 | a field was present but invalid |
//!
//! `InvalidArgument` is the programmer-error kind: the calling code broke a
//! function contract. It has no service code and is not meant to reach a
//! client.
//!
//! Message text is part of the contract. [`Error::message`] returns the bare
//! message; `Display` adds the kind prefix the service reports to clients.

use crate::path::FieldPath;
use thiserror::Error;

/// Result alias for sample service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of an [`Error`], with its service code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Permission check failed
    Unauthorized,
    /// Required parameter absent
    MissingParameter,
    /// Parameter present but invalid
    IllegalParameter,
    /// Caller broke a function contract
    InvalidArgument,
}

impl ErrorType {
    /// Service error code, if the kind is user facing
    pub fn code(&self) -> Option<u32> {
        match self {
            ErrorType::Unauthorized => Some(20000),
            ErrorType::MissingParameter => Some(30000),
            ErrorType::IllegalParameter => Some(30001),
            ErrorType::InvalidArgument => None,
        }
    }

    /// Human readable kind name
    pub fn name(&self) -> &'static str {
        match self {
            ErrorType::Unauthorized => "Unauthorized",
            ErrorType::MissingParameter => "Missing input parameter",
            ErrorType::IllegalParameter => "Illegal input parameter",
            ErrorType::InvalidArgument => "Invalid argument",
        }
    }
}

/// Sample service error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The acting user lacks the required permission
    #[error("Unauthorized: {reason}")]
    Unauthorized {
        /// Message naming the user and the attempted method
        reason: String,
    },

    /// A required parameter was absent
    #[error("Missing input parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter
        name: String,
    },

    /// A parameter was present but structurally or semantically invalid
    #[error("Illegal input parameter: {reason}")]
    IllegalParameter {
        /// Message describing the violation
        reason: String,
        /// Location of the rejected field; root when not known
        path: FieldPath,
    },

    /// Contract violation by the calling code
    #[error("{reason}")]
    InvalidArgument {
        /// Message describing the violation
        reason: String,
    },
}

impl Error {
    /// Create an Unauthorized error
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Error::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Create a MissingParameter error
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Error::MissingParameter { name: name.into() }
    }

    /// Create an IllegalParameter error without a field location
    pub fn illegal_parameter(reason: impl Into<String>) -> Self {
        Error::IllegalParameter {
            reason: reason.into(),
            path: FieldPath::root(),
        }
    }

    /// Create an IllegalParameter error for the field at `path`
    pub fn illegal_parameter_at(reason: impl Into<String>, path: FieldPath) -> Self {
        Error::IllegalParameter {
            reason: reason.into(),
            path,
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// The bare message, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Error::Unauthorized { reason } => reason,
            Error::MissingParameter { name } => name,
            Error::IllegalParameter { reason, .. } => reason,
            Error::InvalidArgument { reason } => reason,
        }
    }

    /// The kind of this error
    pub fn error_type(&self) -> ErrorType {
        match self {
            Error::Unauthorized { .. } => ErrorType::Unauthorized,
            Error::MissingParameter { .. } => ErrorType::MissingParameter,
            Error::IllegalParameter { .. } => ErrorType::IllegalParameter,
            Error::InvalidArgument { .. } => ErrorType::InvalidArgument,
        }
    }

    /// Service error code, if user facing
    pub fn code(&self) -> Option<u32> {
        self.error_type().code()
    }

    /// Location of the rejected field, for illegal-parameter errors
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Error::IllegalParameter { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Attach a field location to an illegal-parameter error that has none.
    ///
    /// Other kinds and errors that already name a field are returned as-is.
    pub fn at(self, location: FieldPath) -> Self {
        match self {
            Error::IllegalParameter { reason, path } if path.is_root() => {
                Error::IllegalParameter {
                    reason,
                    path: location,
                }
            }
            other => other,
        }
    }

    /// Prepend context to an illegal-parameter message.
    ///
    /// Missing-parameter and other kinds pass through unchanged.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            Error::IllegalParameter { reason, path } => Error::IllegalParameter {
                reason: format!("{}{}", context, reason),
                path,
            },
            other => other,
        }
    }
}
