//! Error types for quicksnmp.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

use crate::coerce::NativeValue;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a protocol backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// SNMP error status codes (RFC 3416).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ErrorStatus {
    #[default]
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    /// Unknown/future error status code.
    Unknown(i32),
}

impl ErrorStatus {
    /// Create from raw status code.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            other => Self::Unknown(other),
        }
    }

    /// Convert to raw status code.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(code) => *code,
        }
    }

    /// Whether this status signals an error (anything but `noError`).
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoError)
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => write!(f, "noError"),
            Self::TooBig => write!(f, "tooBig"),
            Self::NoSuchName => write!(f, "noSuchName"),
            Self::BadValue => write!(f, "badValue"),
            Self::ReadOnly => write!(f, "readOnly"),
            Self::GenErr => write!(f, "genErr"),
            Self::NoAccess => write!(f, "noAccess"),
            Self::WrongType => write!(f, "wrongType"),
            Self::WrongLength => write!(f, "wrongLength"),
            Self::WrongEncoding => write!(f, "wrongEncoding"),
            Self::WrongValue => write!(f, "wrongValue"),
            Self::NoCreation => write!(f, "noCreation"),
            Self::InconsistentValue => write!(f, "inconsistentValue"),
            Self::ResourceUnavailable => write!(f, "resourceUnavailable"),
            Self::CommitFailed => write!(f, "commitFailed"),
            Self::UndoFailed => write!(f, "undoFailed"),
            Self::AuthorizationError => write!(f, "authorizationError"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::InconsistentName => write!(f, "inconsistentName"),
            Self::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A response value has no native mapping.
    ///
    /// Never retried: it means the coercion table lacks an entry for the
    /// type, not that the exchange failed.
    #[error("type '{type_name}' not implemented")]
    UnsupportedType { type_name: &'static str },

    /// The retry budget for one response item ran out.
    ///
    /// Carries the error signal from the last failed attempt.
    #[error(
        "SNMP error after {attempts} attempt(s): indication={}, status={status}, index={index}",
        .indication.as_deref().unwrap_or("none")
    )]
    Protocol {
        indication: Option<String>,
        status: ErrorStatus,
        index: u32,
        attempts: u32,
    },

    /// The response source ended before yielding every expected response.
    #[error("response source exhausted after {received} of {expected} response(s)")]
    SourceExhausted { expected: usize, received: usize },

    /// The row-count lookup of an auto-counted GETBULK did not return the count OID.
    #[error("count OID {oid} missing from response")]
    MissingCount { oid: String },

    /// The row-count lookup returned something other than a non-negative integer.
    #[error("count OID {oid} returned {value}, expected a non-negative integer")]
    InvalidCount { oid: String, value: NativeValue },

    /// Error raised by the protocol backend, passed through untouched.
    #[error(transparent)]
    Backend(BoxError),
}

impl Error {
    /// Wrap a backend error.
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }

    /// Create an unsupported-type error.
    pub fn unsupported(type_name: &'static str) -> Self {
        Self::UnsupportedType { type_name }
    }

    /// Whether this error came from the protocol backend rather than from quicksnmp.
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_roundtrip() {
        for code in 0..=18 {
            assert_eq!(ErrorStatus::from_i32(code).as_i32(), code);
        }
        assert_eq!(ErrorStatus::from_i32(99), ErrorStatus::Unknown(99));
        assert_eq!(ErrorStatus::Unknown(99).as_i32(), 99);
    }

    #[test]
    fn test_error_status_is_error() {
        assert!(!ErrorStatus::NoError.is_error());
        assert!(ErrorStatus::GenErr.is_error());
        assert!(ErrorStatus::Unknown(42).is_error());
    }

    #[test]
    fn test_protocol_error_display() {
        let err = Error::Protocol {
            indication: Some("requestTimedOut".into()),
            status: ErrorStatus::NoError,
            index: 0,
            attempts: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 attempt(s)"));
        assert!(msg.contains("requestTimedOut"));
        assert!(msg.contains("noError"));

        let err = Error::Protocol {
            indication: None,
            status: ErrorStatus::NoSuchName,
            index: 2,
            attempts: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("indication=none"));
        assert!(msg.contains("noSuchName"));
        assert!(msg.contains("index=2"));
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = Error::unsupported("Counter64");
        assert_eq!(err.to_string(), "type 'Counter64' not implemented");
    }

    #[test]
    fn test_backend_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::backend(io);
        assert!(err.is_backend());
        assert_eq!(err.to_string(), "refused");
    }
}
