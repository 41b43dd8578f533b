//! Error types for option resolution, date resolution and formatting.

use thiserror::Error;

/// Errors that can occur while resolving options or formatting a value.
///
/// Every failure surfaced by the public API belongs to this family. Date
/// resolution failures are wrapped as [`FormatError::InvalidDate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("the {domain} \"{name}\" does not exist; expecting one value of: \"{}\"", expected.join("\", \""))]
    UnknownOption {
        domain: &'static str,
        name: String,
        expected: Vec<&'static str>,
    },

    #[error("unsupported {domain} constant: {value}")]
    UnsupportedConstant { domain: &'static str, value: i32 },

    #[error("the number formatter value for \"{name}\" can not be a string: \"{value}\"")]
    InvalidAttributeValue { name: String, value: String },

    #[error("unable to format the given date")]
    InvalidDate(#[from] DateError),

    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("native formatter failure: {message}")]
    NativeFormatter { message: String },
}

impl FormatError {
    /// Returns true if this error reports an unrecognized symbolic option name.
    pub fn is_unknown_option(&self) -> bool {
        matches!(self, FormatError::UnknownOption { .. })
    }

    /// Returns true if this error wraps a date resolution failure.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, FormatError::InvalidDate(_))
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        FormatError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn native(message: impl Into<String>) -> Self {
        FormatError::NativeFormatter {
            message: message.into(),
        }
    }
}

/// Errors that can occur when resolving a date-like input into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("unknown or invalid timezone identifier \"{0}\"")]
    InvalidTimezone(String),

    #[error("unable to parse \"{0}\" as a date")]
    Unparseable(String),

    #[error("date out of range: {0}")]
    OutOfRange(String),
}

/// Errors reported by a [`LocaleCatalog`](crate::catalog::LocaleCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no {kind} data found for \"{code}\"")]
    NotFound { kind: &'static str, code: String },
}

impl CatalogError {
    pub(crate) fn not_found(kind: &'static str, code: &str) -> Self {
        CatalogError::NotFound {
            kind,
            code: code.to_string(),
        }
    }
}
