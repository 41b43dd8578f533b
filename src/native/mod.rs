//! Seams to the host formatting library.
//!
//! The factories never render anything themselves: they resolve options into
//! native constants and hand them to a [`DateBackend`] or [`NumberBackend`],
//! which builds the formatter handles that do the actual work. The crate ships
//! a built-in backend in [`crate::formatter`]; other backends (an ICU binding,
//! a test double) plug in through the same traits.

pub mod constants;

use std::fmt::Debug;

use crate::error::FormatError;
use crate::zone::{ResolvedInstant, Zone};

/// A numeric attribute value passed to a native number formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}

impl NumericValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            NumericValue::Int(n) => *n as f64,
            NumericValue::Float(n) => *n,
        }
    }

    /// The value truncated to an integer, as integer attributes expect.
    pub fn as_i64(&self) -> i64 {
        match self {
            NumericValue::Int(n) => *n,
            NumericValue::Float(n) => *n as i64,
        }
    }
}

/// A number to format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(n as f64)
    }
}

/// A constructed date formatter.
pub trait NativeDateFormatter: Debug + Send + Sync {
    /// Replaces the style-derived pattern with a literal pattern.
    fn set_pattern(&mut self, pattern: &str) -> Result<(), FormatError>;

    /// The pattern currently in use.
    fn pattern(&self) -> String;

    /// Formats an instant. `None` signals a native failure.
    fn format(&self, instant: &ResolvedInstant) -> Option<String>;
}

/// Builds native date formatters.
pub trait DateBackend: Send + Sync {
    fn create(
        &self,
        locale: &str,
        date_type: i32,
        time_type: i32,
        zone: &Zone,
        calendar: i32,
    ) -> Result<Box<dyn NativeDateFormatter>, FormatError>;
}

/// A constructed number formatter.
pub trait NativeNumberFormatter: Debug + Send + Sync {
    fn set_attribute(&mut self, attribute: i32, value: NumericValue) -> Result<(), FormatError>;

    fn set_text_attribute(&mut self, attribute: i32, value: &str) -> Result<(), FormatError>;

    fn set_symbol(&mut self, symbol: i32, value: &str) -> Result<(), FormatError>;

    fn set_pattern(&mut self, pattern: &str) -> Result<(), FormatError>;

    /// Reads back a numeric attribute, `None` if the constant is unknown.
    fn attribute(&self, attribute: i32) -> Option<NumericValue>;

    /// Reads back a text attribute, `None` if the constant is unknown.
    fn text_attribute(&self, attribute: i32) -> Option<String>;

    /// Reads back a symbol, `None` if the constant is unknown.
    fn symbol(&self, symbol: i32) -> Option<String>;

    /// Formats a number as the given numeric type. `None` signals a native failure.
    fn format(&self, number: Number, format_type: i32) -> Option<String>;

    /// Formats an amount of the given ISO 4217 currency. `None` signals a native failure.
    fn format_currency(&self, amount: f64, currency: &str) -> Option<String>;
}

/// Builds native number formatters.
pub trait NumberBackend: Send + Sync {
    fn create(&self, locale: &str, style: i32)
        -> Result<Box<dyn NativeNumberFormatter>, FormatError>;
}
