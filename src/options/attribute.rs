//! Validated (name, value) options applied to a number formatter.

use std::collections::BTreeMap;
use std::fmt;

use super::{AttributeFormat, OptionEnum, PaddingPosition, RoundingMode, SymbolFormat, TextFormat};
use crate::error::FormatError;
use crate::native::{NativeNumberFormatter, NumericValue};

/// A raw attribute value, as found in settings or per-call overrides.
///
/// Textual values are only meaningful for the `rounding_mode` and
/// `padding_position` attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(n) => write!(f, "{}", n),
            AttributeValue::Float(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Int(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Int(n as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

/// Raw attributes keyed by attribute name. Iteration is sorted by name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A numeric attribute with its resolved native value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberAttributeOption {
    name: AttributeFormat,
    value: NumericValue,
}

impl NumberAttributeOption {
    /// Validates an attribute name and its value.
    ///
    /// Numeric values are kept as-is. Textual values are resolved through
    /// [`RoundingMode`] or [`PaddingPosition`] for the two attributes that
    /// accept them, and rejected with [`FormatError::InvalidAttributeValue`]
    /// everywhere else.
    pub fn new(name: &str, value: impl Into<AttributeValue>) -> Result<Self, FormatError> {
        let attribute = AttributeFormat::from_name(name)?;
        let value = match value.into() {
            AttributeValue::Int(n) => NumericValue::Int(n),
            AttributeValue::Float(n) => NumericValue::Float(n),
            AttributeValue::Text(text) => match attribute {
                AttributeFormat::RoundingMode => {
                    NumericValue::Int(RoundingMode::from_name(&text)?.to_native() as i64)
                }
                AttributeFormat::PaddingPosition => {
                    NumericValue::Int(PaddingPosition::from_name(&text)?.to_native() as i64)
                }
                _ => {
                    return Err(FormatError::InvalidAttributeValue {
                        name: name.to_string(),
                        value: text,
                    })
                }
            },
        };

        Ok(NumberAttributeOption {
            name: attribute,
            value,
        })
    }

    /// Validates every entry of an attribute map, in key order.
    pub fn from_map(attributes: &AttributeMap) -> Result<Vec<Self>, FormatError> {
        attributes
            .iter()
            .map(|(name, value)| NumberAttributeOption::new(name, value.clone()))
            .collect()
    }

    pub fn name(&self) -> AttributeFormat {
        self.name
    }

    pub fn value(&self) -> NumericValue {
        self.value
    }

    /// Sets this attribute on a native number formatter.
    pub fn apply_to(&self, formatter: &mut dyn NativeNumberFormatter) -> Result<(), FormatError> {
        formatter.set_attribute(self.name.to_native(), self.value)
    }
}

/// A text attribute (prefixes, suffixes, padding character, currency code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberTextOption {
    name: TextFormat,
    value: String,
}

impl NumberTextOption {
    pub fn new(name: &str, value: impl Into<String>) -> Result<Self, FormatError> {
        Ok(NumberTextOption {
            name: TextFormat::from_name(name)?,
            value: value.into(),
        })
    }

    pub fn from_map(attributes: &BTreeMap<String, String>) -> Result<Vec<Self>, FormatError> {
        attributes
            .iter()
            .map(|(name, value)| NumberTextOption::new(name, value.as_str()))
            .collect()
    }

    pub fn name(&self) -> TextFormat {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn apply_to(&self, formatter: &mut dyn NativeNumberFormatter) -> Result<(), FormatError> {
        formatter.set_text_attribute(self.name.to_native(), &self.value)
    }
}

/// A symbol override (decimal separator, minus sign, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSymbolOption {
    name: SymbolFormat,
    value: String,
}

impl NumberSymbolOption {
    pub fn new(name: &str, value: impl Into<String>) -> Result<Self, FormatError> {
        Ok(NumberSymbolOption {
            name: SymbolFormat::from_name(name)?,
            value: value.into(),
        })
    }

    pub fn from_map(attributes: &BTreeMap<String, String>) -> Result<Vec<Self>, FormatError> {
        attributes
            .iter()
            .map(|(name, value)| NumberSymbolOption::new(name, value.as_str()))
            .collect()
    }

    pub fn name(&self) -> SymbolFormat {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn apply_to(&self, formatter: &mut dyn NativeNumberFormatter) -> Result<(), FormatError> {
        formatter.set_symbol(self.name.to_native(), &self.value)
    }
}
