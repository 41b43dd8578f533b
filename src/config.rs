//! Formatter configuration.
//!
//! [`Settings`] mirrors the nested configuration structure accepted at
//! construction time. Its string values are validated into the typed
//! [`DateFormatterConfig`] and [`NumberFormatterConfig`], which the factories
//! use as defaults for every formatter they build.

use std::collections::BTreeMap;

use crate::error::FormatError;
use crate::options::{
    AttributeMap, CalendarFormat, DateFormat, NumberAttributeOption, NumberSymbolOption,
    NumberTextOption, OptionEnum, StyleFormat, TimeFormat,
};

/// Top-level configuration: date and number sections.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Settings {
    pub date: DateSettings,
    pub number: NumberSettings,
}

/// Date section of the configuration, with symbolic names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DateSettings {
    pub date_format: String,
    pub time_format: String,
    #[cfg_attr(feature = "serde", serde(default = "default_calendar"))]
    pub calendar: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<String>,
}

#[cfg(feature = "serde")]
fn default_calendar() -> String {
    CalendarFormat::Gregorian.name().to_string()
}

impl DateSettings {
    /// Settings with the given styles, the gregorian calendar and no pattern.
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> Self {
        DateSettings {
            date_format: date_format.into(),
            time_format: time_format.into(),
            calendar: CalendarFormat::Gregorian.name().to_string(),
            pattern: None,
        }
    }
}

/// Number section of the configuration, with symbolic names.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NumberSettings {
    pub style: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AttributeMap,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_attributes: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol_attributes: BTreeMap<String, String>,
}

impl NumberSettings {
    pub fn new(style: impl Into<String>) -> Self {
        NumberSettings {
            style: style.into(),
            ..Default::default()
        }
    }
}

/// Default options of a date factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatterConfig {
    pub date_type: DateFormat,
    pub time_type: TimeFormat,
    pub calendar: CalendarFormat,
    pub pattern: Option<String>,
}

impl DateFormatterConfig {
    pub fn new(date_type: DateFormat, time_type: TimeFormat) -> Self {
        DateFormatterConfig {
            date_type,
            time_type,
            calendar: CalendarFormat::Gregorian,
            pattern: None,
        }
    }

    /// Builds a configuration from symbolic names.
    pub fn from_names(date_type: &str, time_type: &str) -> Result<Self, FormatError> {
        Ok(DateFormatterConfig::new(
            DateFormat::from_name(date_type)?,
            TimeFormat::from_name(time_type)?,
        ))
    }

    pub fn with_calendar(mut self, calendar: CalendarFormat) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

impl TryFrom<&DateSettings> for DateFormatterConfig {
    type Error = FormatError;

    fn try_from(settings: &DateSettings) -> Result<Self, Self::Error> {
        Ok(DateFormatterConfig {
            date_type: DateFormat::from_name(&settings.date_format)?,
            time_type: TimeFormat::from_name(&settings.time_format)?,
            calendar: CalendarFormat::from_name(&settings.calendar)?,
            pattern: settings.pattern.clone(),
        })
    }
}

/// Default options of a number factory.
///
/// Attributes are applied in order: `attributes`, then per-call extra
/// attributes, then `text_attributes`, then `symbol_attributes`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatterConfig {
    pub style: StyleFormat,
    pub pattern: Option<String>,
    pub attributes: Vec<NumberAttributeOption>,
    pub text_attributes: Vec<NumberTextOption>,
    pub symbol_attributes: Vec<NumberSymbolOption>,
}

impl NumberFormatterConfig {
    pub fn new(style: StyleFormat) -> Self {
        NumberFormatterConfig {
            style,
            pattern: None,
            attributes: Vec::new(),
            text_attributes: Vec::new(),
            symbol_attributes: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_attribute(mut self, attribute: NumberAttributeOption) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_text_attribute(mut self, attribute: NumberTextOption) -> Self {
        self.text_attributes.push(attribute);
        self
    }

    pub fn with_symbol_attribute(mut self, attribute: NumberSymbolOption) -> Self {
        self.symbol_attributes.push(attribute);
        self
    }
}

impl TryFrom<&NumberSettings> for NumberFormatterConfig {
    type Error = FormatError;

    fn try_from(settings: &NumberSettings) -> Result<Self, Self::Error> {
        Ok(NumberFormatterConfig {
            style: StyleFormat::from_name(&settings.style)?,
            pattern: settings.pattern.clone(),
            attributes: NumberAttributeOption::from_map(&settings.attributes)?,
            text_attributes: NumberTextOption::from_map(&settings.text_attributes)?,
            symbol_attributes: NumberSymbolOption::from_map(&settings.symbol_attributes)?,
        })
    }
}
