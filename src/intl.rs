//! The [`Formatter`] facade.
//!
//! A [`Formatter`] ties together a [`DateFactory`], a [`NumberFactory`], a
//! [`DateResolver`] and a [`LocaleCatalog`]. Options are passed by symbolic
//! name and validated on every call.

use std::fmt;
use std::sync::Arc;

use crate::catalog::{BuiltinCatalog, LocaleCatalog};
use crate::config::Settings;
use crate::error::{CatalogError, FormatError};
use crate::factory::{DateFactory, DateOverrides, NumberFactory};
use crate::formatter::BuiltinBackend;
use crate::locale::SystemLocale;
use crate::native::Number;
use crate::options::{AttributeMap, AttributeValue, OptionEnum, StyleFormat, TypeFormat};
use crate::resolver::{DateInput, DateResolver, TimezoneOverride};

/// Per-call options of the date formatting methods.
///
/// `None` fields fall back to the date factory's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormatOptions {
    pub locale: Option<String>,
    pub timezone: TimezoneOverride,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub pattern: Option<String>,
    pub calendar: Option<String>,
}

impl DateFormatOptions {
    pub fn new() -> Self {
        DateFormatOptions::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<TimezoneOverride>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = Some(time_format.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }
}

/// Per-call options of the number formatting methods.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatOptions {
    pub locale: Option<String>,
    /// Style name; `None` keeps the factory's default style.
    pub style: Option<String>,
    /// Numeric subtype name, `"default"` unless set.
    pub type_name: String,
    pub attributes: AttributeMap,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        NumberFormatOptions {
            locale: None,
            style: None,
            type_name: TypeFormat::Default.name().to_string(),
            attributes: AttributeMap::new(),
        }
    }
}

impl NumberFormatOptions {
    pub fn new() -> Self {
        NumberFormatOptions::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Formats dates and numbers and looks up localized display names.
pub struct Formatter {
    date_factory: DateFactory,
    number_factory: NumberFactory,
    resolver: DateResolver,
    catalog: Arc<dyn LocaleCatalog>,
}

impl Formatter {
    pub fn new(
        date_factory: DateFactory,
        number_factory: NumberFactory,
        resolver: DateResolver,
        catalog: Arc<dyn LocaleCatalog>,
    ) -> Self {
        Formatter {
            date_factory,
            number_factory,
            resolver,
            catalog,
        }
    }

    /// Builds a formatter on the built-in engine and catalog, using the
    /// system locale, zone and clock.
    pub fn from_settings(settings: &Settings) -> Result<Self, FormatError> {
        let locales = Arc::new(SystemLocale);
        let backend = Arc::new(BuiltinBackend::new());
        Ok(Formatter::new(
            DateFactory::from_settings(&settings.date, backend.clone(), locales.clone())?,
            NumberFactory::from_settings(&settings.number, backend, locales)?,
            DateResolver::from_system(),
            Arc::new(BuiltinCatalog::new()),
        ))
    }

    pub fn date_factory(&self) -> &DateFactory {
        &self.date_factory
    }

    pub fn number_factory(&self) -> &NumberFactory {
        &self.number_factory
    }

    pub fn resolver(&self) -> &DateResolver {
        &self.resolver
    }

    /// Formats a date and time.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError::InvalidDate`] when the input or timezone can
    /// not be resolved, and with [`FormatError::UnknownOption`] for an invalid
    /// date format, time format or calendar name.
    pub fn format_date_time(
        &self,
        date: impl Into<DateInput>,
        options: &DateFormatOptions,
    ) -> Result<String, FormatError> {
        let instant = self.resolver.resolve(date, options.timezone.clone())?;
        let overrides = DateOverrides::from_names(
            options.date_format.as_deref(),
            options.time_format.as_deref(),
            options.pattern.as_deref(),
            options.calendar.as_deref(),
        )?;
        let formatter = self.date_factory.create_date_formatter(
            &instant.zone(),
            options.locale.as_deref(),
            &overrides,
        )?;
        formatter
            .format(&instant)
            .ok_or_else(|| FormatError::native("unable to format the given date"))
    }

    /// Formats the date part only.
    pub fn format_date(
        &self,
        date: impl Into<DateInput>,
        options: &DateFormatOptions,
    ) -> Result<String, FormatError> {
        let options = options.clone().with_time_format("none");
        self.format_date_time(date, &options)
    }

    /// Formats the time part only.
    pub fn format_time(
        &self,
        date: impl Into<DateInput>,
        options: &DateFormatOptions,
    ) -> Result<String, FormatError> {
        let options = options.clone().with_date_format("none");
        self.format_date_time(date, &options)
    }

    /// Formats a number with the requested style and numeric subtype.
    pub fn format_number(
        &self,
        number: impl Into<Number>,
        options: &NumberFormatOptions,
    ) -> Result<String, FormatError> {
        let style = options.style.as_deref().map(StyleFormat::from_name).transpose()?;
        let format_type = TypeFormat::from_name(&options.type_name)?;
        let formatter = self.number_factory.create_number_formatter(
            options.locale.as_deref(),
            style,
            &options.attributes,
        )?;
        formatter
            .format(number.into(), format_type.to_native())
            .ok_or_else(|| FormatError::native("unable to format the given number"))
    }

    /// Formats an amount of `currency` (an ISO 4217 code).
    ///
    /// The style option is ignored: the currency style is always used.
    pub fn format_currency(
        &self,
        amount: f64,
        currency: &str,
        options: &NumberFormatOptions,
    ) -> Result<String, FormatError> {
        let formatter = self.number_factory.create_number_formatter(
            options.locale.as_deref(),
            Some(StyleFormat::Currency),
            &options.attributes,
        )?;
        formatter.format_currency(amount, currency).ok_or_else(|| {
            FormatError::native(format!("unable to format the given number as {currency}"))
        })
    }

    /// The name of a country (ISO 3166-1 alpha-2) in `locale`.
    pub fn country_name(&self, country: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(country, locale, |code, locale| {
            self.catalog.country_name(code, locale)
        })
    }

    /// The name of a currency (ISO 4217) in `locale`.
    pub fn currency_name(&self, currency: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(currency, locale, |code, locale| {
            self.catalog.currency_name(code, locale)
        })
    }

    /// The symbol of a currency (ISO 4217) in `locale`.
    pub fn currency_symbol(&self, currency: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(currency, locale, |code, locale| {
            self.catalog.currency_symbol(code, locale)
        })
    }

    /// The name of a language (ISO 639) in `locale`.
    pub fn language_name(&self, language: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(language, locale, |code, locale| {
            self.catalog.language_name(code, locale)
        })
    }

    /// The name of a locale identifier in `locale`.
    pub fn locale_name(&self, code: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(code, locale, |code, locale| self.catalog.locale_name(code, locale))
    }

    /// The name of an IANA timezone in `locale`.
    pub fn timezone_name(&self, timezone: Option<&str>, locale: Option<&str>) -> String {
        self.display_name(timezone, locale, |code, locale| {
            self.catalog.timezone_name(code, locale)
        })
    }

    /// The IANA zones in use in a country, or nothing for an unknown country.
    pub fn country_timezones(&self, country: &str) -> Vec<String> {
        self.catalog.country_timezones(country).unwrap_or_else(|err| {
            debug!("{}", err);
            Vec::new()
        })
    }

    fn display_name<F>(&self, code: Option<&str>, locale: Option<&str>, lookup: F) -> String
    where
        F: FnOnce(&str, &str) -> Result<String, CatalogError>,
    {
        let Some(code) = code else {
            return String::new();
        };
        let locale = locale.map_or_else(|| self.number_factory.default_locale(), str::to_string);
        lookup(code, &locale).unwrap_or_else(|err| {
            debug!("{}; falling back to the code", err);
            code.to_string()
        })
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("date_factory", &self.date_factory)
            .field("number_factory", &self.number_factory)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_options_default_to_the_default_type() {
        let options = NumberFormatOptions::new();
        assert_eq!(options.type_name, "default");
        assert!(options.style.is_none());
        assert!(options.attributes.is_empty());
    }

    #[test]
    fn test_option_builders() {
        let options = DateFormatOptions::new()
            .with_locale("fr")
            .with_timezone("Europe/Paris")
            .with_date_format("long");
        assert_eq!(options.locale.as_deref(), Some("fr"));
        assert_eq!(options.timezone, TimezoneOverride::Name("Europe/Paris".to_string()));
        assert_eq!(options.date_format.as_deref(), Some("long"));
        assert!(options.time_format.is_none());

        let options = NumberFormatOptions::new()
            .with_style("percent")
            .with_attribute("fraction_digit", 2i64);
        assert_eq!(options.style.as_deref(), Some("percent"));
        assert_eq!(options.attributes.len(), 1);
    }
}
