use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cache::FormatterCache;
use crate::config::{DateFormatterConfig, DateSettings};
use crate::error::FormatError;
use crate::locale::LocaleDefaults;
use crate::native::{DateBackend, NativeDateFormatter};
use crate::options::{CalendarFormat, DateFormat, OptionEnum, TimeFormat};
use crate::zone::Zone;

/// Per-call replacements for a [`DateFactory`]'s defaults.
///
/// A field left at `None` keeps the factory's configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateOverrides {
    pub date_format: Option<DateFormat>,
    pub time_format: Option<TimeFormat>,
    pub pattern: Option<String>,
    pub calendar: Option<CalendarFormat>,
}

impl DateOverrides {
    pub fn new() -> Self {
        DateOverrides::default()
    }

    /// Builds overrides from symbolic names, validating each one present.
    pub fn from_names(
        date_format: Option<&str>,
        time_format: Option<&str>,
        pattern: Option<&str>,
        calendar: Option<&str>,
    ) -> Result<Self, FormatError> {
        Ok(DateOverrides {
            date_format: date_format.map(DateFormat::from_name).transpose()?,
            time_format: time_format.map(TimeFormat::from_name).transpose()?,
            pattern: pattern.map(str::to_string),
            calendar: calendar.map(CalendarFormat::from_name).transpose()?,
        })
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = Some(date_format);
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = Some(time_format);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarFormat) -> Self {
        self.calendar = Some(calendar);
        self
    }
}

/// Identifies a date formatter by its fully resolved construction inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateCacheKey {
    pub locale: String,
    pub date_type: i32,
    pub time_type: i32,
    pub timezone: String,
    pub calendar: i32,
    pub pattern: Option<String>,
}

/// Creates and caches native date formatters.
pub struct DateFactory {
    config: DateFormatterConfig,
    backend: Arc<dyn DateBackend>,
    locales: Arc<dyn LocaleDefaults>,
    cache: FormatterCache<DateCacheKey, dyn NativeDateFormatter>,
}

impl DateFactory {
    pub fn new(
        config: DateFormatterConfig,
        backend: Arc<dyn DateBackend>,
        locales: Arc<dyn LocaleDefaults>,
    ) -> Self {
        DateFactory {
            config,
            backend,
            locales,
            cache: FormatterCache::unbounded(),
        }
    }

    /// Builds a factory from symbolic settings.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError::UnknownOption`] if a style or calendar name
    /// is not recognized.
    pub fn from_settings(
        settings: &DateSettings,
        backend: Arc<dyn DateBackend>,
        locales: Arc<dyn LocaleDefaults>,
    ) -> Result<Self, FormatError> {
        Ok(DateFactory::new(
            DateFormatterConfig::try_from(settings)?,
            backend,
            locales,
        ))
    }

    /// Bounds the formatter cache, evicting the least recently used handle.
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = FormatterCache::with_capacity(capacity);
        self
    }

    pub fn config(&self) -> &DateFormatterConfig {
        &self.config
    }

    /// Number of cached handles.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Returns the formatter for `timezone`, `locale` and `overrides`.
    ///
    /// A missing locale resolves to the default locale. Two calls whose
    /// resolved inputs are identical return the same handle. A pattern is
    /// applied only when the handle is first built.
    pub fn create_date_formatter(
        &self,
        timezone: &Zone,
        locale: Option<&str>,
        overrides: &DateOverrides,
    ) -> Result<Arc<dyn NativeDateFormatter>, FormatError> {
        let date_type = overrides.date_format.unwrap_or(self.config.date_type);
        let time_type = overrides.time_format.unwrap_or(self.config.time_type);
        let calendar = overrides.calendar.unwrap_or(self.config.calendar);
        let pattern = overrides
            .pattern
            .as_ref()
            .or(self.config.pattern.as_ref())
            .cloned();

        let key = DateCacheKey {
            locale: locale.map_or_else(|| self.locales.locale(), str::to_string),
            date_type: date_type.to_native(),
            time_type: time_type.to_native(),
            timezone: timezone.name(),
            calendar: calendar.to_native(),
            pattern,
        };

        let build_key = key.clone();
        self.cache.get_or_try_insert_with(key, || {
            debug!("building date formatter for {:?}", build_key);
            let mut formatter = self.backend.create(
                &build_key.locale,
                build_key.date_type,
                build_key.time_type,
                timezone,
                build_key.calendar,
            )?;
            if let Some(pattern) = &build_key.pattern {
                formatter.set_pattern(pattern)?;
            }
            Ok(Arc::from(formatter))
        })
    }
}

impl fmt::Debug for DateFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateFactory")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
