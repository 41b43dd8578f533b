use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cache::FormatterCache;
use crate::config::{NumberFormatterConfig, NumberSettings};
use crate::error::FormatError;
use crate::locale::LocaleDefaults;
use crate::native::{NativeNumberFormatter, NumberBackend, NumericValue};
use crate::options::{AttributeMap, NumberAttributeOption, OptionEnum, StyleFormat};

/// A hashable form of a resolved attribute value.
///
/// Floats are compared by their bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Int(i64),
    Float(u64),
}

impl From<NumericValue> for AttributeKey {
    fn from(value: NumericValue) -> Self {
        match value {
            NumericValue::Int(n) => AttributeKey::Int(n),
            NumericValue::Float(n) => AttributeKey::Float(n.to_bits()),
        }
    }
}

/// Identifies a number formatter by its resolved construction inputs.
///
/// The factory's base attributes are not part of the key: they are the
/// same for every formatter a factory builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberCacheKey {
    pub locale: String,
    pub style: i32,
    /// Extra attributes as (native attribute, value), sorted by attribute name.
    pub attributes: Vec<(i32, AttributeKey)>,
}

/// Creates and caches native number formatters.
pub struct NumberFactory {
    config: NumberFormatterConfig,
    backend: Arc<dyn NumberBackend>,
    locales: Arc<dyn LocaleDefaults>,
    cache: FormatterCache<NumberCacheKey, dyn NativeNumberFormatter>,
}

impl NumberFactory {
    pub fn new(
        config: NumberFormatterConfig,
        backend: Arc<dyn NumberBackend>,
        locales: Arc<dyn LocaleDefaults>,
    ) -> Self {
        NumberFactory {
            config,
            backend,
            locales,
            cache: FormatterCache::unbounded(),
        }
    }

    /// Builds a factory from symbolic settings, validating every name.
    pub fn from_settings(
        settings: &NumberSettings,
        backend: Arc<dyn NumberBackend>,
        locales: Arc<dyn LocaleDefaults>,
    ) -> Result<Self, FormatError> {
        Ok(NumberFactory::new(
            NumberFormatterConfig::try_from(settings)?,
            backend,
            locales,
        ))
    }

    /// Bounds the formatter cache, evicting the least recently used handle.
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = FormatterCache::with_capacity(capacity);
        self
    }

    pub fn config(&self) -> &NumberFormatterConfig {
        &self.config
    }

    /// Number of cached handles.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// The locale used when a caller passes none.
    pub fn default_locale(&self) -> String {
        self.locales.locale()
    }

    /// Returns the formatter for `locale`, `style` and `extra` attributes.
    ///
    /// `extra` is validated before the cache is consulted. A fresh handle
    /// receives, in order: the base attributes, the extra attributes, the
    /// text attributes, the symbols and finally the pattern. Later settings
    /// win over earlier ones.
    pub fn create_number_formatter(
        &self,
        locale: Option<&str>,
        style: Option<StyleFormat>,
        extra: &AttributeMap,
    ) -> Result<Arc<dyn NativeNumberFormatter>, FormatError> {
        let extra = NumberAttributeOption::from_map(extra)?;
        let style = style.unwrap_or(self.config.style);

        let key = NumberCacheKey {
            locale: locale.map_or_else(|| self.locales.locale(), str::to_string),
            style: style.to_native(),
            attributes: extra
                .iter()
                .map(|option| (option.name().to_native(), option.value().into()))
                .collect(),
        };

        let locale = key.locale.clone();
        self.cache.get_or_try_insert_with(key, || {
            debug!("building {} number formatter for {:?}", style, locale);
            let mut formatter = self.backend.create(&locale, style.to_native())?;
            for attribute in self.config.attributes.iter().chain(&extra) {
                attribute.apply_to(formatter.as_mut())?;
            }
            for attribute in &self.config.text_attributes {
                attribute.apply_to(formatter.as_mut())?;
            }
            for symbol in &self.config.symbol_attributes {
                symbol.apply_to(formatter.as_mut())?;
            }
            if let Some(pattern) = &self.config.pattern {
                formatter.set_pattern(pattern)?;
            }
            Ok(Arc::from(formatter))
        })
    }
}

impl fmt::Debug for NumberFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFactory")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
