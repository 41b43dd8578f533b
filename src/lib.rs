//! intlfmt - symbolic, cached date and number formatting
//!
//! This crate resolves human-readable formatting options (`"medium"`,
//! `"halfeven"`, `"grouping_used"`, ...) into the integer constants of a
//! locale formatting backend, builds and caches formatter handles, and turns
//! loosely-typed date inputs into zoned instants. A [`Formatter`] facade ties
//! everything together:
//!
//! ```no_run
//! use intlfmt::{DateFormatOptions, DateSettings, Formatter, NumberSettings, Settings};
//!
//! let settings = Settings {
//!     date: DateSettings::new("medium", "medium"),
//!     number: NumberSettings::new("decimal"),
//! };
//! let formatter = Formatter::from_settings(&settings)?;
//! let options = DateFormatOptions::new().with_locale("en_US").with_timezone("UTC");
//! assert_eq!(formatter.format_date(1654247542, &options)?, "Jun 3, 2022");
//! # Ok::<(), intlfmt::FormatError>(())
//! ```

#[macro_use]
mod logging;

pub mod ast;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod factory;
pub mod locale;
pub mod native;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod zone;

mod formatter;
mod intl;

pub use catalog::{BuiltinCatalog, LocaleCatalog};
pub use config::{
    DateFormatterConfig, DateSettings, NumberFormatterConfig, NumberSettings, Settings,
};
pub use error::{CatalogError, DateError, FormatError};
pub use factory::{DateFactory, DateOverrides, NumberFactory};
pub use formatter::BuiltinBackend;
pub use intl::{DateFormatOptions, Formatter, NumberFormatOptions};
pub use locale::{FixedLocale, LocaleDefaults, SystemLocale};
pub use native::{Number, NumericValue};
pub use options::{
    AttributeMap, AttributeValue, CalendarFormat, DateFormat, OptionEnum, StyleFormat,
    TimeFormat, TypeFormat,
};
pub use resolver::{Clock, DateInput, DateResolver, FixedClock, SystemClock, TimezoneOverride};
pub use zone::{ResolvedInstant, Zone};
