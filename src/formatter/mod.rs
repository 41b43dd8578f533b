//! The built-in formatting engine.
//!
//! [`BuiltinBackend`] implements both [`DateBackend`] and [`NumberBackend`]
//! on top of the compiled patterns in [`crate::ast`] and the locale tables in
//! [`crate::locale`]. It covers the `en`, `fr` and `de` languages; other
//! locales render with English data.

mod date;
mod digits;
mod number;
mod spellout;

use std::fmt;
use std::sync::Arc;

use crate::error::FormatError;
use crate::native::{DateBackend, NativeDateFormatter, NativeNumberFormatter, NumberBackend};
use crate::resolver::{Clock, SystemClock};
use crate::zone::Zone;

use date::BuiltinDateFormatter;
use number::BuiltinNumberFormatter;

/// Builds formatters backed by the built-in engine.
///
/// The clock decides what "today" is for relative date styles.
#[derive(Clone)]
pub struct BuiltinBackend {
    clock: Arc<dyn Clock>,
}

impl BuiltinBackend {
    pub fn new() -> Self {
        BuiltinBackend {
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        BuiltinBackend { clock }
    }
}

impl Default for BuiltinBackend {
    fn default() -> Self {
        BuiltinBackend::new()
    }
}

impl fmt::Debug for BuiltinBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinBackend")
            .field("now", &self.clock.now())
            .finish()
    }
}

impl DateBackend for BuiltinBackend {
    fn create(
        &self,
        locale: &str,
        date_type: i32,
        time_type: i32,
        zone: &Zone,
        calendar: i32,
    ) -> Result<Box<dyn NativeDateFormatter>, FormatError> {
        trace!(
            "building date formatter: locale={} date={} time={} zone={} calendar={}",
            locale,
            date_type,
            time_type,
            zone,
            calendar
        );
        let formatter = BuiltinDateFormatter::new(
            locale,
            date_type,
            time_type,
            *zone,
            calendar,
            Arc::clone(&self.clock),
        )?;
        Ok(Box::new(formatter))
    }
}

impl NumberBackend for BuiltinBackend {
    fn create(
        &self,
        locale: &str,
        style: i32,
    ) -> Result<Box<dyn NativeNumberFormatter>, FormatError> {
        trace!("building number formatter: locale={} style={}", locale, style);
        Ok(Box::new(BuiltinNumberFormatter::new(locale, style)?))
    }
}
