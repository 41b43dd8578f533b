//! Resolution of loosely-typed date inputs into zoned instants.
//!
//! A [`DateResolver`] turns a [`DateInput`] (an instant, a wall-clock value,
//! epoch seconds, a string or "now") and a [`TimezoneOverride`] into a
//! [`ResolvedInstant`]. Inputs are handled in a fixed priority order:
//!
//! 1. zoned instants are re-zoned (or left as-is for [`TimezoneOverride::Unchanged`]);
//! 2. wall-clock values are first localized in the resolver's default zone;
//! 3. [`DateInput::Now`] and the string `"now"` (any case) read the clock;
//! 4. integers and strings of the form `-?[0-9]+` are epoch seconds;
//! 5. anything else goes through the free-form parser.
//!
//! A numeric string never reaches the free-form parser.

mod parse;

use std::env;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::DateError;
use crate::zone::{ResolvedInstant, Zone};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        FixedClock(now)
    }

    /// A clock frozen at the given epoch seconds.
    pub fn from_timestamp(seconds: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp(seconds, 0)
            .map(FixedClock)
            .ok_or_else(|| DateError::OutOfRange(seconds.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A date-like value to resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// The current instant.
    Now,
    /// An instant that already carries its zone.
    Zoned(ResolvedInstant),
    /// A wall-clock value without a zone.
    Local(NaiveDateTime),
    /// Epoch seconds.
    Timestamp(i64),
    /// A string: `"now"`, an epoch-seconds literal or a free-form date.
    Text(String),
}

impl From<ResolvedInstant> for DateInput {
    fn from(instant: ResolvedInstant) -> Self {
        DateInput::Zoned(instant)
    }
}

impl From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Zoned(dt.into())
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateInput::Zoned(dt.into())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Zoned(dt.into())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(naive: NaiveDateTime) -> Self {
        DateInput::Local(naive)
    }
}

impl From<i64> for DateInput {
    fn from(seconds: i64) -> Self {
        DateInput::Timestamp(seconds)
    }
}

impl From<i32> for DateInput {
    fn from(seconds: i32) -> Self {
        DateInput::Timestamp(seconds.into())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Now, Into::into)
    }
}

/// The zone to attach to a resolved instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimezoneOverride {
    /// The resolver's default zone.
    #[default]
    Default,
    /// Leave the input's own zone in place.
    Unchanged,
    /// A concrete zone.
    Zone(Zone),
    /// A zone identifier, validated at resolution time.
    Name(String),
}

impl From<Zone> for TimezoneOverride {
    fn from(zone: Zone) -> Self {
        TimezoneOverride::Zone(zone)
    }
}

impl From<Tz> for TimezoneOverride {
    fn from(tz: Tz) -> Self {
        TimezoneOverride::Zone(Zone::Named(tz))
    }
}

impl From<&str> for TimezoneOverride {
    fn from(name: &str) -> Self {
        TimezoneOverride::Name(name.to_string())
    }
}

impl From<String> for TimezoneOverride {
    fn from(name: String) -> Self {
        TimezoneOverride::Name(name)
    }
}

impl<T: Into<TimezoneOverride>> From<Option<T>> for TimezoneOverride {
    fn from(value: Option<T>) -> Self {
        value.map_or(TimezoneOverride::Default, Into::into)
    }
}

/// Turns date inputs into [`ResolvedInstant`]s.
#[derive(Clone)]
pub struct DateResolver {
    zone: Zone,
    clock: Arc<dyn Clock>,
}

impl DateResolver {
    pub fn new(zone: Zone, clock: Arc<dyn Clock>) -> Self {
        DateResolver { zone, clock }
    }

    /// A resolver using the system clock and the zone named by the `TZ`
    /// environment variable, or UTC if it is unset or invalid.
    pub fn from_system() -> Self {
        let zone = env::var("TZ")
            .ok()
            .and_then(|tz| match Zone::parse(tz.trim_start_matches(':')) {
                Ok(zone) => Some(zone),
                Err(_err) => {
                    warn!("ignoring TZ: {}", _err);
                    None
                }
            })
            .unwrap_or_default();
        DateResolver::new(zone, Arc::new(SystemClock))
    }

    /// A resolver using the system clock and the given default zone.
    pub fn from_timezone_identifier(identifier: &str) -> Result<Self, DateError> {
        Ok(DateResolver::new(Zone::parse(identifier)?, Arc::new(SystemClock)))
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The default zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The current instant according to the resolver's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Resolves a date input.
    ///
    /// # Errors
    ///
    /// Fails with [`DateError::InvalidTimezone`] for an unknown zone
    /// identifier, [`DateError::OutOfRange`] for epoch seconds that do not fit
    /// a date, and [`DateError::Unparseable`] for strings the free-form parser
    /// does not understand.
    pub fn resolve(
        &self,
        date: impl Into<DateInput>,
        timezone: impl Into<TimezoneOverride>,
    ) -> Result<ResolvedInstant, DateError> {
        let target = self.target_zone(timezone.into())?;
        match date.into() {
            DateInput::Zoned(instant) => Ok(rezone(instant, target)),
            DateInput::Local(naive) => {
                let utc = self
                    .zone
                    .from_local(&naive)
                    .ok_or_else(|| DateError::OutOfRange(naive.to_string()))?;
                Ok(rezone(ResolvedInstant::new(utc, self.zone), target))
            }
            DateInput::Now => Ok(self.current(target)),
            DateInput::Timestamp(seconds) => {
                Ok(rezone(ResolvedInstant::from_timestamp(seconds, Zone::utc())?, target))
            }
            DateInput::Text(text) => self.resolve_text(&text, target),
        }
    }

    fn resolve_text(&self, text: &str, target: Option<Zone>) -> Result<ResolvedInstant, DateError> {
        if text.eq_ignore_ascii_case("now") {
            return Ok(self.current(target));
        }

        if is_epoch_literal(text) {
            let seconds = text
                .parse::<i64>()
                .map_err(|_| DateError::OutOfRange(text.to_string()))?;
            return Ok(rezone(ResolvedInstant::from_timestamp(seconds, Zone::utc())?, target));
        }

        let parsed = parse::parse(text, target.unwrap_or(self.zone), self.clock.now())?;
        if parsed.explicit_zone {
            Ok(rezone(parsed.instant, target))
        } else {
            Ok(parsed.instant)
        }
    }

    fn current(&self, target: Option<Zone>) -> ResolvedInstant {
        ResolvedInstant::new(self.clock.now(), target.unwrap_or(self.zone))
    }

    /// `None` means the input keeps its own zone.
    fn target_zone(&self, timezone: TimezoneOverride) -> Result<Option<Zone>, DateError> {
        match timezone {
            TimezoneOverride::Default => Ok(Some(self.zone)),
            TimezoneOverride::Unchanged => Ok(None),
            TimezoneOverride::Zone(zone) => Ok(Some(zone)),
            TimezoneOverride::Name(name) => Zone::parse(&name).map(Some),
        }
    }
}

impl fmt::Debug for DateResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateResolver")
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}

fn rezone(instant: ResolvedInstant, target: Option<Zone>) -> ResolvedInstant {
    match target {
        Some(zone) => instant.with_zone(zone),
        None => instant,
    }
}

/// Matches `-?[0-9]+`.
fn is_epoch_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn resolver(zone: &str) -> DateResolver {
        DateResolver::new(
            Zone::parse(zone).unwrap(),
            Arc::new(FixedClock::from_timestamp(1654247542).unwrap()),
        )
    }

    #[test]
    fn test_epoch_literal() {
        assert!(is_epoch_literal("1654247542"));
        assert!(is_epoch_literal("-1"));
        assert!(!is_epoch_literal("-"));
        assert!(!is_epoch_literal(""));
        assert!(!is_epoch_literal("+1"));
        assert!(!is_epoch_literal("12a"));
    }

    #[test]
    fn test_now_uses_default_zone() {
        let resolver = resolver("Europe/Paris");
        let now = resolver.resolve(DateInput::Now, TimezoneOverride::Default).unwrap();
        assert_eq!(now.timestamp(), 1654247542);
        assert_eq!(now.zone().name(), "Europe/Paris");

        let text = resolver.resolve("NoW", None::<Zone>).unwrap();
        assert_eq!(text, now);
    }

    #[test]
    fn test_numeric_string_and_integer_agree() {
        let resolver = resolver("UTC");
        let from_str = resolver.resolve("1654247542", TimezoneOverride::Default).unwrap();
        let from_int = resolver.resolve(1654247542i64, TimezoneOverride::Default).unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_str.timestamp(), 1654247542);
    }

    #[test]
    fn test_negative_epoch() {
        let instant = resolver("UTC").resolve("-86400", TimezoneOverride::Default).unwrap();
        assert_eq!(instant.naive_local().to_string(), "1969-12-31 00:00:00");
    }

    #[test]
    fn test_epoch_overflow_is_out_of_range() {
        let resolver = resolver("UTC");
        assert!(matches!(
            resolver.resolve("99999999999999999999999", TimezoneOverride::Default),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            resolver.resolve(i64::MAX, TimezoneOverride::Default),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_unchanged_keeps_input_zone() {
        let tokyo = ResolvedInstant::from_timestamp(1654247542, Zone::parse("Asia/Tokyo").unwrap())
            .unwrap();
        let resolved = resolver("Europe/Paris")
            .resolve(tokyo, TimezoneOverride::Unchanged)
            .unwrap();
        assert_eq!(resolved, tokyo);
    }

    #[test]
    fn test_explicit_zone_rezones() {
        let resolved = resolver("UTC")
            .resolve("2019-08-07T23:39:12+02:00", "America/New_York")
            .unwrap();
        assert_eq!(resolved.zone().name(), "America/New_York");
        assert_eq!(resolved.naive_local().to_string(), "2019-08-07 17:39:12");
    }

    #[test]
    fn test_string_offset_kept_when_unchanged() {
        let resolved = resolver("UTC")
            .resolve("2019-08-07T23:39:12+02:00", TimezoneOverride::Unchanged)
            .unwrap();
        assert_eq!(resolved.zone().name(), "+02:00");
    }

    #[test]
    fn test_free_form_string_in_target_zone() {
        let resolved = resolver("UTC")
            .resolve("2019-08-07 23:39:12", "Asia/Tokyo")
            .unwrap();
        assert_eq!(resolved.zone().name(), "Asia/Tokyo");
        assert_eq!(resolved.naive_local().to_string(), "2019-08-07 23:39:12");
    }

    #[test]
    fn test_local_value_is_localized_in_default_zone() {
        let naive = NaiveDate::from_ymd_opt(2022, 6, 3)
            .unwrap()
            .and_hms_opt(11, 12, 22)
            .unwrap();
        let resolved = resolver("Europe/Paris")
            .resolve(naive, "Asia/Tokyo")
            .unwrap();
        assert_eq!(resolved.timestamp(), 1654247542);
        assert_eq!(resolved.zone().name(), "Asia/Tokyo");
    }

    #[test]
    fn test_chrono_inputs() {
        let paris: Tz = "Europe/Paris".parse().unwrap();
        let dt = paris.with_ymd_and_hms(2022, 6, 3, 11, 12, 22).unwrap();
        let resolved = resolver("UTC").resolve(dt, TimezoneOverride::Unchanged).unwrap();
        assert_eq!(resolved.zone(), Zone::Named(paris));
        assert_eq!(resolved.timestamp(), 1654247542);
    }

    #[test]
    fn test_invalid_timezone() {
        assert_eq!(
            resolver("UTC").resolve(DateInput::Now, "Mars/Base"),
            Err(DateError::InvalidTimezone("Mars/Base".to_string()))
        );
        assert!(DateResolver::from_timezone_identifier("Mars/Base").is_err());
    }

    #[test]
    fn test_unparseable_string() {
        assert!(matches!(
            resolver("UTC").resolve("foobar", TimezoneOverride::Default),
            Err(DateError::Unparseable(_))
        ));
    }
}
