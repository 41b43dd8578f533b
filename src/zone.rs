//! Timezones and zoned instants.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::DateError;

/// A timezone: either an IANA zone or a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    /// The UTC zone.
    pub fn utc() -> Self {
        Zone::Named(Tz::UTC)
    }

    /// Parses a zone identifier.
    ///
    /// Accepts IANA identifiers (case-insensitively), `Z`, and offsets of the
    /// form `+HH`, `+HHMM` or `+HH:MM`.
    pub fn parse(identifier: &str) -> Result<Self, DateError> {
        let id = identifier.trim();
        if id.is_empty() {
            return Err(DateError::InvalidTimezone(identifier.to_string()));
        }

        if id == "Z" || id == "z" {
            return Ok(Zone::utc());
        }

        if let Some(offset) = parse_offset(id) {
            return Ok(Zone::Fixed(offset));
        }

        id.parse::<Tz>()
            .or_else(|_| Tz::from_str_insensitive(id))
            .map(Zone::Named)
            .map_err(|_| DateError::InvalidTimezone(identifier.to_string()))
    }

    /// The zone identifier: the IANA name or a `+HH:MM` offset.
    pub fn name(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Fixed(offset) => format_offset(offset.local_minus_utc(), true),
        }
    }

    /// The UTC offset in effect at the given instant.
    pub fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Named(tz) => tz.offset_from_utc_datetime(&utc.naive_utc()).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// The short zone name in effect at the given instant (`CEST`, `UTC`, ...).
    pub fn abbreviation_at(&self, utc: &DateTime<Utc>) -> String {
        match self {
            Zone::Named(tz) => utc.with_timezone(tz).format("%Z").to_string(),
            Zone::Fixed(offset) => format!("GMT{}", format_offset(offset.local_minus_utc(), true)),
        }
    }

    /// Interprets a wall-clock time in this zone.
    ///
    /// Ambiguous times resolve to the earlier instant. Times skipped by a
    /// daylight saving transition move forward by the size of the gap.
    pub fn from_local(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .or_else(|| {
                    let shifted = naive.checked_add_signed(Duration::hours(1))?;
                    tz.from_local_datetime(&shifted).earliest()
                })
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone::utc()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

/// Parses `+HH`, `+HHMM` and `+HH:MM` (and the `-` forms).
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits: String = s[1..].chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Formats an offset in seconds as `+HH:MM` (or `+HHMM` without colon).
pub(crate) fn format_offset(seconds: i32, colon: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if colon {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}{:02}", sign, hours, minutes)
    }
}

/// A concrete instant with its timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedInstant {
    utc: DateTime<Utc>,
    zone: Zone,
}

impl ResolvedInstant {
    pub fn new(utc: DateTime<Utc>, zone: Zone) -> Self {
        ResolvedInstant { utc, zone }
    }

    /// Builds an instant from epoch seconds.
    pub fn from_timestamp(seconds: i64, zone: Zone) -> Result<Self, DateError> {
        DateTime::from_timestamp(seconds, 0)
            .map(|utc| ResolvedInstant::new(utc, zone))
            .ok_or_else(|| DateError::OutOfRange(seconds.to_string()))
    }

    /// Epoch seconds.
    pub fn timestamp(&self) -> i64 {
        self.utc.timestamp()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.utc.timestamp_millis()
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The same instant viewed from another zone.
    pub fn with_zone(&self, zone: Zone) -> Self {
        ResolvedInstant {
            utc: self.utc,
            zone,
        }
    }

    /// The instant with the UTC offset of its zone.
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.utc.with_timezone(&self.zone.offset_at(&self.utc))
    }

    /// Wall-clock date and time in the instant's zone.
    pub fn naive_local(&self) -> NaiveDateTime {
        self.local().naive_local()
    }
}

impl fmt::Display for ResolvedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.local().to_rfc3339(), self.zone)
    }
}

impl From<DateTime<Tz>> for ResolvedInstant {
    fn from(dt: DateTime<Tz>) -> Self {
        ResolvedInstant::new(dt.with_timezone(&Utc), Zone::Named(dt.timezone()))
    }
}

impl From<DateTime<FixedOffset>> for ResolvedInstant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        ResolvedInstant::new(dt.with_timezone(&Utc), Zone::Fixed(*dt.offset()))
    }
}

impl From<DateTime<Utc>> for ResolvedInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        ResolvedInstant::new(dt, Zone::utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_named_zone() {
        let zone = Zone::parse("Africa/Kinshasa").unwrap();
        assert_eq!(zone, Zone::Named(Tz::Africa__Kinshasa));
        assert_eq!(zone.name(), "Africa/Kinshasa");
    }

    #[test]
    fn test_parse_offset_zone() {
        let zone = Zone::parse("+02:00").unwrap();
        assert_eq!(zone.name(), "+02:00");
        assert_eq!(Zone::parse("-0530").unwrap().name(), "-05:30");
        assert_eq!(Zone::parse("Z").unwrap(), Zone::utc());
    }

    #[test]
    fn test_parse_invalid_zone() {
        assert_eq!(
            Zone::parse("Mars/Olympus_Mons"),
            Err(DateError::InvalidTimezone("Mars/Olympus_Mons".to_string()))
        );
        assert!(Zone::parse("").is_err());
        assert!(Zone::parse("+25:00").is_err());
    }

    #[test]
    fn test_offset_follows_dst() {
        let paris = Zone::parse("Europe/Paris").unwrap();
        let summer = Utc.with_ymd_and_hms(2022, 6, 3, 9, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap();
        assert_eq!(paris.offset_at(&summer).local_minus_utc(), 7200);
        assert_eq!(paris.offset_at(&winter).local_minus_utc(), 3600);
        assert_eq!(paris.abbreviation_at(&summer), "CEST");
    }

    #[test]
    fn test_from_local_skips_dst_gap() {
        let paris = Zone::parse("Europe/Paris").unwrap();
        let gap = NaiveDate::from_ymd_opt(2022, 3, 27)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let utc = paris.from_local(&gap).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2022, 3, 27, 1, 30, 0).unwrap());
    }

    #[test]
    fn test_resolved_instant_views() {
        let instant = ResolvedInstant::from_timestamp(1654247542, Zone::parse("Asia/Tokyo").unwrap())
            .unwrap();
        assert_eq!(instant.timestamp(), 1654247542);
        assert_eq!(instant.naive_local().to_string(), "2022-06-03 18:12:22");
        assert_eq!(
            instant.to_string(),
            "2022-06-03T18:12:22+09:00[Asia/Tokyo]"
        );
        assert_eq!(instant.with_zone(Zone::utc()).naive_local().to_string(), "2022-06-03 09:12:22");
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(matches!(
            ResolvedInstant::from_timestamp(i64::MAX, Zone::utc()),
            Err(DateError::OutOfRange(_))
        ));
    }
}
