//! Free-form date/time string parsing.
//!
//! Recognizes the common machine formats (RFC 3339, RFC 2822, ISO-like
//! `YYYY-MM-DD HH:MM:SS`), day-first and month-first numeric dates, month
//! names, bare times, `@<epoch>`, day keywords (`today`, `tomorrow`, ...) and
//! relative offsets such as `+1 day` or `3 hours ago`.

use chrono::{
    DateTime, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};

use crate::error::DateError;
use crate::zone::{ResolvedInstant, Zone};

/// Result of parsing a free-form string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Parsed {
    pub instant: ResolvedInstant,
    /// True if the string named its own zone or offset.
    pub explicit_zone: bool,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%a, %d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
    "%A %d %B %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p", "%I%p"];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parses `input` relative to `now`, reading wall-clock values in `zone`.
pub(crate) fn parse(input: &str, zone: Zone, now: DateTime<Utc>) -> Result<Parsed, DateError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DateError::Unparseable(input.to_string()));
    }

    let unparseable = || DateError::Unparseable(input.to_string());
    let lower = text.to_lowercase();

    if let Some(digits) = lower.strip_prefix('@') {
        if !super::is_epoch_literal(digits) {
            return Err(unparseable());
        }
        let seconds = digits
            .parse::<i64>()
            .map_err(|_| DateError::OutOfRange(input.to_string()))?;
        return Ok(Parsed {
            instant: ResolvedInstant::from_timestamp(seconds, Zone::utc())?,
            explicit_zone: true,
        });
    }

    let today = ResolvedInstant::new(now, zone).naive_local().date();
    if let Some(naive) = keyword(&lower, today) {
        return localize(&naive, zone, false).ok_or_else(unparseable);
    }

    if let Some(naive) = relative(&lower, ResolvedInstant::new(now, zone).naive_local()) {
        return localize(&naive, zone, false).ok_or_else(unparseable);
    }

    if let Some(dt) = with_offset(text) {
        trace!("parsed {:?} with an explicit offset", text);
        return Ok(Parsed {
            instant: dt.into(),
            explicit_zone: true,
        });
    }

    if let Some(naive) = naive_datetime(text, today) {
        return localize(&naive, zone, false).ok_or_else(unparseable);
    }

    // A trailing zone name: "2019-08-07 23:39:12 Europe/Paris", "... UTC".
    if let Some((head, tail)) = text.rsplit_once(' ') {
        if let Ok(named) = Zone::parse(tail) {
            if let Some(naive) = naive_datetime(head.trim_end(), today) {
                return localize(&naive, named, true).ok_or_else(unparseable);
            }
        }
    }

    debug!("unable to parse {:?} as a date", input);
    Err(unparseable())
}

fn localize(naive: &NaiveDateTime, zone: Zone, explicit_zone: bool) -> Option<Parsed> {
    zone.from_local(naive).map(|utc| Parsed {
        instant: ResolvedInstant::new(utc, zone),
        explicit_zone,
    })
}

fn keyword(lower: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    let midnight = |date: NaiveDate| date.and_time(NaiveTime::MIN);
    match lower {
        "today" | "midnight" => Some(midnight(today)),
        "noon" => today.and_hms_opt(12, 0, 0),
        "tomorrow" => today.succ_opt().map(midnight),
        "yesterday" => today.pred_opt().map(midnight),
        _ => None,
    }
}

/// Parses `(<signed number> <unit>)+ [ago]` and applies it to `base`.
fn relative(lower: &str, base: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut tokens: Vec<&str> = lower.split_whitespace().collect();
    let ago = tokens.last() == Some(&"ago");
    if ago {
        tokens.pop();
    }
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return None;
    }

    let mut result = base;
    for pair in tokens.chunks(2) {
        let amount: i64 = pair[0].strip_prefix('+').unwrap_or(pair[0]).parse().ok()?;
        let amount = if ago { -amount } else { amount };
        let unit = pair[1].strip_suffix('s').unwrap_or(pair[1]);
        result = match unit {
            "sec" | "second" => result.checked_add_signed(Duration::try_seconds(amount)?)?,
            "min" | "minute" => result.checked_add_signed(Duration::try_minutes(amount)?)?,
            "hour" => result.checked_add_signed(Duration::try_hours(amount)?)?,
            "day" => result.checked_add_signed(Duration::try_days(amount)?)?,
            "week" => result.checked_add_signed(Duration::try_weeks(amount)?)?,
            "fortnight" => result.checked_add_signed(Duration::try_weeks(amount.checked_mul(2)?)?)?,
            "month" => add_months(result, amount)?,
            "year" => add_months(result, amount.checked_mul(12)?)?,
            _ => return None,
        };
    }
    Some(result)
}

fn add_months(base: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        base.checked_add_months(months)
    } else {
        base.checked_sub_months(months)
    }
}

fn with_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(text, format).ok())
        })
}

fn naive_datetime(text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
                .map(|time| today.and_time(time))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 6, 3, 9, 12, 22).unwrap()
    }

    fn local(input: &str, zone: &str) -> String {
        let parsed = parse(input, Zone::parse(zone).unwrap(), now()).unwrap();
        parsed.instant.naive_local().to_string()
    }

    #[test]
    fn test_iso_datetime() {
        assert_eq!(local("2019-08-07 23:39:12", "UTC"), "2019-08-07 23:39:12");
        assert_eq!(local("2019-08-07T23:39", "UTC"), "2019-08-07 23:39:00");
        assert_eq!(local("2019-08-07", "UTC"), "2019-08-07 00:00:00");
    }

    #[test]
    fn test_wall_clock_is_read_in_zone() {
        let parsed = parse("2019-08-07 23:39:12", Zone::parse("Asia/Tokyo").unwrap(), now()).unwrap();
        assert_eq!(parsed.instant.timestamp(), 1565188752);
        assert!(!parsed.explicit_zone);
    }

    #[test]
    fn test_explicit_offset() {
        let parsed = parse("2019-08-07T23:39:12+02:00", Zone::utc(), now()).unwrap();
        assert!(parsed.explicit_zone);
        assert_eq!(parsed.instant.zone().name(), "+02:00");
        assert_eq!(parsed.instant.naive_local().to_string(), "2019-08-07 23:39:12");
    }

    #[test]
    fn test_trailing_zone_name() {
        let parsed = parse("2019-08-07 23:39:12 Europe/Paris", Zone::utc(), now()).unwrap();
        assert!(parsed.explicit_zone);
        assert_eq!(parsed.instant.zone().name(), "Europe/Paris");
        assert_eq!(parsed.instant.naive_local().to_string(), "2019-08-07 23:39:12");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(local("June 3, 2022", "UTC"), "2022-06-03 00:00:00");
        assert_eq!(local("3 June 2022 10:30", "UTC"), "2022-06-03 10:30:00");
        assert_eq!(local("Jun 3 2022", "UTC"), "2022-06-03 00:00:00");
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(local("08/07/2019", "UTC"), "2019-08-07 00:00:00");
        assert_eq!(local("07.08.2019 12:00", "UTC"), "2019-08-07 12:00:00");
        assert_eq!(local("2019/08/07", "UTC"), "2019-08-07 00:00:00");
    }

    #[test]
    fn test_bare_time_uses_today() {
        assert_eq!(local("14:30", "UTC"), "2022-06-03 14:30:00");
        assert_eq!(local("2:30 pm", "UTC"), "2022-06-03 14:30:00");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(local("today", "UTC"), "2022-06-03 00:00:00");
        assert_eq!(local("Tomorrow", "UTC"), "2022-06-04 00:00:00");
        assert_eq!(local("yesterday", "UTC"), "2022-06-02 00:00:00");
        assert_eq!(local("noon", "UTC"), "2022-06-03 12:00:00");
    }

    #[test]
    fn test_relative_offsets() {
        assert_eq!(local("+1 day", "UTC"), "2022-06-04 09:12:22");
        assert_eq!(local("-2 weeks", "UTC"), "2022-05-20 09:12:22");
        assert_eq!(local("3 hours ago", "UTC"), "2022-06-03 06:12:22");
        assert_eq!(local("1 month 2 days", "UTC"), "2022-07-05 09:12:22");
        assert_eq!(local("1 year ago", "UTC"), "2021-06-03 09:12:22");
    }

    #[test]
    fn test_at_epoch() {
        let parsed = parse("@1654247542", Zone::parse("Europe/Paris").unwrap(), now()).unwrap();
        assert_eq!(parsed.instant.timestamp(), 1654247542);
        assert_eq!(parsed.instant.zone(), Zone::utc());

        assert_eq!(
            parse("@tomorrow", Zone::utc(), now()),
            Err(DateError::Unparseable("@tomorrow".to_string()))
        );
        assert_eq!(
            parse("@", Zone::utc(), now()),
            Err(DateError::Unparseable("@".to_string()))
        );
        assert_eq!(
            parse("@99999999999999999999", Zone::utc(), now()),
            Err(DateError::OutOfRange("@99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_garbage_fails() {
        assert_eq!(
            parse("foobar", Zone::utc(), now()),
            Err(DateError::Unparseable("foobar".to_string()))
        );
        assert!(parse("   ", Zone::utc(), now()).is_err());
        assert!(parse("2019-13-45", Zone::utc(), now()).is_err());
    }
}
