//! Tests for date resolution and zones.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use intlfmt::{
    DateError, DateInput, DateResolver, FixedClock, ResolvedInstant, TimezoneOverride, Zone,
};

const JUNE_3: i64 = 1654247542; // 2022-06-03T09:12:22Z

fn resolver(zone: &str) -> DateResolver {
    DateResolver::from_timezone_identifier(zone)
        .unwrap()
        .with_clock(Arc::new(FixedClock::from_timestamp(JUNE_3).unwrap()))
}

#[test]
fn test_missing_input_means_now() {
    let resolver = resolver("Europe/Paris");
    let instant = resolver.resolve(None::<i64>, None::<&str>).unwrap();
    assert_eq!(instant.timestamp(), JUNE_3);
    assert_eq!(instant.zone().name(), "Europe/Paris");
    assert_eq!(resolver.now().timestamp(), JUNE_3);
}

#[test]
fn test_timestamp_is_moved_to_target_zone() {
    let instant = resolver("UTC").resolve(JUNE_3, "Asia/Tokyo").unwrap();
    assert_eq!(instant.timestamp(), JUNE_3);
    assert_eq!(instant.naive_local().to_string(), "2022-06-03 18:12:22");
}

#[test]
fn test_timestamp_stays_utc_when_unchanged() {
    let instant = resolver("Asia/Tokyo")
        .resolve(JUNE_3, TimezoneOverride::Unchanged)
        .unwrap();
    assert_eq!(instant.zone(), Zone::utc());
}

#[test]
fn test_zoned_input_is_rezoned() {
    let utc = Utc.timestamp_opt(JUNE_3, 0).unwrap();
    let instant = resolver("UTC")
        .resolve(utc, Zone::parse("+05:30").unwrap())
        .unwrap();
    assert_eq!(instant.zone().name(), "+05:30");
    assert_eq!(instant.local().to_rfc3339(), "2022-06-03T14:42:22+05:30");
}

#[test]
fn test_fixed_offset_input_keeps_its_offset() {
    let offset = FixedOffset::west_opt(4 * 3600).unwrap();
    let dt = offset.with_ymd_and_hms(2022, 6, 3, 5, 12, 22).unwrap();
    let instant = resolver("UTC").resolve(dt, TimezoneOverride::Unchanged).unwrap();
    assert_eq!(instant.zone().name(), "-04:00");
    assert_eq!(instant.timestamp(), JUNE_3);
}

#[test]
fn test_local_input_uses_default_zone() {
    let naive = NaiveDate::from_ymd_opt(2022, 6, 3)
        .unwrap()
        .and_hms_opt(18, 12, 22)
        .unwrap();
    let instant = resolver("Asia/Tokyo").resolve(naive, TimezoneOverride::Default).unwrap();
    assert_eq!(instant.timestamp(), JUNE_3);
}

#[test]
fn test_keywords_follow_default_zone() {
    let instant = resolver("Europe/Paris")
        .resolve("tomorrow", TimezoneOverride::Default)
        .unwrap();
    assert_eq!(instant.zone().name(), "Europe/Paris");
    assert_eq!(instant.naive_local().to_string(), "2022-06-04 00:00:00");
}

#[test]
fn test_resolution_errors() {
    let resolver = resolver("UTC");
    assert!(matches!(
        resolver.resolve("next blue moon", TimezoneOverride::Default),
        Err(DateError::Unparseable(_))
    ));
    assert!(matches!(
        resolver.resolve(DateInput::Now, "Nowhere/Land"),
        Err(DateError::InvalidTimezone(_))
    ));
    assert!(matches!(
        DateResolver::from_timezone_identifier("America/New_York")
            .unwrap()
            .resolve(NaiveDateTime::MAX, TimezoneOverride::Default),
        Err(DateError::OutOfRange(_))
    ));
    assert!(matches!(
        FixedClock::from_timestamp(i64::MIN),
        Err(DateError::OutOfRange(_))
    ));
}

#[test]
fn test_zone_parsing() {
    assert_eq!(Zone::parse("Z").unwrap(), Zone::utc());
    assert_eq!(Zone::parse("europe/paris").unwrap().name(), "Europe/Paris");
    assert_eq!(Zone::parse("+0200").unwrap().name(), "+02:00");
    assert_eq!(Zone::parse("-03").unwrap().name(), "-03:00");
    assert!(Zone::parse("+25:00").is_err());
    assert!(Zone::parse("").is_err());
    assert_eq!(Zone::default(), Zone::utc());
}

#[test]
fn test_resolved_instant_accessors() {
    let paris = Zone::parse("Europe/Paris").unwrap();
    let instant = ResolvedInstant::from_timestamp(JUNE_3, paris).unwrap();
    assert_eq!(instant.timestamp_millis(), JUNE_3 * 1000);
    assert_eq!(instant.utc().timestamp(), JUNE_3);
    assert_eq!(instant.naive_local().to_string(), "2022-06-03 11:12:22");
    assert_eq!(instant.with_zone(Zone::utc()).naive_local().to_string(), "2022-06-03 09:12:22");
}
