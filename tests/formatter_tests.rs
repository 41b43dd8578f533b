//! End-to-end tests of the `Formatter` facade on the built-in engine.

use std::sync::Arc;

use intlfmt::{
    BuiltinBackend, BuiltinCatalog, Clock, DateFactory, DateFormat, DateFormatOptions,
    DateFormatterConfig, DateResolver, FixedClock, FixedLocale, FormatError, Formatter,
    NumberFactory, NumberFormatOptions, ResolvedInstant, StyleFormat, TimeFormat,
    TimezoneOverride, Zone,
};
use intlfmt::config::NumberFormatterConfig;

const JUNE_3: i64 = 1654247542; // 2022-06-03T09:12:22Z

fn formatter() -> Formatter {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::from_timestamp(JUNE_3).unwrap());
    let backend = Arc::new(BuiltinBackend::with_clock(clock.clone()));
    let locales = Arc::new(FixedLocale::new("en_US"));
    Formatter::new(
        DateFactory::new(
            DateFormatterConfig::new(DateFormat::Medium, TimeFormat::Medium),
            backend.clone(),
            locales.clone(),
        ),
        NumberFactory::new(
            NumberFormatterConfig::new(StyleFormat::Decimal),
            backend,
            locales,
        ),
        DateResolver::new(Zone::utc(), clock),
        Arc::new(BuiltinCatalog::new()),
    )
}

#[test]
fn test_format_date_time_with_defaults() {
    let f = formatter();
    let options = DateFormatOptions::new();
    assert_eq!(
        f.format_date_time(JUNE_3, &options).unwrap(),
        "Jun 3, 2022, 9:12:22 AM"
    );
    assert_eq!(f.format_date(JUNE_3, &options).unwrap(), "Jun 3, 2022");
    assert_eq!(f.format_time(JUNE_3, &options).unwrap(), "9:12:22 AM");
}

#[test]
fn test_format_date_accepts_strings() {
    let f = formatter();
    let options = DateFormatOptions::new();
    assert_eq!(f.format_date("1654247542", &options).unwrap(), "Jun 3, 2022");
    assert_eq!(f.format_date("now", &options).unwrap(), "Jun 3, 2022");
}

#[test]
fn test_format_time_in_another_zone() {
    let f = formatter();
    let options = DateFormatOptions::new()
        .with_timezone("Europe/Paris")
        .with_time_format("short");
    assert_eq!(f.format_time(JUNE_3, &options).unwrap(), "11:12 AM");
}

#[test]
fn test_unchanged_timezone_uses_input_zone() {
    let f = formatter();
    let tokyo = ResolvedInstant::from_timestamp(JUNE_3, Zone::parse("Asia/Tokyo").unwrap())
        .unwrap();
    let options = DateFormatOptions::new()
        .with_timezone(TimezoneOverride::Unchanged)
        .with_time_format("short");
    assert_eq!(f.format_time(tokyo, &options).unwrap(), "6:12 PM");
}

#[test]
fn test_format_date_in_french() {
    let f = formatter();
    let options = DateFormatOptions::new()
        .with_locale("fr_FR")
        .with_date_format("full");
    assert_eq!(f.format_date(JUNE_3, &options).unwrap(), "vendredi 3 juin 2022");
}

#[test]
fn test_format_date_with_pattern() {
    let f = formatter();
    let options = DateFormatOptions::new().with_pattern("yyyy-MM-dd");
    assert_eq!(f.format_date_time(JUNE_3, &options).unwrap(), "2022-06-03");
}

#[test]
fn test_relative_date() {
    let f = formatter();
    let options = DateFormatOptions::new().with_date_format("relative_full");
    assert_eq!(f.format_date(JUNE_3 - 3600, &options).unwrap(), "today");
}

#[test]
fn test_date_errors() {
    let f = formatter();
    assert!(f
        .format_date("foobar", &DateFormatOptions::new())
        .unwrap_err()
        .is_invalid_date());
    assert!(f
        .format_date(JUNE_3, &DateFormatOptions::new().with_timezone("Mars/Base"))
        .unwrap_err()
        .is_invalid_date());
    assert!(f
        .format_date(JUNE_3, &DateFormatOptions::new().with_date_format("huge"))
        .unwrap_err()
        .is_unknown_option());
    assert!(f
        .format_date(JUNE_3, &DateFormatOptions::new().with_calendar("lunar"))
        .unwrap_err()
        .is_unknown_option());
}

#[test]
fn test_date_formatters_are_cached() {
    let f = formatter();
    let options = DateFormatOptions::new();
    f.format_date(JUNE_3, &options).unwrap();
    f.format_date(JUNE_3 + 60, &options).unwrap();
    assert_eq!(f.date_factory().cached(), 1);
    f.format_time(JUNE_3, &options).unwrap();
    assert_eq!(f.date_factory().cached(), 2);
}

#[test]
fn test_format_number() {
    let f = formatter();
    assert_eq!(f.format_number(1234.5, &NumberFormatOptions::new()).unwrap(), "1,234.5");
    assert_eq!(
        f.format_number(1234.5, &NumberFormatOptions::new().with_locale("de_DE"))
            .unwrap(),
        "1.234,5"
    );
    let two_digits = NumberFormatOptions::new().with_attribute("fraction_digit", 2i64);
    assert_eq!(f.format_number(3.14159, &two_digits).unwrap(), "3.14");
}

#[test]
fn test_format_number_styles_and_types() {
    let f = formatter();
    let percent = NumberFormatOptions::new().with_style("percent");
    assert_eq!(f.format_number(0.256, &percent).unwrap(), "26%");
    let spellout = NumberFormatOptions::new().with_style("spellout");
    assert_eq!(f.format_number(42, &spellout).unwrap(), "forty-two");
    let int32 = NumberFormatOptions::new().with_type("int32");
    assert_eq!(f.format_number(3.7, &int32).unwrap(), "3");
}

#[test]
fn test_spellout_outside_english_uses_digits() {
    let f = formatter();
    let fr = NumberFormatOptions::new().with_style("spellout").with_locale("fr_FR");
    assert_eq!(f.format_number(42, &fr).unwrap(), "42");
    let de = NumberFormatOptions::new().with_style("spellout").with_locale("de");
    assert_eq!(f.format_number(1234, &de).unwrap(), "1.234");
}

#[test]
fn test_format_number_errors() {
    let f = formatter();
    assert!(f
        .format_number(1, &NumberFormatOptions::new().with_style("roman"))
        .unwrap_err()
        .is_unknown_option());
    assert!(f
        .format_number(1, &NumberFormatOptions::new().with_type("float"))
        .unwrap_err()
        .is_unknown_option());
    assert!(f
        .format_number(1, &NumberFormatOptions::new().with_attribute("foobar", 1i64))
        .unwrap_err()
        .is_unknown_option());
    assert!(matches!(
        f.format_number(1, &NumberFormatOptions::new().with_attribute("grouping_used", "yes")),
        Err(FormatError::InvalidAttributeValue { .. })
    ));
    assert!(matches!(
        f.format_number(1, &NumberFormatOptions::new().with_type("currency")),
        Err(FormatError::NativeFormatter { .. })
    ));
}

#[test]
fn test_format_currency() {
    let f = formatter();
    assert_eq!(
        f.format_currency(9.5, "JPY", &NumberFormatOptions::new()).unwrap(),
        "¥10"
    );
    assert_eq!(
        f.format_currency(1234.5, "EUR", &NumberFormatOptions::new().with_locale("fr_FR"))
            .unwrap(),
        "1\u{202f}234,50\u{a0}€"
    );
    // The style option does not apply to currencies.
    let spellout = NumberFormatOptions::new().with_style("spellout");
    assert_eq!(f.format_currency(1.0, "USD", &spellout).unwrap(), "$1.00");
    assert!(matches!(
        f.format_currency(1.0, "dollars", &NumberFormatOptions::new()),
        Err(FormatError::NativeFormatter { .. })
    ));
}

#[test]
fn test_display_names() {
    let f = formatter();
    assert_eq!(f.country_name(Some("US"), Some("fr")), "États-Unis");
    assert_eq!(f.country_name(Some("CH"), Some("fr_CA")), "Suisse");
    assert_eq!(f.currency_name(Some("JPY"), None), "Japanese Yen");
    assert_eq!(f.currency_name(Some("JPY"), Some("fr_FR")), "yen japonais");
    assert_eq!(f.currency_symbol(Some("EUR"), None), "€");
    assert_eq!(f.language_name(Some("fr"), None), "French");
    assert_eq!(
        f.timezone_name(Some("Europe/Paris"), None),
        "Central European Time (Paris)"
    );
}

#[test]
fn test_display_names_fall_back() {
    let f = formatter();
    assert_eq!(f.country_name(None, None), "");
    assert_eq!(f.currency_name(None, Some("fr")), "");
    assert_eq!(f.country_name(Some("UNKNOWN"), None), "UNKNOWN");
    assert_eq!(f.currency_name(Some("UNKNOWN"), None), "UNKNOWN");
    assert_eq!(f.currency_symbol(Some("XYZ"), None), "XYZ");
    assert_eq!(f.language_name(Some("xx"), None), "xx");
    assert_eq!(f.locale_name(Some("xx_YY"), None), "xx_YY");
    assert_eq!(f.timezone_name(Some("Mars/Base"), None), "Mars/Base");
}

#[test]
fn test_country_timezones() {
    let f = formatter();
    assert_eq!(f.country_timezones("FR"), vec!["Europe/Paris".to_string()]);
    assert!(f.country_timezones("US").contains(&"America/New_York".to_string()));
    assert!(f.country_timezones("UNKNOWN").is_empty());
}
