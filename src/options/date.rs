//! Date formatter option domains.

use crate::native::constants::date;

option_enum! {
    /// Date style of a date formatter.
    pub enum DateFormat in "date format" {
        None = ("none", date::NONE),
        Short = ("short", date::SHORT),
        Medium = ("medium", date::MEDIUM),
        Long = ("long", date::LONG),
        Full = ("full", date::FULL),
        /// Like `Short`, but renders today/yesterday/tomorrow as words.
        RelativeShort = ("relative_short", date::RELATIVE_SHORT),
        RelativeMedium = ("relative_medium", date::RELATIVE_MEDIUM),
        RelativeLong = ("relative_long", date::RELATIVE_LONG),
        RelativeFull = ("relative_full", date::RELATIVE_FULL),
    }
}

option_enum! {
    /// Time style of a date formatter.
    pub enum TimeFormat in "time format" {
        None = ("none", date::NONE),
        Short = ("short", date::SHORT),
        Medium = ("medium", date::MEDIUM),
        Long = ("long", date::LONG),
        Full = ("full", date::FULL),
    }
}

option_enum! {
    /// Calendar used by a date formatter.
    pub enum CalendarFormat in "calendar name" {
        Gregorian = ("gregorian", date::GREGORIAN),
        Traditional = ("traditional", date::TRADITIONAL),
    }
}

impl Default for CalendarFormat {
    fn default() -> Self {
        CalendarFormat::Gregorian
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionEnum;

    #[test]
    fn test_date_format_constants() {
        assert_eq!(DateFormat::from_native(date::NONE).unwrap().name(), "none");
        assert_eq!(DateFormat::from_name("full").unwrap().to_native(), date::FULL);
        assert_eq!(DateFormat::Full, "full".parse().unwrap());
    }

    #[test]
    fn test_time_and_date_share_plain_styles() {
        for time in TimeFormat::cases() {
            let date = DateFormat::from_name(time.name()).unwrap();
            assert_eq!(date.to_native(), time.to_native());
        }
    }

    #[test]
    fn test_time_format_has_no_relative_styles() {
        assert!(TimeFormat::from_name("relative_full").is_err());
    }

    #[test]
    fn test_display_uses_symbolic_name() {
        assert_eq!(CalendarFormat::Traditional.to_string(), "traditional");
        assert_eq!(CalendarFormat::default(), CalendarFormat::Gregorian);
    }
}
