//! Date and time rendering.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::ast::{DateItem, DatePattern};
use crate::error::FormatError;
use crate::locale::LocaleData;
use crate::native::constants::date;
use crate::native::NativeDateFormatter;
use crate::parser::parse_date_pattern;
use crate::resolver::Clock;
use crate::zone::{format_offset, ResolvedInstant, Zone};

/// Pattern used when both the date and the time style are `none`.
const NO_STYLE_PATTERN: &str = "yyyyMMdd hh:mm a";

/// Time part and glue kept aside for relative styles.
#[derive(Debug, Clone)]
struct Relative {
    time: Option<DatePattern>,
    glue: &'static str,
}

/// A date formatter driven by the built-in locale data.
pub(crate) struct BuiltinDateFormatter {
    data: &'static LocaleData,
    zone: Zone,
    pattern: String,
    compiled: DatePattern,
    relative: Option<Relative>,
    clock: Arc<dyn Clock>,
}

impl BuiltinDateFormatter {
    pub(crate) fn new(
        locale: &str,
        date_type: i32,
        time_type: i32,
        zone: Zone,
        calendar: i32,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, FormatError> {
        let (date_style, relative) = match date_type {
            date::NONE => (None, false),
            date::FULL..=date::SHORT => (Some(date_type), false),
            date::RELATIVE_FULL..=date::RELATIVE_SHORT => (Some(date_type - date::RELATIVE), true),
            _ => {
                return Err(FormatError::UnsupportedConstant {
                    domain: "date format",
                    value: date_type,
                })
            }
        };
        let time_style = match time_type {
            date::NONE => None,
            date::FULL..=date::SHORT => Some(time_type),
            _ => {
                return Err(FormatError::UnsupportedConstant {
                    domain: "time format",
                    value: time_type,
                })
            }
        };
        // Only the gregorian calendar is built in; traditional maps onto it.
        if calendar != date::GREGORIAN && calendar != date::TRADITIONAL {
            return Err(FormatError::UnsupportedConstant {
                domain: "calendar",
                value: calendar,
            });
        }

        let data = LocaleData::for_locale(locale);
        let date_pattern = date_style.map(|style| data.date_patterns[style as usize]);
        let time_pattern = time_style.map(|style| data.time_patterns[style as usize]);
        let glue = match date_style {
            Some(style) if style <= date::LONG => data.datetime_glue_long,
            _ => data.datetime_glue_short,
        };

        let pattern = match (date_pattern, time_pattern) {
            (Some(d), Some(t)) => glue.replace("{1}", d).replace("{0}", t),
            (Some(d), None) => d.to_string(),
            (None, Some(t)) => t.to_string(),
            (None, None) => NO_STYLE_PATTERN.to_string(),
        };
        let compiled = parse_date_pattern(&pattern)?;
        let relative = if relative {
            Some(Relative {
                time: time_pattern.map(parse_date_pattern).transpose()?,
                glue,
            })
        } else {
            None
        };

        Ok(BuiltinDateFormatter {
            data,
            zone,
            pattern,
            compiled,
            relative,
            clock,
        })
    }

    /// The word for yesterday, today or tomorrow, if `instant` falls on one.
    fn relative_day(&self, instant: &ResolvedInstant) -> Option<&'static str> {
        let today = ResolvedInstant::new(self.clock.now(), self.zone)
            .naive_local()
            .date();
        let days = (instant.naive_local().date() - today).num_days();
        match days {
            -1..=1 => Some(self.data.relative_days[(days + 1) as usize]),
            _ => None,
        }
    }
}

impl NativeDateFormatter for BuiltinDateFormatter {
    fn set_pattern(&mut self, pattern: &str) -> Result<(), FormatError> {
        self.compiled = parse_date_pattern(pattern)?;
        self.pattern = pattern.to_string();
        self.relative = None;
        Ok(())
    }

    fn pattern(&self) -> String {
        self.pattern.clone()
    }

    fn format(&self, instant: &ResolvedInstant) -> Option<String> {
        let instant = instant.with_zone(self.zone);

        if let Some(relative) = &self.relative {
            if let Some(day) = self.relative_day(&instant) {
                return Some(match &relative.time {
                    Some(time) => apply_glue(relative.glue, day, &render(time, &instant, self.data)),
                    None => day.to_string(),
                });
            }
        }

        Some(render(&self.compiled, &instant, self.data))
    }
}

impl fmt::Debug for BuiltinDateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDateFormatter")
            .field("language", &self.data.language)
            .field("zone", &self.zone)
            .field("pattern", &self.pattern)
            .field("relative", &self.relative.is_some())
            .finish()
    }
}

/// Substitutes `{1}` (date) and `{0}` (time) in a glue pattern, unquoting
/// its literal text.
fn apply_glue(glue: &str, date: &str, time: &str) -> String {
    let mut out = String::new();
    let mut chars = glue.chars().peekable();
    let mut quoted = false;
    while let Some(ch) = chars.next() {
        match ch {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                out.push('\'');
            }
            '\'' => quoted = !quoted,
            '{' if !quoted => {
                let index: String = chars.by_ref().take_while(|c| *c != '}').collect();
                match index.as_str() {
                    "0" => out.push_str(time),
                    "1" => out.push_str(date),
                    _ => {}
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Renders a compiled pattern for an instant in its own zone.
pub(crate) fn render(pattern: &DatePattern, instant: &ResolvedInstant, data: &LocaleData) -> String {
    let local = instant.local();
    let mut out = String::new();
    for item in pattern.items() {
        match item {
            DateItem::Literal(text) => out.push_str(text),
            DateItem::Field { symbol, width } => {
                out.push_str(&field(*symbol, *width, &local, instant, data))
            }
        }
    }
    out
}

fn pad(value: i64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

fn narrow(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

fn field(
    symbol: char,
    width: usize,
    local: &DateTime<FixedOffset>,
    instant: &ResolvedInstant,
    data: &LocaleData,
) -> String {
    let month0 = local.month0() as usize;
    let weekday = local.weekday().num_days_from_sunday() as usize;

    match symbol {
        'G' => {
            let era = data.era_names[usize::from(local.year() > 0)];
            if width == 5 {
                narrow(era)
            } else {
                era.to_string()
            }
        }
        'y' => {
            let year = i64::from(if local.year() > 0 {
                local.year()
            } else {
                1 - local.year()
            });
            if width == 2 {
                pad(year % 100, 2)
            } else {
                pad(year, width)
            }
        }
        'Y' => {
            let year = i64::from(local.iso_week().year());
            if width == 2 {
                pad(year % 100, 2)
            } else {
                pad(year, width)
            }
        }
        'u' => pad(local.year().into(), width),
        'Q' | 'q' => {
            let quarter = month0 / 3;
            match width {
                1 | 2 => pad(quarter as i64 + 1, width),
                3 => format!("Q{}", quarter + 1),
                _ => data.quarter_names[quarter].to_string(),
            }
        }
        'M' | 'L' => match width {
            1 | 2 => pad(month0 as i64 + 1, width),
            3 => data.month_names_short[month0].to_string(),
            4 => data.month_names_full[month0].to_string(),
            _ => narrow(data.month_names_full[month0]),
        },
        'w' => pad(local.iso_week().week().into(), width),
        'd' => pad(local.day().into(), width),
        'D' => pad(local.ordinal().into(), width),
        'e' | 'c' if width <= 2 => {
            let day = (weekday + 7 - data.first_weekday as usize) % 7 + 1;
            pad(day as i64, width)
        }
        'E' | 'e' | 'c' => match width {
            4 => data.day_names_full[weekday].to_string(),
            5 => narrow(data.day_names_full[weekday]),
            _ => data.day_names_short[weekday].to_string(),
        },
        'a' => {
            if local.hour() < 12 {
                data.am_string.to_string()
            } else {
                data.pm_string.to_string()
            }
        }
        'h' => pad(i64::from(local.hour12().1), width),
        'H' => pad(local.hour().into(), width),
        'k' => pad(if local.hour() == 0 { 24 } else { local.hour().into() }, width),
        'K' => pad(i64::from(local.hour() % 12), width),
        'm' => pad(local.minute().into(), width),
        's' => pad(local.second().into(), width),
        'S' => {
            let nanos = format!("{:09}", local.nanosecond() % 1_000_000_000);
            if width <= 9 {
                nanos[..width].to_string()
            } else {
                format!("{nanos:0<width$}")
            }
        }
        'z' | 'v' if width < 4 => short_zone_name(instant),
        'z' => gmt_long(offset_seconds(local)),
        'v' | 'V' => instant.zone().name(),
        'Z' => match width {
            1..=3 => format_offset(offset_seconds(local), false),
            4 => gmt_long(offset_seconds(local)),
            _ => iso_offset(offset_seconds(local), 3, true),
        },
        'X' => iso_offset(offset_seconds(local), width, true),
        'x' => iso_offset(offset_seconds(local), width, false),
        _ => String::new(),
    }
}

fn offset_seconds(local: &DateTime<FixedOffset>) -> i32 {
    local.offset().local_minus_utc()
}

/// `GMT` or `GMT+02:00`.
fn gmt_long(seconds: i32) -> String {
    if seconds == 0 {
        "GMT".to_string()
    } else {
        format!("GMT{}", format_offset(seconds, true))
    }
}

/// `GMT`, `GMT+2` or `GMT+5:30`.
fn gmt_short(seconds: i32) -> String {
    if seconds == 0 {
        return "GMT".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = (seconds.abs() % 3600) / 60;
    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

/// ISO 8601 offsets for the `X` and `x` fields.
fn iso_offset(seconds: i32, width: usize, zulu: bool) -> String {
    if seconds == 0 && zulu {
        return "Z".to_string();
    }
    match width {
        1 if seconds % 3600 == 0 => format_offset(seconds, false)[..3].to_string(),
        1 | 2 | 4 => format_offset(seconds, false),
        _ => format_offset(seconds, true),
    }
}

fn short_zone_name(instant: &ResolvedInstant) -> String {
    let seconds = instant.local().offset().local_minus_utc();
    match instant.zone() {
        Zone::Named(_) => {
            let abbreviation = instant.zone().abbreviation_at(&instant.utc());
            if abbreviation.starts_with(['+', '-']) {
                gmt_short(seconds)
            } else {
                abbreviation
            }
        }
        Zone::Fixed(_) => gmt_short(seconds),
    }
}
