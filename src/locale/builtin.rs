//! Built-in locale data.

/// Locale settings used by the built-in formatting engine.
#[derive(Debug, Clone)]
pub struct LocaleData {
    pub language: &'static str,
    pub decimal_separator: &'static str,
    pub grouping_separator: &'static str,
    pub percent_sign: &'static str,
    pub permill_sign: &'static str,
    pub minus_sign: &'static str,
    pub plus_sign: &'static str,
    pub exponential: &'static str,
    pub infinity: &'static str,
    pub nan: &'static str,
    pub decimal_pattern: &'static str,
    pub percent_pattern: &'static str,
    pub currency_pattern: &'static str,
    pub scientific_pattern: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub era_names: [&'static str; 2],
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    /// Date patterns for full, long, medium and short styles.
    pub date_patterns: [&'static str; 4],
    /// Time patterns for full, long, medium and short styles.
    pub time_patterns: [&'static str; 4],
    /// Glue for full/long dates; `{1}` is the date, `{0}` the time.
    pub datetime_glue_long: &'static str,
    /// Glue for medium/short dates.
    pub datetime_glue_short: &'static str,
    /// Yesterday, today, tomorrow.
    pub relative_days: [&'static str; 3],
    pub quarter_names: [&'static str; 4],
    /// First day of the week, 0 for Sunday and 1 for Monday.
    pub first_weekday: u32,
    pub default_currency: &'static str,
}

static EN: LocaleData = LocaleData {
    language: "en",
    decimal_separator: ".",
    grouping_separator: ",",
    percent_sign: "%",
    permill_sign: "‰",
    minus_sign: "-",
    plus_sign: "+",
    exponential: "E",
    infinity: "∞",
    nan: "NaN",
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0%",
    currency_pattern: "¤#,##0.00",
    scientific_pattern: "0.######E0",
    am_string: "AM",
    pm_string: "PM",
    era_names: ["BC", "AD"],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    month_names_full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_names_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    date_patterns: ["EEEE, MMMM d, y", "MMMM d, y", "MMM d, y", "M/d/yy"],
    time_patterns: ["h:mm:ss a zzzz", "h:mm:ss a z", "h:mm:ss a", "h:mm a"],
    datetime_glue_long: "{1} 'at' {0}",
    datetime_glue_short: "{1}, {0}",
    relative_days: ["yesterday", "today", "tomorrow"],
    quarter_names: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
    first_weekday: 0,
    default_currency: "USD",
};

static FR: LocaleData = LocaleData {
    language: "fr",
    decimal_separator: ",",
    grouping_separator: "\u{202f}",
    percent_sign: "%",
    permill_sign: "‰",
    minus_sign: "-",
    plus_sign: "+",
    exponential: "E",
    infinity: "∞",
    nan: "NaN",
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0\u{a0}%",
    currency_pattern: "#,##0.00\u{a0}¤",
    scientific_pattern: "0.######E0",
    am_string: "AM",
    pm_string: "PM",
    era_names: ["av. J.-C.", "ap. J.-C."],
    month_names_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    month_names_full: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    day_names_full: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    date_patterns: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    time_patterns: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
    datetime_glue_long: "{1} 'à' {0}",
    datetime_glue_short: "{1} {0}",
    relative_days: ["hier", "aujourd’hui", "demain"],
    quarter_names: ["1er trimestre", "2e trimestre", "3e trimestre", "4e trimestre"],
    first_weekday: 1,
    default_currency: "EUR",
};

static DE: LocaleData = LocaleData {
    language: "de",
    decimal_separator: ",",
    grouping_separator: ".",
    percent_sign: "%",
    permill_sign: "‰",
    minus_sign: "-",
    plus_sign: "+",
    exponential: "E",
    infinity: "∞",
    nan: "NaN",
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0\u{a0}%",
    currency_pattern: "#,##0.00\u{a0}¤",
    scientific_pattern: "0.######E0",
    am_string: "AM",
    pm_string: "PM",
    era_names: ["v. Chr.", "n. Chr."],
    month_names_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    month_names_full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    day_names_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    day_names_full: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    date_patterns: ["EEEE, d. MMMM y", "d. MMMM y", "dd.MM.y", "dd.MM.yy"],
    time_patterns: ["HH:mm:ss zzzz", "HH:mm:ss z", "HH:mm:ss", "HH:mm"],
    datetime_glue_long: "{1} 'um' {0}",
    datetime_glue_short: "{1}, {0}",
    relative_days: ["gestern", "heute", "morgen"],
    quarter_names: ["1. Quartal", "2. Quartal", "3. Quartal", "4. Quartal"],
    first_weekday: 1,
    default_currency: "EUR",
};

impl LocaleData {
    /// Looks up the data for a locale identifier such as `fr`, `fr_CA` or
    /// `de-CH`. Unsupported languages fall back to English.
    pub fn for_locale(locale: &str) -> &'static LocaleData {
        match super::language(locale).as_str() {
            "fr" => &FR,
            "de" => &DE,
            _ => &EN,
        }
    }

    /// The currency used by default in a locale, derived from its region.
    pub fn currency_for(&self, locale: &str) -> &'static str {
        match super::region(locale).as_deref() {
            Some("US") => "USD",
            Some("GB") => "GBP",
            Some("CA") => "CAD",
            Some("CH") | Some("LI") => "CHF",
            Some("JP") => "JPY",
            Some("AU") => "AUD",
            Some("CD") => "CDF",
            Some("FR") | Some("DE") | Some("AT") | Some("BE") | Some("LU") | Some("IE") => "EUR",
            _ => self.default_currency,
        }
    }

    /// The display symbol of a currency in this locale.
    pub fn currency_symbol(&self, code: &str) -> String {
        let symbol = match (self.language, code) {
            (_, "EUR") => "€",
            (_, "GBP") => "£",
            (_, "JPY") => "¥",
            ("en", "USD") | ("de", "USD") => "$",
            ("fr", "USD") => "$US",
            ("en", "CAD") => "CA$",
            ("fr", "CAD") => "$CA",
            ("de", "CAD") => "CA$",
            ("en", "AUD") | ("de", "AUD") => "A$",
            ("fr", "AUD") => "$AU",
            _ => return code.to_string(),
        };
        symbol.to_string()
    }

    /// Number of fraction digits conventionally used for a currency.
    pub fn currency_fraction_digits(code: &str) -> usize {
        match code {
            "JPY" | "KRW" | "CLP" | "ISK" | "VND" => 0,
            "BHD" | "KWD" | "OMR" | "TND" => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(LocaleData::for_locale("fr_CA").language, "fr");
        assert_eq!(LocaleData::for_locale("de-CH").language, "de");
        assert_eq!(LocaleData::for_locale("ja_JP").language, "en");
    }

    #[test]
    fn test_currency_by_region() {
        let fr = LocaleData::for_locale("fr_CA");
        assert_eq!(fr.currency_for("fr_CA"), "CAD");
        assert_eq!(fr.currency_for("fr"), "EUR");
        assert_eq!(LocaleData::for_locale("en").currency_for("en"), "USD");
    }

    #[test]
    fn test_currency_symbols() {
        let en = LocaleData::for_locale("en");
        assert_eq!(en.currency_symbol("USD"), "$");
        assert_eq!(en.currency_symbol("EUR"), "€");
        assert_eq!(en.currency_symbol("XYZ"), "XYZ");
        assert_eq!(LocaleData::for_locale("fr").currency_symbol("USD"), "$US");
    }
}
