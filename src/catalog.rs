//! Display names for countries, currencies, languages, locales and timezones.

use chrono_tz::Tz;

use crate::error::CatalogError;
use crate::locale::{self, LocaleData};

/// Looks up localized display names.
///
/// Every lookup fails with [`CatalogError::NotFound`] when the code has no
/// entry; callers decide how to fall back.
pub trait LocaleCatalog: Send + Sync {
    fn country_name(&self, country: &str, locale: &str) -> Result<String, CatalogError>;

    fn currency_name(&self, currency: &str, locale: &str) -> Result<String, CatalogError>;

    fn currency_symbol(&self, currency: &str, locale: &str) -> Result<String, CatalogError>;

    fn language_name(&self, language: &str, locale: &str) -> Result<String, CatalogError>;

    /// Names a locale such as `fr_CA`: `French (Canada)`.
    fn locale_name(&self, code: &str, locale: &str) -> Result<String, CatalogError>;

    fn timezone_name(&self, timezone: &str, locale: &str) -> Result<String, CatalogError>;

    /// The IANA zones in use in a country.
    fn country_timezones(&self, country: &str) -> Result<Vec<String>, CatalogError>;
}

/// A name in English and French.
type Entry = (&'static str, &'static str, &'static str);

static COUNTRIES: &[Entry] = &[
    ("BE", "Belgium", "Belgique"),
    ("CA", "Canada", "Canada"),
    ("CD", "Congo - Kinshasa", "Congo-Kinshasa"),
    ("CH", "Switzerland", "Suisse"),
    ("DE", "Germany", "Allemagne"),
    ("ES", "Spain", "Espagne"),
    ("FR", "France", "France"),
    ("GB", "United Kingdom", "Royaume-Uni"),
    ("IN", "India", "Inde"),
    ("IT", "Italy", "Italie"),
    ("JP", "Japan", "Japon"),
    ("US", "United States", "États-Unis"),
];

static CURRENCIES: &[Entry] = &[
    ("CAD", "Canadian Dollar", "dollar canadien"),
    ("CDF", "Congolese Franc", "franc congolais"),
    ("CHF", "Swiss Franc", "franc suisse"),
    ("EUR", "Euro", "euro"),
    ("GBP", "British Pound", "livre sterling"),
    ("INR", "Indian Rupee", "roupie indienne"),
    ("JPY", "Japanese Yen", "yen japonais"),
    ("USD", "US Dollar", "dollar des États-Unis"),
];

static LANGUAGES: &[Entry] = &[
    ("de", "German", "allemand"),
    ("en", "English", "anglais"),
    ("es", "Spanish", "espagnol"),
    ("fr", "French", "français"),
    ("it", "Italian", "italien"),
    ("ja", "Japanese", "japonais"),
    ("ln", "Lingala", "lingala"),
];

/// Metazone names keyed by IANA identifier.
static TIMEZONES: &[Entry] = &[
    ("Africa/Kinshasa", "West Africa Time", "heure d’Afrique de l’Ouest"),
    ("Africa/Lubumbashi", "Central Africa Time", "heure normale d’Afrique centrale"),
    ("America/Chicago", "Central Time", "heure du centre nord-américain"),
    ("America/Los_Angeles", "Pacific Time", "heure du Pacifique nord-américain"),
    ("America/New_York", "Eastern Time", "heure de l’Est nord-américain"),
    ("Asia/Kolkata", "India Standard Time", "heure de l’Inde"),
    ("Asia/Tokyo", "Japan Time", "heure du Japon"),
    ("Europe/Berlin", "Central European Time", "heure d’Europe centrale"),
    ("Europe/Brussels", "Central European Time", "heure d’Europe centrale"),
    ("Europe/London", "Greenwich Mean Time", "heure moyenne de Greenwich"),
    ("Europe/Paris", "Central European Time", "heure d’Europe centrale"),
    ("Europe/Zurich", "Central European Time", "heure d’Europe centrale"),
];

static COUNTRY_TIMEZONES: &[(&str, &[&str])] = &[
    ("BE", &["Europe/Brussels"]),
    (
        "CA",
        &[
            "America/Cambridge_Bay",
            "America/Dawson",
            "America/Dawson_Creek",
            "America/Edmonton",
            "America/Fort_Nelson",
            "America/Glace_Bay",
            "America/Goose_Bay",
            "America/Halifax",
            "America/Inuvik",
            "America/Iqaluit",
            "America/Moncton",
            "America/Rankin_Inlet",
            "America/Regina",
            "America/Resolute",
            "America/St_Johns",
            "America/Swift_Current",
            "America/Toronto",
            "America/Vancouver",
            "America/Whitehorse",
            "America/Winnipeg",
        ],
    ),
    ("CD", &["Africa/Kinshasa", "Africa/Lubumbashi"]),
    ("CH", &["Europe/Zurich"]),
    ("DE", &["Europe/Berlin", "Europe/Busingen"]),
    ("ES", &["Africa/Ceuta", "Atlantic/Canary", "Europe/Madrid"]),
    ("FR", &["Europe/Paris"]),
    ("GB", &["Europe/London"]),
    ("IN", &["Asia/Kolkata"]),
    ("IT", &["Europe/Rome"]),
    ("JP", &["Asia/Tokyo"]),
    (
        "US",
        &[
            "America/Adak",
            "America/Anchorage",
            "America/Boise",
            "America/Chicago",
            "America/Denver",
            "America/Detroit",
            "America/Indiana/Knox",
            "America/Indiana/Marengo",
            "America/Indiana/Petersburg",
            "America/Indiana/Tell_City",
            "America/Indiana/Vevay",
            "America/Indiana/Vincennes",
            "America/Indiana/Winamac",
            "America/Indianapolis",
            "America/Juneau",
            "America/Kentucky/Monticello",
            "America/Los_Angeles",
            "America/Louisville",
            "America/Menominee",
            "America/Metlakatla",
            "America/New_York",
            "America/Nome",
            "America/North_Dakota/Beulah",
            "America/North_Dakota/Center",
            "America/North_Dakota/New_Salem",
            "America/Phoenix",
            "America/Sitka",
            "America/Yakutat",
            "Pacific/Honolulu",
        ],
    ),
];

/// Catalog data for English and French; other locales read English names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        BuiltinCatalog
    }
}

fn is_french(locale: &str) -> bool {
    locale::language(locale) == "fr"
}

fn lookup(
    table: &[Entry],
    kind: &'static str,
    code: &str,
    locale: &str,
) -> Result<&'static str, CatalogError> {
    table
        .iter()
        .find(|(key, _, _)| *key == code)
        .map(|(_, en, fr)| if is_french(locale) { *fr } else { *en })
        .ok_or_else(|| CatalogError::not_found(kind, code))
}

impl LocaleCatalog for BuiltinCatalog {
    fn country_name(&self, country: &str, locale: &str) -> Result<String, CatalogError> {
        lookup(COUNTRIES, "country", country, locale).map(str::to_string)
    }

    fn currency_name(&self, currency: &str, locale: &str) -> Result<String, CatalogError> {
        lookup(CURRENCIES, "currency", currency, locale).map(str::to_string)
    }

    fn currency_symbol(&self, currency: &str, locale: &str) -> Result<String, CatalogError> {
        lookup(CURRENCIES, "currency", currency, locale)?;
        Ok(LocaleData::for_locale(locale).currency_symbol(currency))
    }

    fn language_name(&self, language: &str, locale: &str) -> Result<String, CatalogError> {
        lookup(LANGUAGES, "language", language, locale).map(str::to_string)
    }

    fn locale_name(&self, code: &str, locale: &str) -> Result<String, CatalogError> {
        let canonical = locale::canonicalize(code);
        let mut parts = canonical.split('_');
        let language = parts.next().unwrap_or_default();
        let name = lookup(LANGUAGES, "locale", language, locale)?;
        match parts.next() {
            None => Ok(name.to_string()),
            Some(region) => {
                let country = lookup(COUNTRIES, "locale", region, locale)?;
                Ok(format!("{} ({})", name, country))
            }
        }
    }

    fn timezone_name(&self, timezone: &str, locale: &str) -> Result<String, CatalogError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| CatalogError::not_found("timezone", timezone))?;
        let city = tz
            .name()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .replace('_', " ");
        if tz == Tz::UTC {
            let name = if is_french(locale) {
                "temps universel coordonné"
            } else {
                "Coordinated Universal Time"
            };
            return Ok(name.to_string());
        }
        match lookup(TIMEZONES, "timezone", tz.name(), locale) {
            Ok(metazone) => Ok(format!("{} ({})", metazone, city)),
            Err(_) if is_french(locale) => Ok(format!("heure : {}", city)),
            Err(_) => Ok(format!("{} Time", city)),
        }
    }

    fn country_timezones(&self, country: &str) -> Result<Vec<String>, CatalogError> {
        COUNTRY_TIMEZONES
            .iter()
            .find(|(code, _)| *code == country)
            .map(|(_, zones)| zones.iter().map(|zone| zone.to_string()).collect())
            .ok_or_else(|| CatalogError::not_found("country", country))
    }
}
