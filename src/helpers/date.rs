//! Date helper functions

use chrono::{DateTime, FixedOffset, Locale, TimeZone};

/// Parse a content API timestamp
///
/// Prismic sends `2021-03-15T19:25:28+0000`, which is not quite RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Format a publication date for display
///
/// Unpublished posts render as an empty string; timestamps that fail to
/// parse are shown as received.
pub fn format_published<Tz: TimeZone>(
    published_at: Option<&str>,
    format: &str,
    tz: &Tz,
    locale: Locale,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = published_at else {
        return String::new();
    };

    match parse_timestamp(raw) {
        Some(date) => date
            .with_timezone(tz)
            .format_localized(format, locale)
            .to_string(),
        None => {
            tracing::warn!("Unparseable publication date {:?}", raw);
            raw.to_string()
        }
    }
}

/// Map a site language tag onto a date locale
pub fn locale_for(language: &str) -> Locale {
    match language.replace('-', "_").as_str() {
        "pt_BR" | "pt" => Locale::pt_BR,
        "pt_PT" => Locale::pt_PT,
        "en" | "en_US" => Locale::en_US,
        "en_GB" => Locale::en_GB,
        "es" | "es_ES" => Locale::es_ES,
        "fr" | "fr_FR" => Locale::fr_FR,
        "de" | "de_DE" => Locale::de_DE,
        _ => Locale::POSIX,
    }
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|date| date.format("%Y-%m-%dT%H:%M:%S%:z").to_string())
}
