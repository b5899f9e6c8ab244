//! Conversion from the raw API shape into [`BreachRecord`].

use crate::record::BreachRecord;
use breachcheck_hibp::{DataClasses, RawBreach};
use chrono::NaiveDate;

/// Placeholder used for missing names, domains and dates.
pub const UNKNOWN: &str = "Unknown";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a raw breach. Never fails: absent fields fall back to defaults.
#[must_use]
pub fn normalize(raw: &RawBreach) -> BreachRecord {
    BreachRecord {
        name: raw.name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        domain: raw.domain.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        date: normalize_date(raw.breach_date.as_deref()),
        compromised_data: join_data_classes(raw.data_classes.as_ref()),
        description: raw.description.clone().unwrap_or_default(),
        affected_count: raw.pwn_count.unwrap_or(0),
        is_verified: raw.is_verified.unwrap_or(false),
        is_sensitive: raw.is_sensitive.unwrap_or(false),
        is_retired: raw.is_retired.unwrap_or(false),
    }
}

fn normalize_date(date: Option<&str>) -> String {
    match date {
        None | Some("") => UNKNOWN.to_string(),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT).map_or_else(
            |_| value.to_string(),
            |parsed| parsed.format(DATE_FORMAT).to_string(),
        ),
    }
}

fn join_data_classes(classes: Option<&DataClasses>) -> String {
    match classes {
        None => String::new(),
        Some(DataClasses::List(items)) => items.join(", "),
        Some(DataClasses::Other(serde_json::Value::String(value))) => value.clone(),
        Some(DataClasses::Other(value)) => value.to_string(),
    }
}
