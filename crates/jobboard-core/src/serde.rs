// Module name shadows the `serde` crate, so use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer, Serializer};
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds and a `Z` suffix.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Parse a loosely typed minute count.
///
/// Accepts a numeric string. Anything that is not a finite
/// number yields `None`; fractions are truncated toward zero.
pub fn parse_minutes(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    finite_minutes(trimmed.parse::<f64>().ok()?)
}

fn finite_minutes(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

/// `deserialize_with` helper for optional TTL fields sent as number or string.
///
/// Booleans count as `1` and `0`.
pub fn lenient_minutes<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(d)?;
    Ok(match raw {
        Some(NumberOrText::Bool(b)) => Some(i64::from(b)),
        Some(NumberOrText::Number(n)) => finite_minutes(n),
        Some(NumberOrText::Text(s)) => parse_minutes(&s),
        None => None,
    })
}
