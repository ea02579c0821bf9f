//! Serde helpers for the quirks of Tiingo's JSON.
//!
//! Optional text and date fields treat `""` and `null` as the same value: absent. A typed
//! model therefore reports `None` (serialized as `null`) where the raw record holds `""`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Volumes arrive as integers, but resampled series sometimes carry them as `1234.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn de_u64_from_any_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        U64(u64),
        F64(f64),
    }

    match Option::<AnyNumber>::deserialize(deserializer)? {
        Some(AnyNumber::U64(u)) => Ok(Some(u)),
        Some(AnyNumber::F64(f)) => {
            if f.fract() == 0.0 && f >= 0.0 {
                Ok(Some(f as u64))
            } else {
                Err(serde::de::Error::custom(format!(
                    "cannot convert float {f} to u64"
                )))
            }
        }
        None => Ok(None),
    }
}

/// Dates like `"2004-08-19"`. Metadata and listings use `""` or `null` for "unknown".
pub fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            // Some endpoints append a time component; only the date part is meaningful.
            let day = s.get(..10).unwrap_or(&s);
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Strings where `""` means absent, like `null`.
pub fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

/// Fields Tiingo sometimes sends as `null` instead of leaving out; both become `T::default()`.
pub fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders a query date the way Tiingo expects it.
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
