//! Epoch-seconds timestamp encoding.
//!
//! The `awsJson1_1` protocol carries timestamps as JSON numbers holding
//! seconds since the Unix epoch, with an optional fractional part for
//! sub-second precision. Whole-second values are written as integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Convert a timestamp into fractional epoch seconds (millisecond precision).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

/// Convert fractional epoch seconds into a timestamp.
///
/// Returns `None` for non-finite values and values outside chrono's range.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
}

/// Serde adapter for `Option<DateTime<Utc>>` members.
///
/// Use together with `default` and `skip_serializing_if = "Option::is_none"`.
pub mod epoch_seconds_opt {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serialize an optional timestamp as epoch seconds.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) if dt.timestamp_subsec_millis() == 0 => {
                serializer.serialize_i64(dt.timestamp())
            }
            Some(dt) => serializer.serialize_f64(super::to_epoch_seconds(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional epoch-seconds number.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        super::from_epoch_seconds(secs)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}
