//! Temporal scalar coercion.
//!
//! Temporal arguments reach the engine in two shapes: already-decoded wire
//! values (JSON strings or numbers, typically bound through variables) and
//! raw literal tokens embedded in the query text. Both must normalize to
//! the same internal representation, a [`DateTime<Utc>`], before any
//! filtering logic runs. Outbound, timestamps are rendered as ISO-8601
//! strings with millisecond precision.

use crate::error::{PhotoShareError, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::Serializer;
use serde_json::Value;

/// A parsed query literal token, as delivered by the boundary layer.
///
/// Only the `String` and `Int` kinds carry a temporal value; every other
/// kind fails coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Null,
    Enum(String),
}

impl Literal {
    /// The literal's kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::String(_) => "string",
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Boolean(_) => "boolean",
            Literal::Null => "null",
            Literal::Enum(_) => "enum",
        }
    }
}

/// Decode an already-parsed wire value into a timestamp.
///
/// Accepts a JSON string (ISO-8601, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC) or a JSON number (milliseconds since the Unix epoch). Any
/// other JSON kind fails with
/// [`InvalidScalarInput`](PhotoShareError::InvalidScalarInput).
pub fn decode_wire(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_datetime_str(s),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .ok_or_else(|| invalid(n.to_string(), "number out of range"))?;
            from_millis(millis)
        }
        other => Err(invalid(
            other.to_string(),
            "expected a string or number wire value",
        )),
    }
}

/// Decode a query literal token into a timestamp.
///
/// Only string and integer literals are accepted; any other literal kind
/// fails with [`InvalidScalarInput`](PhotoShareError::InvalidScalarInput).
pub fn decode_literal(literal: &Literal) -> Result<DateTime<Utc>> {
    match literal {
        Literal::String(s) => parse_datetime_str(s),
        Literal::Int(millis) => from_millis(*millis),
        other => Err(invalid(
            format!("{:?}", other),
            format!("unsupported {} literal", other.kind()),
        )),
    }
}

/// Encode a timestamp as its ISO-8601 wire form, millisecond precision,
/// UTC designator `Z`.
pub fn encode_wire(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter rendering `created` fields through [`encode_wire`], so
/// serialized views carry the same ISO-8601 form the codec produces.
pub mod wire_format {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_wire(*value))
    }
}

fn parse_datetime_str(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Bare calendar dates are accepted as midnight UTC.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
        .map_err(|e| invalid(s.to_string(), e.to_string()))
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| invalid(millis.to_string(), "millisecond timestamp out of range"))
}

fn invalid(value: String, reason: impl Into<String>) -> PhotoShareError {
    PhotoShareError::InvalidScalarInput {
        value,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_iso_strings() {
        let dt = decode_wire(&json!("2018-04-15T19:09:57.308Z")).unwrap();
        assert_eq!(encode_wire(dt), "2018-04-15T19:09:57.308Z");
    }

    #[test]
    fn decodes_offset_strings_to_utc() {
        let dt = decode_wire(&json!("2018-04-15T21:09:57.308+02:00")).unwrap();
        assert_eq!(encode_wire(dt), "2018-04-15T19:09:57.308Z");
    }

    #[test]
    fn decodes_bare_dates_as_midnight_utc() {
        let dt = decode_wire(&json!("2017-04-15")).unwrap();
        assert_eq!(encode_wire(dt), "2017-04-15T00:00:00.000Z");
    }

    #[test]
    fn decodes_numbers_as_epoch_millis() {
        let dt = decode_wire(&json!(0)).unwrap();
        assert_eq!(encode_wire(dt), "1970-01-01T00:00:00.000Z");

        let dt = decode_wire(&json!(1_523_819_397_308_i64)).unwrap();
        assert_eq!(encode_wire(dt), "2018-04-15T19:09:57.308Z");
    }

    #[test]
    fn rejects_non_temporal_wire_kinds() {
        for value in [json!(true), json!(null), json!(["2018-04-15"]), json!({})] {
            let err = decode_wire(&value).unwrap_err();
            assert!(matches!(
                err,
                PhotoShareError::InvalidScalarInput { .. }
            ));
        }
    }

    #[test]
    fn rejects_garbage_strings() {
        assert!(decode_wire(&json!("not a date")).is_err());
        assert!(decode_wire(&json!("2018-13-40")).is_err());
    }

    #[test]
    fn literal_string_and_int_decode() {
        let from_string = decode_literal(&Literal::String("2018-04-15T19:09:57.308Z".into())).unwrap();
        let from_int = decode_literal(&Literal::Int(1_523_819_397_308)).unwrap();
        assert_eq!(from_string, from_int);
    }

    #[test]
    fn literal_other_kinds_fail() {
        for literal in [
            Literal::Boolean(true),
            Literal::Float(1.5),
            Literal::Null,
            Literal::Enum("PORTRAIT".into()),
        ] {
            let err = decode_literal(&literal).unwrap_err();
            assert!(matches!(
                err,
                PhotoShareError::InvalidScalarInput { .. }
            ));
        }
    }

    #[test]
    fn wire_round_trip_at_millisecond_precision() {
        let original = decode_wire(&json!("2021-09-03T08:15:30.123Z")).unwrap();
        let round_tripped = decode_wire(&json!(encode_wire(original))).unwrap();
        assert_eq!(round_tripped, original);
    }
}
