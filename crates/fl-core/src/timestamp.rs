//! Millisecond-precision UTC timestamps.
//!
//! Exported instants are written as RFC 3339 with exactly three fractional
//! digits and a `Z` suffix, e.g. `2026-02-08T12:00:00.123Z`.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;

/// Current time truncated to whole milliseconds.
#[must_use]
pub fn now_millis() -> DateTime<Utc> {
    truncate_millis(Utc::now())
}

#[must_use]
pub fn truncate_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

/// `serialize_with` target for contract timestamps.
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Stamp {
        #[serde(serialize_with = "serialize_millis")]
        at: DateTime<Utc>,
    }

    fn at(text: &str) -> DateTime<Utc> {
        text.parse().unwrap()
    }

    #[test]
    fn whole_seconds_still_carry_three_digits() {
        let json = serde_json::to_string(&Stamp { at: at("2026-02-08T12:00:00Z") }).unwrap();
        assert_eq!(json, r#"{"at":"2026-02-08T12:00:00.000Z"}"#);
    }

    #[test]
    fn nanoseconds_are_cut_to_milliseconds() {
        let json =
            serde_json::to_string(&Stamp { at: at("2026-02-08T12:00:00.123456789Z") }).unwrap();
        assert_eq!(json, r#"{"at":"2026-02-08T12:00:00.123Z"}"#);
        assert_eq!(
            truncate_millis(at("2026-02-08T12:00:00.123456789Z")),
            at("2026-02-08T12:00:00.123Z")
        );
    }

    #[test]
    fn now_has_no_sub_millisecond_part() {
        assert_eq!(now_millis().timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
