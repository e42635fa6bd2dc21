//! Tests for the timestamp and date scalars.

use super::scalar::{Date, ScalarError, Timestamp, TimestampFormat};
use chrono::{Datelike, TimeZone, Timelike, Utc};

mod timestamp {
    use super::*;

    #[test]
    fn rfc3339_with_fraction_uses_primary_layout() {
        let (ts, format) = Timestamp::parse_with_format("2021-05-01T12:00:00.123Z").unwrap();

        assert_eq!(format, TimestampFormat::Rfc3339);
        assert_eq!(ts.as_datetime().timestamp_subsec_millis(), 123);
        assert_eq!(ts.as_datetime().hour(), 12);
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let ts = Timestamp::parse("2021-05-01T14:00:00+02:00").unwrap();

        assert_eq!(
            ts.into_inner(),
            Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn spaced_layout_is_first_fallback() {
        let (ts, format) = Timestamp::parse_with_format("2021-05-01 12:00:00").unwrap();

        assert_eq!(format, TimestampFormat::Spaced);
        assert_eq!(
            ts.into_inner(),
            Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn rfc1123_is_accepted() {
        let (ts, format) =
            Timestamp::parse_with_format("Sat, 01 May 2021 12:00:00 GMT").unwrap();

        assert_eq!(format, TimestampFormat::Rfc1123);
        assert_eq!(ts.as_datetime().day(), 1);
    }

    #[test]
    fn integer_string_is_unix_seconds() {
        let (ts, format) = Timestamp::parse_with_format("1620000000").unwrap();

        assert_eq!(format, TimestampFormat::UnixSeconds);
        assert_eq!(ts.as_datetime().timestamp(), 1_620_000_000);
    }

    #[test]
    fn garbage_fails() {
        assert_eq!(
            Timestamp::parse("not-a-date"),
            Err(ScalarError::Timestamp("not-a-date".to_string()))
        );
    }

    #[test]
    fn json_string_and_number_decode() {
        let from_str: Timestamp = serde_json::from_str(r#""2021-05-01 12:00:00""#).unwrap();
        let from_num: Timestamp = serde_json::from_str("1619870400").unwrap();

        assert_eq!(from_str, from_num);
    }

    #[test]
    fn json_garbage_is_a_decode_error() {
        let err = serde_json::from_str::<Timestamp>(r#""not-a-date""#).unwrap_err();

        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn null_decodes_to_none_when_optional() {
        let ts: Option<Timestamp> = serde_json::from_str("null").unwrap();

        assert!(ts.is_none());
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::parse("2021-05-01 12:00:00").unwrap();

        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            r#""2021-05-01T12:00:00Z""#
        );
    }
}

mod date {
    use super::*;

    #[test]
    fn plain_date() {
        let date = Date::parse("2021-05-01").unwrap();

        assert_eq!(date.as_naive().year(), 2021);
        assert_eq!(date.as_naive().month(), 5);
    }

    #[test]
    fn rfc3339_keeps_local_date() {
        let date = Date::parse("2021-05-01T23:30:00-05:00").unwrap();

        assert_eq!(date.to_string(), "2021-05-01");
    }

    #[test]
    fn spaced_datetime_is_not_a_date() {
        assert_eq!(
            Date::parse("2021-05-01 12:00:00"),
            Err(ScalarError::Date("2021-05-01 12:00:00".to_string()))
        );
    }

    #[test]
    fn json_round_trip_is_plain_date() {
        let date: Date = serde_json::from_str(r#""2020-12-31T00:00:00Z""#).unwrap();

        assert_eq!(serde_json::to_string(&date).unwrap(), r#""2020-12-31""#);
    }
}
