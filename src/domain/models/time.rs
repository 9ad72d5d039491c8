//! 시각 변환
//!
//! 엔티티는 BSON `DateTime`(밀리초 정밀도)으로 저장하고, DTO는 chrono
//! `DateTime<Utc>`로 주고받습니다. JSON 표현은 RFC 3339 문자열입니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

pub fn to_bson(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn to_chrono(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 현재 시각 (밀리초 단위로 잘림)
pub fn now() -> DateTime<Utc> {
    to_chrono(bson::DateTime::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_millis() {
        let value = DateTime::parse_from_rfc3339("2024-03-01T10:15:30.123Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(to_chrono(to_bson(value)), value);
        assert_eq!(to_bson(value).timestamp_millis(), value.timestamp_millis());
    }
}
