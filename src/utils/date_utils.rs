//! # 날짜 변환 유틸리티
//!
//! API 경계의 `chrono::DateTime<Utc>`와 저장소의 BSON `DateTime`을 변환합니다.
//! BSON 날짜는 밀리초 정밀도이므로 그보다 작은 단위는 버려집니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

/// chrono 시각을 BSON 날짜로 변환합니다.
pub fn to_bson(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

/// BSON 날짜를 chrono 시각으로 변환합니다.
///
/// chrono가 표현할 수 없는 범위의 값은 Unix epoch로 대체됩니다.
pub fn to_chrono(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
