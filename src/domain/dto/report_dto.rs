//! 활동 보고서 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::resource::ApiResource;
use crate::domain::dto::validation::validate_not_blank;
use crate::domain::entities::ReportEntity;
use crate::utils::date_utils::{to_bson, to_chrono};
use crate::utils::string_utils::trim_string;

/// 보고서 생성/수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date: DateTime<Utc>,

    #[validate(
        length(max = 200, message = "장소는 200자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,

    #[validate(
        length(max = 1000, message = "설명은 1000자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "결과는 500자 이하여야 합니다"))]
    pub results: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub results: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReportEntity> for ReportResponse {
    fn from(report: ReportEntity) -> Self {
        Self {
            id: report.id.map(|id| id.to_hex()).unwrap_or_default(),
            date: to_chrono(report.date),
            location: report.location,
            description: report.description,
            results: report.results,
            created_at: to_chrono(report.created_at),
            updated_at: to_chrono(report.updated_at),
        }
    }
}

impl ApiResource for ReportEntity {
    const ROUTE: &'static str = "/api/reports";

    type Request = ReportRequest;
    type Response = ReportResponse;

    fn from_request(request: ReportRequest) -> Self {
        ReportEntity::new(
            to_bson(request.date),
            trim_string(&request.location),
            trim_string(&request.description),
            trim_string(&request.results),
        )
    }

    fn apply_request(&mut self, request: ReportRequest) {
        self.date = to_bson(request.date);
        self.location = trim_string(&request.location);
        self.description = trim_string(&request.description);
        self.results = trim_string(&request.results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        let request: ReportRequest = serde_json::from_value(serde_json::json!({
            "date": "2025-05-20T12:00:00Z",
            "location": "Kharkiv",
            "description": "Delivered 12 generators",
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let invalid = ReportRequest {
            description: " ".to_string(),
            results: "r".repeat(501),
            ..request
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
        assert!(errors.field_errors().contains_key("results"));
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let result = serde_json::from_value::<ReportRequest>(serde_json::json!({
            "location": "Kharkiv",
            "description": "Delivered 12 generators",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_request_keeps_identity() {
        let mut report = ReportEntity::new(mongodb::bson::DateTime::now(), "Kyiv", "Old", "");
        let id = mongodb::bson::oid::ObjectId::new();
        report.id = Some(id);
        let created_at = report.created_at;

        report.apply_request(ReportRequest {
            date: Utc::now(),
            location: "Lviv ".to_string(),
            description: "New".to_string(),
            results: "Done".to_string(),
        });

        assert_eq!(report.id, Some(id));
        assert_eq!(report.created_at, created_at);
        assert_eq!(report.location, "Lviv");
        assert_eq!(report.results, "Done");
    }
}
