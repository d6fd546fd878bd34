//! 참여 신청 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::resource::ApiResource;
use crate::domain::dto::validation::validate_not_blank;
use crate::domain::entities::UserApplicationEntity;
use crate::domain::models::ProjectStatus;
use crate::utils::date_utils::to_chrono;
use crate::utils::string_utils::trim_string;

/// 참여 신청 생성/수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserApplicationRequest {
    #[validate(
        length(max = 200, message = "제목은 200자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(max = 1000, message = "설명은 1000자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub description: String,

    /// 신청 상태 (생략 시 InReview)
    #[serde(default)]
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApplicationResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserApplicationEntity> for UserApplicationResponse {
    fn from(application: UserApplicationEntity) -> Self {
        Self {
            id: application.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: application.title,
            description: application.description,
            status: application.status,
            created_at: to_chrono(application.created_at),
            updated_at: to_chrono(application.updated_at),
        }
    }
}

impl ApiResource for UserApplicationEntity {
    const ROUTE: &'static str = "/api/userapplications";

    type Request = UserApplicationRequest;
    type Response = UserApplicationResponse;

    fn from_request(request: UserApplicationRequest) -> Self {
        UserApplicationEntity::new(
            trim_string(&request.title),
            trim_string(&request.description),
            request.status,
        )
    }

    fn apply_request(&mut self, request: UserApplicationRequest) {
        self.title = trim_string(&request.title);
        self.description = trim_string(&request.description);
        self.status = request.status;
    }
}
