//! 프로젝트 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::resource::ApiResource;
use crate::domain::dto::validation::validate_not_blank;
use crate::domain::entities::ProjectEntity;
use crate::domain::models::ProjectStatus;
use crate::utils::date_utils::{to_bson, to_chrono};
use crate::utils::string_utils::trim_string;

/// 프로젝트 생성/수정 요청 DTO
///
/// 상태는 요청으로 바꿀 수 없습니다. 새 프로젝트는 항상 InReview로 시작합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[validate(
        length(max = 200, message = "제목은 200자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    /// 프로젝트 진행 일자
    pub date: DateTime<Utc>,

    #[validate(
        length(max = 200, message = "장소는 200자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,

    #[validate(range(min = 1, message = "필요 봉사자 수는 1명 이상이어야 합니다"))]
    pub vol_count: i32,

    #[serde(default)]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: String,

    #[validate(
        length(max = 100, message = "개설자 이름은 100자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub initiator_full_name: String,
}

/// 프로젝트 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub status: ProjectStatus,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub vol_count: i32,
    pub description: String,
    pub initiator_full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectEntity> for ProjectResponse {
    fn from(project: ProjectEntity) -> Self {
        Self {
            id: project.id.map(|id| id.to_hex()).unwrap_or_default(),
            status: project.status,
            title: project.title,
            date: to_chrono(project.date),
            location: project.location,
            vol_count: project.vol_count,
            description: project.description,
            initiator_full_name: project.initiator_full_name,
            created_at: to_chrono(project.created_at),
            updated_at: to_chrono(project.updated_at),
        }
    }
}

impl ApiResource for ProjectEntity {
    const ROUTE: &'static str = "/api/projects";

    type Request = ProjectRequest;
    type Response = ProjectResponse;

    fn from_request(request: ProjectRequest) -> Self {
        ProjectEntity::new(
            trim_string(&request.title),
            to_bson(request.date),
            trim_string(&request.location),
            request.vol_count,
            trim_string(&request.description),
            trim_string(&request.initiator_full_name),
        )
    }

    fn apply_request(&mut self, request: ProjectRequest) {
        self.title = trim_string(&request.title);
        self.date = to_bson(request.date);
        self.location = trim_string(&request.location);
        self.vol_count = request.vol_count;
        self.description = trim_string(&request.description);
        self.initiator_full_name = trim_string(&request.initiator_full_name);
    }
}
