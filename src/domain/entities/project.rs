//! Project Entity Implementation
//!
//! 봉사 프로젝트 엔티티입니다. `Projects` 컬렉션에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::base::{impl_entity_base, Entity};
use crate::domain::models::status::stored_code;
use crate::domain::models::ProjectStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::require_non_blank;

/// 봉사 프로젝트 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    /// 진행 상태 (기본값: InReview)
    #[serde(default, with = "stored_code")]
    pub status: ProjectStatus,
    pub title: String,
    /// 프로젝트 진행 일자
    pub date: DateTime,
    pub location: String,
    /// 필요한 봉사자 수 (1 이상)
    pub vol_count: i32,
    #[serde(default)]
    pub description: String,
    /// 프로젝트를 개설한 사람의 전체 이름
    pub initiator_full_name: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl ProjectEntity {
    /// 새 프로젝트 생성
    ///
    /// ID는 비어 있고 상태는 InReview로 시작합니다.
    pub fn new(
        title: impl Into<String>,
        date: DateTime,
        location: impl Into<String>,
        vol_count: i32,
        description: impl Into<String>,
        initiator_full_name: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            status: ProjectStatus::default(),
            title: title.into(),
            date,
            location: location.into(),
            vol_count,
            description: description.into(),
            initiator_full_name: initiator_full_name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity_base!(ProjectEntity);

impl Entity for ProjectEntity {
    const COLLECTION_NAME: &'static str = "Projects";
    const DISPLAY_NAME: &'static str = "Project";

    fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.title, Self::DISPLAY_NAME, "title")?;
        require_non_blank(&self.location, Self::DISPLAY_NAME, "location")?;

        if self.vol_count < 1 {
            return Err(AppError::ValidationError(format!(
                "Project vol_count는 1 이상이어야 합니다 (현재: {})",
                self.vol_count
            )));
        }

        Ok(())
    }
}
