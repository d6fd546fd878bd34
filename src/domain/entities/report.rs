//! Report Entity Implementation
//!
//! 완료된 봉사 활동 보고서 엔티티입니다. `Reports` 컬렉션에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::base::{impl_entity_base, Entity};
use crate::errors::AppResult;
use crate::utils::string_utils::require_non_blank;

/// 활동 보고서 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    /// 활동 일자
    pub date: DateTime,
    pub location: String,
    pub description: String,
    /// 활동 결과 요약
    #[serde(default)]
    pub results: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ReportEntity {
    pub fn new(
        date: DateTime,
        location: impl Into<String>,
        description: impl Into<String>,
        results: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            date,
            location: location.into(),
            description: description.into(),
            results: results.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity_base!(ReportEntity);

impl Entity for ReportEntity {
    const COLLECTION_NAME: &'static str = "Reports";
    const DISPLAY_NAME: &'static str = "Report";

    fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.location, Self::DISPLAY_NAME, "location")?;
        require_non_blank(&self.description, Self::DISPLAY_NAME, "description")
    }
}
