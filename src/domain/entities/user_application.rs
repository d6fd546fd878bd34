//! UserApplication Entity Implementation
//!
//! 사용자가 제출한 참여 신청 엔티티입니다. `UserApplications` 컬렉션에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::base::{impl_entity_base, Entity};
use crate::domain::models::status::stored_code;
use crate::domain::models::ProjectStatus;
use crate::errors::AppResult;
use crate::utils::string_utils::require_non_blank;

/// 참여 신청 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserApplicationEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    /// 신청 처리 상태 (기본값: InReview)
    #[serde(default, with = "stored_code")]
    pub status: ProjectStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl UserApplicationEntity {
    pub fn new(title: impl Into<String>, description: impl Into<String>, status: ProjectStatus) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity_base!(UserApplicationEntity);

impl Entity for UserApplicationEntity {
    const COLLECTION_NAME: &'static str = "UserApplications";
    const DISPLAY_NAME: &'static str = "UserApplication";

    fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.title, Self::DISPLAY_NAME, "title")?;
        require_non_blank(&self.description, Self::DISPLAY_NAME, "description")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rules() {
        let application = UserApplicationEntity::new(
            "Join Beach Cleanup",
            "I have a car and can bring gloves",
            ProjectStatus::InReview,
        );
        assert!(application.validate().is_ok());

        let blank_title = UserApplicationEntity::new("", "desc", ProjectStatus::Verified);
        assert!(blank_title.validate().is_err());

        let blank_description = UserApplicationEntity::new("title", "\n", ProjectStatus::Verified);
        assert!(blank_description.validate().is_err());
    }

    #[test]
    fn test_missing_status_defaults_to_in_review() {
        let document = mongodb::bson::doc! {
            "Title": "Join",
            "Description": "Please",
            "CreatedAt": DateTime::now(),
            "UpdatedAt": DateTime::now(),
        };

        let application: UserApplicationEntity = mongodb::bson::from_document(document).unwrap();
        assert_eq!(application.status, ProjectStatus::InReview);
        assert!(application.id.is_none());
    }

    #[test]
    fn test_unknown_status_code_rejected() {
        let document = mongodb::bson::doc! {
            "Title": "Join",
            "Description": "Please",
            "Status": 9,
            "CreatedAt": DateTime::now(),
            "UpdatedAt": DateTime::now(),
        };

        assert!(mongodb::bson::from_document::<UserApplicationEntity>(document).is_err());
    }
}
