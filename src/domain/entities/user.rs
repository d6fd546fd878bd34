//! User Entity Implementation
//!
//! 플랫폼 사용자(개설자, 봉사자, 관리자, 후원자) 엔티티입니다.
//! `Users` 컬렉션에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::base::{impl_entity_base, Entity};
use crate::domain::models::status::stored_code;
use crate::domain::models::UserRole;
use crate::errors::AppResult;
use crate::utils::string_utils::require_non_blank;

/// 사용자 엔티티
///
/// 인증 정보는 보관하지 않습니다. 연락처와 프로필 정보만 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    /// 사용자 역할 (기본값: Volunteer)
    #[serde(default, with = "stored_code")]
    pub role: UserRole,
    pub name: String,
    /// 휴대폰 번호
    pub mob_number: String,
    pub email: String,
    pub age: i32,
    /// 자기소개
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl UserEntity {
    /// 새 사용자 생성
    ///
    /// 자기소개와 지역은 비어 있는 상태로 시작합니다.
    pub fn new(
        name: impl Into<String>,
        mob_number: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        role: UserRole,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            role,
            name: name.into(),
            mob_number: mob_number.into(),
            email: email.into(),
            age,
            bio: String::new(),
            location: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity_base!(UserEntity);

impl Entity for UserEntity {
    const COLLECTION_NAME: &'static str = "Users";
    const DISPLAY_NAME: &'static str = "User";

    fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.name, Self::DISPLAY_NAME, "name")?;
        require_non_blank(&self.email, Self::DISPLAY_NAME, "email")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rules() {
        let user = UserEntity::new("Taras", "+380501234567", "taras@example.com", 24, UserRole::Volunteer);
        assert!(user.validate().is_ok());

        let mut nameless = user.clone();
        nameless.name = " ".to_string();
        assert!(nameless.validate().is_err());

        let mut no_email = user.clone();
        no_email.email = String::new();
        assert!(no_email.validate().is_err());
    }

    #[test]
    fn test_role_stored_as_code() {
        let user = UserEntity::new("Iryna", "+380671112233", "iryna@example.com", 35, UserRole::Donor);
        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_i32("Role").unwrap(), 3);
        assert_eq!(document.get_str("MobNumber").unwrap(), "+380671112233");
        assert!(!document.contains_key("mob_number"));
    }
}
