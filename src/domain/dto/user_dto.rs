//! 사용자 요청/응답 DTO
//!
//! 새로운 사용자 등록과 프로필 수정을 위한 HTTP 데이터 구조를 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::resource::ApiResource;
use crate::domain::dto::validation::{validate_not_blank, validate_phone};
use crate::domain::entities::UserEntity;
use crate::domain::models::UserRole;
use crate::utils::date_utils::to_chrono;
use crate::utils::string_utils::trim_string;

/// 사용자 생성/수정 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// 이름 (1-100자)
    #[validate(
        length(max = 100, message = "이름은 100자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    /// 휴대폰 번호
    #[validate(custom(function = "validate_phone"))]
    pub mob_number: String,

    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 나이 (16-100세)
    #[validate(range(min = 16, max = 100, message = "나이는 16세 이상 100세 이하여야 합니다"))]
    pub age: i32,

    /// 자기소개 (최대 500자)
    #[serde(default)]
    #[validate(length(max = 500, message = "자기소개는 500자 이하여야 합니다"))]
    pub bio: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "지역은 100자 이하여야 합니다"))]
    pub location: String,

    /// 역할 (생략 시 Volunteer)
    #[serde(default)]
    pub role: UserRole,
}

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub role: UserRole,
    pub name: String,
    pub mob_number: String,
    pub email: String,
    pub age: i32,
    pub bio: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for UserResponse {
    fn from(user: UserEntity) -> Self {
        let UserEntity {
            id,
            role,
            name,
            mob_number,
            email,
            age,
            bio,
            location,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            role,
            name,
            mob_number,
            email,
            age,
            bio,
            location,
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}

impl ApiResource for UserEntity {
    const ROUTE: &'static str = "/api/users";

    type Request = UserRequest;
    type Response = UserResponse;

    fn from_request(request: UserRequest) -> Self {
        let mut user = UserEntity::new(
            trim_string(&request.name),
            trim_string(&request.mob_number),
            trim_string(&request.email),
            request.age,
            request.role,
        );
        user.bio = trim_string(&request.bio);
        user.location = trim_string(&request.location);
        user
    }

    fn apply_request(&mut self, request: UserRequest) {
        self.role = request.role;
        self.name = trim_string(&request.name);
        self.mob_number = trim_string(&request.mob_number);
        self.email = trim_string(&request.email);
        self.age = request.age;
        self.bio = trim_string(&request.bio);
        self.location = trim_string(&request.location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UserRequest {
        UserRequest {
            name: "Taras Shevchuk".to_string(),
            mob_number: "+380501234567".to_string(),
            email: "taras@example.com".to_string(),
            age: 24,
            bio: String::new(),
            location: "Kyiv".to_string(),
            role: UserRole::Volunteer,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_reported() {
        let request = UserRequest {
            mob_number: "call me".to_string(),
            email: "not-an-email".to_string(),
            age: 15,
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("mob_number"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_age_upper_bound() {
        let request = UserRequest { age: 101, ..valid_request() };
        assert!(request.validate().is_err());

        let request = UserRequest { age: 100, ..valid_request() };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_role_defaults_to_volunteer() {
        let request: UserRequest = serde_json::from_value(serde_json::json!({
            "name": "Iryna",
            "mobNumber": "+380671112233",
            "email": "iryna@example.com",
            "age": 35,
        }))
        .unwrap();

        let user = UserEntity::from_request(request);
        assert_eq!(user.role, UserRole::Volunteer);
        assert_eq!(user.mob_number, "+380671112233");
    }
}
