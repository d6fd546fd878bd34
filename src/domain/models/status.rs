//! 상태 및 역할 값 객체
//!
//! JSON에서는 변형 이름(`"InReview"`, `"Volunteer"` 등)으로 표시되고,
//! MongoDB 문서에는 선언 순서의 정수 코드(Int32)로 저장됩니다.
//! 엔티티 필드는 `#[serde(with = "stored_code")]`로 정수 표현을 선택합니다.

use serde::{Deserialize, Serialize};

/// 프로젝트 및 참여 신청의 진행 상태
///
/// 상태 전이 규칙은 없으며 어떤 값으로든 변경할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// 검토 중 (기본값)
    #[default]
    InReview,
    Verified,
    Canceled,
    InProgress,
    Completed,
}

/// 플랫폼 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    /// 봉사 프로젝트를 만드는 사람
    Initiator,
    /// 프로젝트에 참여하는 봉사자 (기본값)
    #[default]
    Volunteer,
    Admin,
    /// 프로젝트를 재정적/물적으로 후원하는 사람
    Donor,
}

/// 문서에 저장되는 정수 코드
pub trait StoredCode: Sized + Copy {
    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self>;
}

impl StoredCode for ProjectStatus {
    fn code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ProjectStatus::InReview),
            1 => Some(ProjectStatus::Verified),
            2 => Some(ProjectStatus::Canceled),
            3 => Some(ProjectStatus::InProgress),
            4 => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl StoredCode for UserRole {
    fn code(self) -> i32 {
        self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(UserRole::Initiator),
            1 => Some(UserRole::Volunteer),
            2 => Some(UserRole::Admin),
            3 => Some(UserRole::Donor),
            _ => None,
        }
    }
}

/// [`StoredCode`] 값을 Int32로 직렬화하는 serde 모듈
pub mod stored_code {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::StoredCode;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: StoredCode,
        S: Serializer,
    {
        serializer.serialize_i32(value.code())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: StoredCode,
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        T::from_code(code).ok_or_else(|| de::Error::custom(format!("알 수 없는 코드 값: {}", code)))
    }
}
