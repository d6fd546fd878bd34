//! 엔티티 공통 계약
//!
//! 모든 리소스 타입이 따르는 식별자/타임스탬프 수명 주기와
//! 컬렉션 매핑, 저장 전 검증 규칙을 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppResult;

/// 식별자와 타임스탬프 수명 주기
///
/// - `id`는 저장소가 삽입 시 한 번만 할당하며 이후 변경되지 않습니다.
/// - `created_at`은 생성 시점에 고정됩니다.
/// - `updated_at`은 생성 시점에 설정되고 수정될 때마다 갱신됩니다.
pub trait EntityBase {
    fn id(&self) -> Option<ObjectId>;

    /// 저장소가 할당한 식별자를 기록합니다. 리포지토리와 저장소만 호출합니다.
    fn assign_id(&mut self, id: ObjectId);

    fn created_at(&self) -> DateTime;

    fn updated_at(&self) -> DateTime;

    /// `updated_at`을 현재 시각으로 갱신합니다.
    fn touch(&mut self);

    /// 16진수 문자열 형태의 ID
    fn id_string(&self) -> Option<String> {
        self.id().map(|id| id.to_hex())
    }
}

/// 컬렉션에 저장 가능한 리소스 엔티티
///
/// 각 엔티티 타입은 정확히 하나의 컬렉션에 속하며,
/// [`Entity::validate`]를 통과하지 못한 엔티티는 저장되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let project = ProjectEntity::new("Beach Cleanup", date, "Odesa", 5, "", "Olena Koval");
/// assert_eq!(ProjectEntity::COLLECTION_NAME, "Projects");
/// project.validate()?;
/// ```
pub trait Entity:
    EntityBase + Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// MongoDB 컬렉션 이름
    const COLLECTION_NAME: &'static str;

    /// 로그와 에러 메시지에 사용하는 리소스 이름
    const DISPLAY_NAME: &'static str;

    /// 리소스 타입별 필드 규칙을 검사합니다.
    ///
    /// 위반 시 [`AppError::ValidationError`](crate::errors::AppError::ValidationError)를 반환합니다.
    fn validate(&self) -> AppResult<()>;
}

/// 엔티티 구조체에 [`EntityBase`]를 구현합니다.
///
/// 대상 구조체는 `id: Option<ObjectId>`, `created_at: DateTime`,
/// `updated_at: DateTime` 필드를 가져야 합니다.
macro_rules! impl_entity_base {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl $crate::domain::entities::EntityBase for $entity {
                fn id(&self) -> Option<mongodb::bson::oid::ObjectId> {
                    self.id
                }

                fn assign_id(&mut self, id: mongodb::bson::oid::ObjectId) {
                    self.id = Some(id);
                }

                fn created_at(&self) -> mongodb::bson::DateTime {
                    self.created_at
                }

                fn updated_at(&self) -> mongodb::bson::DateTime {
                    self.updated_at
                }

                fn touch(&mut self) {
                    self.updated_at = mongodb::bson::DateTime::now();
                }
            }
        )+
    };
}

pub(crate) use impl_entity_base;
