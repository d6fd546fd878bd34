//! 문서 저장소 추상화
//!
//! 리포지토리가 필요로 하는 다섯 가지 저장소 기본 연산을 정의합니다.
//! 수정과 삭제는 단일 원자적 호출이며, 일치/삭제된 문서 수를 그대로 돌려줍니다.
//!
//! 구현체:
//! - `mongodb::Collection<E>` (이 파일)
//! - [`MemoryStore`](crate::db::MemoryStore)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, bson::{doc, oid::ObjectId}};

use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult};

/// 엔티티 타입 `E`를 저장하는 문서 저장소
#[async_trait]
pub trait DocumentStore<E: Entity>: Send + Sync {
    /// 저장소가 가리키는 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 모든 문서를 조회합니다. 순서는 보장하지 않습니다.
    async fn find_all(&self) -> AppResult<Vec<E>>;

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>>;

    /// 문서를 삽입하고 저장소가 할당한 ID를 반환합니다.
    async fn insert(&self, entity: &E) -> AppResult<ObjectId>;

    /// ID가 일치하는 문서를 통째로 교체하고 일치한 문서 수를 반환합니다.
    async fn replace(&self, id: ObjectId, entity: &E) -> AppResult<u64>;

    /// ID가 일치하는 문서를 삭제하고 삭제된 문서 수를 반환합니다.
    async fn delete(&self, id: ObjectId) -> AppResult<u64>;
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for Collection<E> {
    fn collection_name(&self) -> &str {
        self.name()
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        let cursor = self
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>> {
        self.find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, entity: &E) -> AppResult<ObjectId> {
        let result = self
            .insert_one(entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!(
                "{} 컬렉션이 ObjectId가 아닌 ID를 반환했습니다: {}",
                self.name(),
                result.inserted_id
            ))
        })
    }

    async fn replace(&self, id: ObjectId, entity: &E) -> AppResult<u64> {
        let result = self
            .replace_one(doc! { "_id": id }, entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<u64> {
        let result = self
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
