//! # 문서 리포지토리 구현
//!
//! 모든 리소스 타입이 공유하는 범용 CRUD 리포지토리입니다.
//! 엔티티 타입마다 하나씩 인스턴스화되며, 검증과 식별자 규칙을
//! 한 곳에서 강제합니다.
//!
//! ## 연산 규칙
//!
//! | 연산 | 빈 ID | 잘못된 형식의 ID | 대상 없음 |
//! |------|-------|------------------|-----------|
//! | `get_by_id` | ValidationError | `None` | `None` |
//! | `update` | ValidationError (ID 미할당) | - | NotFound |
//! | `delete` | ValidationError | NotFound | NotFound |
//!
//! 빈 ID와 잘못된 형식의 ID는 저장소에 접근하기 전에 처리됩니다.
//! 수정은 전체 문서 교체이며 버전 토큰이 없으므로 마지막 쓰기가 이깁니다.

use std::sync::Arc;

use log::{debug, warn};
use mongodb::bson::oid::ObjectId;

use crate::db::{Database, DocumentStore, MemoryStore};
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::is_valid_string;

/// 엔티티 타입 `E`에 대한 범용 리포지토리
///
/// 내부 저장소는 `Arc`로 공유되므로 복제해도 같은 컬렉션을 가리킵니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::ProjectsRepository;
///
/// let repo = ProjectsRepository::new(&database);
///
/// let project = repo.add(ProjectEntity::new("Beach Cleanup", date, "Odesa", 5, "", "Olena")).await?;
/// let id = project.id_string().unwrap();
///
/// let mut loaded = repo.get_by_id(&id).await?.unwrap();
/// loaded.vol_count = 10;
/// repo.update(loaded).await?;
///
/// repo.delete(&id).await?;
/// ```
pub struct DocumentRepository<E: Entity> {
    store: Arc<dyn DocumentStore<E>>,
}

impl<E: Entity> Clone for DocumentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<E: Entity> DocumentRepository<E> {
    /// MongoDB 컬렉션을 사용하는 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self::with_store(Arc::new(database.collection_for::<E>()))
    }

    /// 임의의 저장소 구현으로 리포지토리를 생성합니다.
    pub fn with_store(store: Arc<dyn DocumentStore<E>>) -> Self {
        Self { store }
    }

    /// 인메모리 저장소를 사용하는 리포지토리를 생성합니다.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::<E>::new()))
    }

    /// 컬렉션의 모든 문서를 반환합니다.
    ///
    /// 순서는 보장하지 않으며, 빈 컬렉션이면 빈 벡터를 반환합니다.
    pub async fn get_all(&self) -> AppResult<Vec<E>> {
        let entities = self.store.find_all().await?;
        debug!("{} 전체 조회: {}건", self.store.collection_name(), entities.len());
        Ok(entities)
    }

    /// ID로 단일 문서를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(E))` - 문서를 찾은 경우
    /// * `Ok(None)` - 문서가 없거나 ID 형식이 ObjectId가 아닌 경우
    /// * `Err(AppError::ValidationError)` - 빈 ID
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let Some(object_id) = Self::parse_id(id)? else {
            debug!("{} 조회: ObjectId 형식이 아닌 ID '{}'", E::DISPLAY_NAME, id);
            return Ok(None);
        };

        self.store.find_by_id(object_id).await
    }

    /// 엔티티를 검증한 뒤 삽입하고, 할당된 ID가 채워진 엔티티를 반환합니다.
    ///
    /// 검증에 실패하면 아무것도 기록하지 않습니다.
    pub async fn add(&self, mut entity: E) -> AppResult<E> {
        entity.validate()?;

        let id = self.store.insert(&entity).await?;
        entity.assign_id(id);

        debug!("{} 생성: {}", E::DISPLAY_NAME, id);
        Ok(entity)
    }

    /// 기존 문서를 엔티티 전체로 교체합니다.
    ///
    /// 호출자는 먼저 조회한 엔티티를 수정한 뒤 전달해야 합니다.
    /// 검증을 다시 수행하고 `updated_at`을 갱신합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationError` - ID가 할당되지 않았거나 검증 규칙 위반
    /// * `NotFound` - 일치하는 문서가 없음
    pub async fn update(&self, mut entity: E) -> AppResult<E> {
        let id = entity.id().ok_or_else(|| {
            AppError::ValidationError(format!("{} ID가 할당되지 않은 엔티티는 수정할 수 없습니다", E::DISPLAY_NAME))
        })?;

        entity.validate()?;
        entity.touch();

        let matched = self.store.replace(id, &entity).await?;
        if matched == 0 {
            warn!("{} 수정 대상 없음: {}", E::DISPLAY_NAME, id);
            return Err(AppError::NotFound(format!("{} {}을(를) 찾을 수 없습니다", E::DISPLAY_NAME, id)));
        }

        debug!("{} 수정: {}", E::DISPLAY_NAME, id);
        Ok(entity)
    }

    /// ID로 문서를 삭제합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 빈 ID
    /// * `NotFound` - 삭제된 문서가 없음 (ObjectId 형식이 아닌 ID 포함)
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = match Self::parse_id(id)? {
            Some(object_id) => self.store.delete(object_id).await?,
            None => 0,
        };

        if deleted == 0 {
            warn!("{} 삭제 대상 없음: {}", E::DISPLAY_NAME, id);
            return Err(AppError::NotFound(format!("{} {}을(를) 찾을 수 없습니다", E::DISPLAY_NAME, id)));
        }

        debug!("{} 삭제: {}", E::DISPLAY_NAME, id);
        Ok(())
    }

    /// 문자열 ID를 ObjectId로 변환합니다.
    ///
    /// 빈 ID는 에러, ObjectId 형식이 아닌 ID는 `None`입니다.
    /// 형식이 맞지 않는 ID는 저장소에 존재할 수 없습니다.
    fn parse_id(id: &str) -> AppResult<Option<ObjectId>> {
        if !is_valid_string(id) {
            return Err(AppError::ValidationError(format!("{} ID는 비어 있을 수 없습니다", E::DISPLAY_NAME)));
        }

        Ok(ObjectId::parse_str(id.trim()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use mongodb::bson::DateTime;

    use crate::domain::entities::{
        EntityBase, ProjectEntity, ReportEntity, UserApplicationEntity, UserEntity,
    };
    use crate::domain::models::{ProjectStatus, UserRole};

    /// 저장소 호출 횟수를 세는 래퍼
    struct CountingStore<E: Entity> {
        inner: MemoryStore<E>,
        calls: AtomicUsize,
    }

    impl<E: Entity> CountingStore<E> {
        fn new() -> Self {
            Self { inner: MemoryStore::new(), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl<E: Entity> DocumentStore<E> for CountingStore<E> {
        fn collection_name(&self) -> &str {
            self.inner.collection_name()
        }

        async fn find_all(&self) -> AppResult<Vec<E>> {
            self.hit();
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>> {
            self.hit();
            self.inner.find_by_id(id).await
        }

        async fn insert(&self, entity: &E) -> AppResult<ObjectId> {
            self.hit();
            self.inner.insert(entity).await
        }

        async fn replace(&self, id: ObjectId, entity: &E) -> AppResult<u64> {
            self.hit();
            self.inner.replace(id, entity).await
        }

        async fn delete(&self, id: ObjectId) -> AppResult<u64> {
            self.hit();
            self.inner.delete(id).await
        }
    }

    fn counting_repo<E: Entity>() -> (DocumentRepository<E>, Arc<CountingStore<E>>) {
        let store = Arc::new(CountingStore::<E>::new());
        (DocumentRepository::with_store(store.clone()), store)
    }

    fn beach_cleanup(vol_count: i32) -> ProjectEntity {
        ProjectEntity::new("Beach Cleanup", DateTime::now(), "Odesa", vol_count, "", "Olena Koval")
    }

    #[actix_web::test]
    async fn test_add_beach_cleanup_project() {
        let repo = DocumentRepository::<ProjectEntity>::in_memory();

        let added = repo.add(beach_cleanup(5)).await.unwrap();
        let id = added.id_string().unwrap();

        assert!(!id.is_empty());
        assert_eq!(added.status, ProjectStatus::InReview);
        assert_eq!(added.vol_count, 5);

        let loaded = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(loaded, added);
    }

    #[actix_web::test]
    async fn test_add_rejects_zero_volunteers_without_writing() {
        let (repo, store) = counting_repo::<ProjectEntity>();

        let result = repo.add(beach_cleanup(0)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.calls(), 0);
        assert!(store.inner.is_empty().unwrap());
    }

    #[actix_web::test]
    async fn test_blank_id_rejected_before_store_access() {
        let (repo, store) = counting_repo::<UserEntity>();

        assert!(matches!(repo.get_by_id("").await, Err(AppError::ValidationError(_))));
        assert!(matches!(repo.get_by_id("   ").await, Err(AppError::ValidationError(_))));
        assert!(matches!(repo.delete("").await, Err(AppError::ValidationError(_))));

        let unsaved = UserEntity::new("Taras", "+380501234567", "taras@example.com", 24, UserRole::Volunteer);
        assert!(matches!(repo.update(unsaved).await, Err(AppError::ValidationError(_))));

        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_absent_without_store_access() {
        let (repo, store) = counting_repo::<ReportEntity>();

        assert!(repo.get_by_id("not-an-object-id").await.unwrap().is_none());
        assert!(matches!(repo.delete("not-an-object-id").await, Err(AppError::NotFound(_))));
        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_id() {
        let repo = DocumentRepository::<UserApplicationEntity>::in_memory();
        let unknown = ObjectId::new().to_hex();

        assert!(repo.get_by_id(&unknown).await.unwrap().is_none());
        assert!(matches!(repo.delete(&unknown).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_twice() {
        let repo = DocumentRepository::<UserApplicationEntity>::in_memory();
        let added = repo
            .add(UserApplicationEntity::new("Join", "I can help on weekends", ProjectStatus::InReview))
            .await
            .unwrap();
        let id = added.id_string().unwrap();

        assert!(repo.delete(&id).await.is_ok());
        assert!(matches!(repo.delete(&id).await, Err(AppError::NotFound(_))));
        assert!(repo.get_by_id(&id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_of_never_inserted_report() {
        let repo = DocumentRepository::<ReportEntity>::in_memory();

        let mut report = ReportEntity::new(DateTime::now(), "Kyiv", "Sorted donations", "");
        report.assign_id(ObjectId::new());

        let result = repo.update(report).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_revalidates_and_touches() {
        let repo = DocumentRepository::<ProjectEntity>::in_memory();
        let added = repo.add(beach_cleanup(5)).await.unwrap();
        let id = added.id_string().unwrap();

        let mut invalid = added.clone();
        invalid.vol_count = 0;
        assert!(matches!(repo.update(invalid).await, Err(AppError::ValidationError(_))));

        let untouched = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(untouched.vol_count, 5);
        assert_eq!(untouched, added);

        let mut changed = added.clone();
        changed.status = ProjectStatus::Verified;
        changed.vol_count = 12;
        let updated = repo.update(changed).await.unwrap();

        assert_eq!(updated.created_at(), added.created_at());
        assert!(updated.updated_at() >= added.updated_at());

        let stored = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, ProjectStatus::Verified);
        assert_eq!(stored.vol_count, 12);
        assert_eq!(stored.id(), added.id());
    }

    #[actix_web::test]
    async fn test_concurrent_updates_last_write_wins() {
        let repo = DocumentRepository::<UserEntity>::in_memory();
        let user = repo
            .add(UserEntity::new("Taras", "+380501234567", "taras@example.com", 24, UserRole::Volunteer))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        let mut first = user.clone();
        first.bio = "Medic".to_string();
        let mut second = user.clone();
        second.bio = "Driver".to_string();

        let (a, b) = futures_util::future::join(repo.update(first), repo.update(second)).await;
        assert!(a.is_ok());
        assert!(b.is_ok());

        let stored = repo.get_by_id(&id).await.unwrap().unwrap();
        assert!(stored.bio == "Medic" || stored.bio == "Driver");
    }

    #[actix_web::test]
    async fn test_get_all_empty_and_populated() {
        let repo = DocumentRepository::<ReportEntity>::in_memory();
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.add(ReportEntity::new(DateTime::now(), "Kyiv", "Sorted donations", ""))
            .await
            .unwrap();
        repo.add(ReportEntity::new(DateTime::now(), "Lviv", "Cooked meals", "200 portions"))
            .await
            .unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_clones_share_store() {
        let repo = DocumentRepository::<ProjectEntity>::in_memory();
        let clone = repo.clone();

        let added = repo.add(beach_cleanup(3)).await.unwrap();
        let found = clone.get_by_id(&added.id_string().unwrap()).await.unwrap();

        assert!(found.is_some());
    }
}
