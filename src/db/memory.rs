//! 인메모리 문서 저장소
//!
//! MongoDB 없이 리포지토리와 HTTP 계층을 실행하기 위한 저장소입니다.
//! `STORAGE_BACKEND=memory`로 서버를 띄우거나 테스트에서 사용합니다.
//! 잠금은 한 번의 기본 연산 동안만 유지되며 `.await` 너머로 들고 가지 않습니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::db::store::DocumentStore;
use crate::domain::entities::Entity;
use crate::errors::{AppResult, ErrorContext};

/// `HashMap` 기반 문서 저장소
pub struct MemoryStore<E: Entity> {
    documents: RwLock<HashMap<ObjectId, E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// 저장된 문서 수
    pub fn len(&self) -> AppResult<usize> {
        let documents = self.documents.read().context("메모리 저장소 읽기 잠금 실패")?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MemoryStore<E> {
    fn collection_name(&self) -> &str {
        E::COLLECTION_NAME
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        let documents = self.documents.read().context("메모리 저장소 읽기 잠금 실패")?;
        Ok(documents.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<E>> {
        let documents = self.documents.read().context("메모리 저장소 읽기 잠금 실패")?;
        Ok(documents.get(&id).cloned())
    }

    async fn insert(&self, entity: &E) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        let mut stored = entity.clone();
        stored.assign_id(id);

        let mut documents = self.documents.write().context("메모리 저장소 쓰기 잠금 실패")?;
        documents.insert(id, stored);

        Ok(id)
    }

    async fn replace(&self, id: ObjectId, entity: &E) -> AppResult<u64> {
        let mut documents = self.documents.write().context("메모리 저장소 쓰기 잠금 실패")?;

        match documents.get_mut(&id) {
            Some(existing) => {
                let mut replacement = entity.clone();
                replacement.assign_id(id);
                *existing = replacement;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> AppResult<u64> {
        let mut documents = self.documents.write().context("메모리 저장소 쓰기 잠금 실패")?;
        Ok(u64::from(documents.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EntityBase, ReportEntity};
    use mongodb::bson::DateTime;

    fn report(location: &str) -> ReportEntity {
        ReportEntity::new(DateTime::now(), location, "Planted 30 trees", "30 trees")
    }

    #[actix_web::test]
    async fn test_insert_assigns_id() {
        let store = MemoryStore::<ReportEntity>::new();
        let id = store.insert(&report("Lviv")).await.unwrap();

        let stored = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.id(), Some(id));
        assert_eq!(stored.location, "Lviv");
        assert_eq!(store.collection_name(), "Reports");
    }

    #[actix_web::test]
    async fn test_replace_and_delete_report_counts() {
        let store = MemoryStore::<ReportEntity>::new();
        let id = store.insert(&report("Lviv")).await.unwrap();

        assert_eq!(store.replace(id, &report("Kharkiv")).await.unwrap(), 1);
        assert_eq!(store.replace(ObjectId::new(), &report("Dnipro")).await.unwrap(), 0);
        assert_eq!(store.len().unwrap(), 1);

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(store.is_empty().unwrap());
    }

    #[actix_web::test]
    async fn test_find_all_returns_every_document() {
        let store = MemoryStore::<ReportEntity>::new();
        assert!(store.find_all().await.unwrap().is_empty());

        store.insert(&report("Lviv")).await.unwrap();
        store.insert(&report("Poltava")).await.unwrap();

        let mut locations: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.location)
            .collect();
        locations.sort();

        assert_eq!(locations, vec!["Lviv", "Poltava"]);
    }
}
