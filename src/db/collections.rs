//! 컬렉션 접근자
//!
//! 공유 연결 핸들로부터 리소스 타입별 타입 지정 컬렉션을 얻습니다.
//! 상태를 보관하지 않으며 호출할 때마다 핸들을 새로 파생합니다.
//! 컬렉션이 없으면 첫 삽입 시 MongoDB가 생성합니다.

use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::{
    Entity, ProjectEntity, ReportEntity, UserApplicationEntity, UserEntity,
};

impl Database {
    /// 엔티티 타입에 대응하는 컬렉션을 반환합니다.
    ///
    /// ```rust,ignore
    /// let projects = database.collection_for::<ProjectEntity>(); // "Projects"
    /// ```
    pub fn collection_for<E: Entity>(&self) -> Collection<E> {
        self.get_database().collection::<E>(E::COLLECTION_NAME)
    }

    /// `Projects` 컬렉션
    pub fn projects(&self) -> Collection<ProjectEntity> {
        self.collection_for()
    }

    /// `Users` 컬렉션
    pub fn users(&self) -> Collection<UserEntity> {
        self.collection_for()
    }

    /// `UserApplications` 컬렉션
    pub fn user_applications(&self) -> Collection<UserApplicationEntity> {
        self.collection_for()
    }

    /// `Reports` 컬렉션
    pub fn reports(&self) -> Collection<ReportEntity> {
        self.collection_for()
    }
}
