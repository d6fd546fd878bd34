//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 하나의 범용 [`DocumentRepository`]를 리소스 타입별로 인스턴스화합니다.
//! 연결 핸들은 `main`에서 한 번 만들어 [`Repositories::from_database`]로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Repositories;
//!
//! let repositories = Repositories::from_database(&database);
//! let projects = repositories.projects.get_all().await?;
//! ```

pub mod document_repository;

pub use document_repository::DocumentRepository;

use crate::db::Database;
use crate::domain::entities::{ProjectEntity, ReportEntity, UserApplicationEntity, UserEntity};

pub type ProjectsRepository = DocumentRepository<ProjectEntity>;
pub type UsersRepository = DocumentRepository<UserEntity>;
pub type ReportsRepository = DocumentRepository<ReportEntity>;
pub type UserApplicationsRepository = DocumentRepository<UserApplicationEntity>;

/// 리소스 타입별 리포지토리 묶음
#[derive(Clone)]
pub struct Repositories {
    pub projects: ProjectsRepository,
    pub users: UsersRepository,
    pub reports: ReportsRepository,
    pub user_applications: UserApplicationsRepository,
}

impl Repositories {
    /// MongoDB 컬렉션을 사용하는 리포지토리들을 생성합니다.
    pub fn from_database(database: &Database) -> Self {
        Self {
            projects: ProjectsRepository::new(database),
            users: UsersRepository::new(database),
            reports: ReportsRepository::new(database),
            user_applications: UserApplicationsRepository::new(database),
        }
    }

    /// 인메모리 저장소를 사용하는 리포지토리들을 생성합니다.
    pub fn in_memory() -> Self {
        Self {
            projects: ProjectsRepository::in_memory(),
            users: UsersRepository::in_memory(),
            reports: ReportsRepository::in_memory(),
            user_applications: UserApplicationsRepository::in_memory(),
        }
    }
}
