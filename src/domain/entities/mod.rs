//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 리소스 엔티티들을 정의합니다.
//! 모든 엔티티는 [`Entity`] 계약을 구현하며, 하나의 컬렉션에만 속합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 검증 규칙 |
//! |--------|--------|-----------|
//! | [`ProjectEntity`] | `Projects` | title, location 필수 / vol_count ≥ 1 |
//! | [`UserEntity`] | `Users` | name, email 필수 |
//! | [`ReportEntity`] | `Reports` | location, description 필수 |
//! | [`UserApplicationEntity`] | `UserApplications` | title, description 필수 |
//!
//! 길이 제한과 형식 검사는 요청 DTO 계층([`crate::domain::dto`])에서 수행합니다.
//!
//! ## 수명 주기
//!
//! ```text
//! new() ──► validate() ──► insert (id 할당) ──► replace* (id 필수) ──► delete
//! ```
//!
//! ## MongoDB 매핑
//!
//! 문서 필드 이름은 PascalCase(`Title`, `VolCount`, `CreatedAt`)이며,
//! 상태와 역할은 정수 코드로 저장됩니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! pub struct ProjectEntity {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub(crate) id: Option<ObjectId>,
//!     #[serde(default, with = "stored_code")]
//!     pub status: ProjectStatus,
//!     pub title: String,
//!     pub created_at: DateTime,
//!     pub updated_at: DateTime,
//!     // ...
//! }
//! ```

pub mod base;
pub mod project;
pub mod report;
pub mod user;
pub mod user_application;

pub use base::{Entity, EntityBase};
pub use project::ProjectEntity;
pub use report::ReportEntity;
pub use user::UserEntity;
pub use user_application::UserApplicationEntity;
