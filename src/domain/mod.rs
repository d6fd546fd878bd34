//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 리소스 엔티티와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities   - MongoDB 문서와 매핑되는 리소스 (Project, User, Report, UserApplication)
//! ├── DTOs       - 요청/응답 객체와 요청 검증 규칙
//! └── Models     - 공유 값 객체 (ProjectStatus, UserRole)
//!      │
//!      ▼
//! Repositories (DocumentRepository<E>)
//!      │
//!      ▼
//! DocumentStore (MongoDB 컬렉션 / 인메모리)
//! ```
//!
//! ## 요청 처리 흐름
//!
//! ```rust,ignore
//! use crate::domain::{ApiResource, ProjectEntity, ProjectRequest, ProjectResponse};
//!
//! // 1. DTO로 입력 받기 + 형식 검증
//! request.validate()?;
//!
//! // 2. 도메인 엔티티 생성
//! let project = ProjectEntity::from_request(request);
//!
//! // 3. 리포지토리를 통한 영속화 (엔티티 규칙 검증 포함)
//! let saved = projects_repository.add(project).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = ProjectResponse::from(saved);
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use models::*;
