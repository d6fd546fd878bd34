//! Make Your Impact 백엔드
//!
//! 봉사 활동 연결 플랫폼을 위한 Rust 기반 CRUD 서비스입니다.
//! 프로젝트, 사용자, 활동 보고서, 참여 신청 네 가지 리소스를
//! MongoDB 문서로 저장하고 하나의 범용 리포지토리로 관리합니다.
//!
//! # Features
//!
//! - **범용 리포지토리**: `DocumentRepository<E>` 하나로 네 리소스의 CRUD 처리
//! - **검증**: 요청 DTO의 형식 검증과 엔티티 저장 전 규칙 검증
//! - **MongoDB**: zlib 압축, 재시도 쓰기, 과반수 쓰기 확인
//! - **인메모리 저장소**: 데이터베이스 없이 실행 및 테스트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/projects, /api/users, /api/reports, /api/userapplications
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← ID 규칙, 엔티티 검증, CRUD
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB 컬렉션 / 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use make_your_impact_backend::config::MongoConfig;
//! use make_your_impact_backend::db::Database;
//! use make_your_impact_backend::repositories::Repositories;
//!
//! let database = Database::connect(&MongoConfig::from_env()).await?;
//! let repositories = Repositories::from_database(&database);
//!
//! let projects = repositories.projects.get_all().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod utils;
