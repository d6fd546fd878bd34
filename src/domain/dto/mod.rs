//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - JSON 필드는 camelCase (`volCount`, `initiatorFullName`, `mobNumber`)
//! - 길이 제한과 형식 검사는 `validator`로 요청 DTO에서 수행
//! - 응답의 `id`는 24자리 16진수 문자열, 날짜는 RFC 3339
//!
//! ## 필드 제한
//!
//! | 요청 DTO | 규칙 |
//! |----------|------|
//! | [`ProjectRequest`] | title ≤200 필수, location ≤200 필수, volCount ≥1, description ≤1000, initiatorFullName ≤100 필수 |
//! | [`ReportRequest`] | location ≤200 필수, description ≤1000 필수, results ≤500 |
//! | [`UserApplicationRequest`] | title ≤200 필수, description ≤1000 필수 |
//! | [`UserRequest`] | name ≤100 필수, mobNumber 전화번호, email 이메일, age 16-100, bio ≤500, location ≤100 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── resource.rs              # ApiResource trait (엔티티 ↔ 경로/요청/응답)
//! ├── validation.rs            # 공용 custom 검증 함수
//! ├── project_dto.rs
//! ├── report_dto.rs
//! ├── user_application_dto.rs
//! └── user_dto.rs
//! ```

pub mod project_dto;
pub mod report_dto;
pub mod resource;
pub mod user_application_dto;
pub mod user_dto;
pub mod validation;

pub use project_dto::{ProjectRequest, ProjectResponse};
pub use report_dto::{ReportRequest, ReportResponse};
pub use resource::ApiResource;
pub use user_application_dto::{UserApplicationRequest, UserApplicationResponse};
pub use user_dto::{UserRequest, UserResponse};
