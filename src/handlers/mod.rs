//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 검증, 응답 변환        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentRepository<E> - 검증, ID 규칙, CRUD    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore - MongoDB / 인메모리             ← Storage Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! [`AppError`](crate::errors::AppError)가 상태 코드와 `{"error": ...}` 본문을 결정합니다.
//!
//! ## 의존성 주입
//!
//! 리포지토리는 `web::Data<DocumentRepository<E>>`로 주입됩니다.
//! 애플리케이션 시작 시 [`crate::routes::configure_all_routes`]가 등록합니다.

pub mod resources;
