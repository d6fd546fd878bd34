//! API 라우트 설정 모듈
//!
//! 리소스별 RESTful 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | 리소스 | 경로 |
//! |--------|------|
//! | Project | `/api/projects` |
//! | User | `/api/users` |
//! | UserApplication | `/api/userapplications` |
//! | Report | `/api/reports` |
//!
//! 각 경로는 `GET /`, `GET /{id}`, `POST /`, `PUT /{id}`, `DELETE /{id}`를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let repositories = Repositories::in_memory();
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &repositories));
//! ```

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::domain::dto::ApiResource;
use crate::errors::AppError;
use crate::handlers::resources;
use crate::repositories::{DocumentRepository, Repositories};

/// 모든 라우트를 설정합니다
///
/// 리포지토리를 `web::Data`로 등록하고 리소스별 라우트와 헬스체크를 추가합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `repositories` - 리소스 타입별 리포지토리 묶음
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, repositories: &Repositories) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    configure_resource(cfg, repositories.projects.clone());
    configure_resource(cfg, repositories.users.clone());
    configure_resource(cfg, repositories.user_applications.clone());
    configure_resource(cfg, repositories.reports.clone());
}

/// 단일 리소스의 CRUD 라우트를 등록합니다
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/projects \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Beach Cleanup","date":"2025-07-01T08:00:00Z","location":"Odesa","volCount":5,"initiatorFullName":"Olena Koval"}'
///
/// curl http://localhost:8080/api/projects/665f1c2e8b3e4a0012345678
/// ```
pub fn configure_resource<E: ApiResource>(
    cfg: &mut web::ServiceConfig,
    repository: DocumentRepository<E>,
) {
    cfg.service(
        web::scope(E::ROUTE)
            .app_data(web::Data::new(repository))
            .route("", web::get().to(resources::list::<E>))
            .route("", web::post().to(resources::create::<E>))
            .route("/{id}", web::get().to(resources::get_by_id::<E>))
            .route("/{id}", web::put().to(resources::update::<E>))
            .route("/{id}", web::delete().to(resources::delete::<E>)),
    );
}

/// JSON 본문 파싱 실패를 400 `{"error": ...}` 응답으로 변환합니다
fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "make_your_impact_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00+00:00",
///   "resources": ["Projects", "Users", "UserApplications", "Reports"]
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "resources": ["Projects", "Users", "UserApplications", "Reports"]
    }))
}
