//! # Resource CRUD HTTP Handlers
//!
//! 네 가지 리소스가 공유하는 범용 핸들러입니다.
//! 핸들러는 [`ApiResource`] 타입 매개변수로 인스턴스화되어
//! [`crate::routes::configure_resource`]에서 등록됩니다.
//!
//! | 메서드 | 경로 | 동작 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/{resource}` | 전체 조회 | 200 |
//! | `GET` | `/api/{resource}/{id}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/{resource}` | 생성 | 201 + `Location` |
//! | `PUT` | `/api/{resource}/{id}` | 조회 → 필드 적용 → 교체 | 200 / 404 |
//! | `DELETE` | `/api/{resource}/{id}` | 삭제 | 204 / 404 |

use actix_web::{http::header, web, HttpResponse};
use log::info;
use validator::Validate;

use crate::domain::dto::ApiResource;
use crate::errors::AppError;
use crate::repositories::DocumentRepository;

fn not_found<E: ApiResource>(id: &str) -> AppError {
    AppError::NotFound(format!("{} {}을(를) 찾을 수 없습니다", E::DISPLAY_NAME, id))
}

/// 리소스 목록 조회
pub async fn list<E: ApiResource>(
    repository: web::Data<DocumentRepository<E>>,
) -> Result<HttpResponse, AppError> {
    let entities = repository.get_all().await?;
    let body: Vec<E::Response> = entities.into_iter().map(E::Response::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// ID로 리소스 조회
pub async fn get_by_id<E: ApiResource>(
    repository: web::Data<DocumentRepository<E>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entity = repository
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found::<E>(&id))?;

    Ok(HttpResponse::Ok().json(E::Response::from(entity)))
}

/// 새 리소스 생성
///
/// 요청 DTO 검증 후 저장하고, 생성된 리소스의 경로를 `Location` 헤더로 돌려줍니다.
pub async fn create<E: ApiResource>(
    repository: web::Data<DocumentRepository<E>>,
    payload: web::Json<E::Request>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let created = repository.add(E::from_request(request)).await?;
    let id = created.id_string().unwrap_or_default();

    info!("{} 생성 완료: {}", E::DISPLAY_NAME, id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{}/{}", E::ROUTE, id)))
        .json(E::Response::from(created)))
}

/// 기존 리소스 수정
///
/// 저장된 엔티티를 읽어 요청 필드를 덮어쓴 뒤 전체 문서를 교체합니다.
pub async fn update<E: ApiResource>(
    repository: web::Data<DocumentRepository<E>>,
    id: web::Path<String>,
    payload: web::Json<E::Request>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let mut entity = repository
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found::<E>(&id))?;

    entity.apply_request(request);
    let updated = repository.update(entity).await?;

    info!("{} 수정 완료: {}", E::DISPLAY_NAME, id);

    Ok(HttpResponse::Ok().json(E::Response::from(updated)))
}

/// 리소스 삭제
pub async fn delete<E: ApiResource>(
    repository: web::Data<DocumentRepository<E>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    repository.delete(&id).await?;

    info!("{} 삭제 완료: {}", E::DISPLAY_NAME, id);

    Ok(HttpResponse::NoContent().finish())
}
