//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 리포지토리, 핸들러, 연결 관리자가 공유하는 통합 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 리포지토리 결과를
//! 그대로 HTTP 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP |
//! |------|------|------|
//! | `ValidationError` | 빈 ID, 필드 규칙 위반 등 호출자 오류 | 400 |
//! | `NotFound` | 수정/삭제 대상 문서가 없음 | 404 |
//! | `DatabaseError` | MongoDB 드라이버가 올린 모든 오류 | 500 |
//! | `InternalError` | 예상하지 못한 내부 오류 | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(repo: &ProjectsRepository, id: &str) -> Result<ProjectEntity, AppError> {
//!     repo.get_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("Project {} 없음", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
/// 어떤 에러도 조용히 무시되지 않으며, 항상 즉시 호출자에게 전파됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Project ID는 비어 있을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Report not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_conversion() {
        #[derive(Validate)]
        struct Payload {
            #[validate(range(min = 1))]
            vol_count: i32,
        }

        let errors = Payload { vol_count: 0 }.validate().unwrap_err();
        let app_error = AppError::from(errors);

        match app_error {
            AppError::ValidationError(msg) => assert!(msg.contains("vol_count")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
