//! REST 리소스 계약
//!
//! 엔티티 타입을 HTTP 경로, 요청 DTO, 응답 DTO와 연결합니다.
//! 범용 핸들러([`crate::handlers`])는 이 trait만 보고 동작합니다.

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::domain::entities::Entity;

/// HTTP로 노출되는 리소스 엔티티
///
/// ```rust,ignore
/// impl ApiResource for ProjectEntity {
///     const ROUTE: &'static str = "/api/projects";
///     type Request = ProjectRequest;
///     type Response = ProjectResponse;
///     // ...
/// }
/// ```
pub trait ApiResource: Entity {
    /// 리소스 기본 경로 (예: `/api/projects`)
    const ROUTE: &'static str;

    /// 생성/수정 요청 본문
    type Request: DeserializeOwned + Validate + Send + 'static;

    /// 응답 본문
    type Response: Serialize + From<Self>;

    /// 검증된 요청으로 새 엔티티를 만듭니다.
    fn from_request(request: Self::Request) -> Self;

    /// 기존 엔티티에 요청 필드를 덮어씁니다. ID와 생성 시간은 유지됩니다.
    fn apply_request(&mut self, request: Self::Request);
}
