//! # 문자열 유틸리티
//!
//! 엔티티 검증 규칙과 요청 DTO 변환에서 공통으로 쓰는 문자열 함수들입니다.

use crate::errors::AppError;

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 문자열 필드 검증
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `resource` - 리소스 이름 (에러 메시지용, 예: "Project")
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::require_non_blank;
///
/// assert!(require_non_blank("Odesa", "Project", "location").is_ok());
/// assert!(require_non_blank("   ", "Project", "location").is_err());
/// ```
pub fn require_non_blank(value: &str, resource: &str, field_name: &str) -> Result<(), AppError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "{} {}은(는) 비어 있을 수 없습니다",
            resource, field_name
        )))
    }
}

/// 문자열 정리 (trim 후 반환)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_string;
///
/// assert_eq!(trim_string("  Beach Cleanup  "), "Beach Cleanup");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("Beach Cleanup", "Project", "title").is_ok());

        match require_non_blank(" \t", "Report", "description") {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("Report"));
                assert!(msg.contains("description"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  Odesa  "), "Odesa");
        assert_eq!(trim_string("\n안녕하세요\t"), "안녕하세요");
        assert_eq!(trim_string("   "), "");
    }
}
