//! 요청 DTO 공용 검증 함수
//!
//! `#[validate(custom(function = "..."))]`에서 사용합니다.

use validator::ValidationError;

use crate::utils::string_utils::is_valid_string;

/// 필수 문자열 검증 (빈 문자열, 공백만 있는 문자열 거부)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증
///
/// 숫자, 공백, `-`, `.`, `(`, `)`만 허용하며 `+`는 맨 앞에만 올 수 있습니다.
/// 숫자는 7개 이상 15개 이하여야 합니다.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
    let digits = body.chars().filter(|c| c.is_ascii_digit()).count();

    if !allowed || !(7..=15).contains(&digits) {
        return Err(ValidationError::new("phone")
            .with_message("유효한 전화번호를 입력해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Odesa").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+380501234567").is_ok());
        assert!(validate_phone("(050) 123-45-67").is_ok());
        assert!(validate_phone("050.123.4567").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+38 050 abc 4567").is_err());
        assert!(validate_phone("38+0501234567").is_err());
        assert!(validate_phone("+1234567890123456").is_err());
    }
}
