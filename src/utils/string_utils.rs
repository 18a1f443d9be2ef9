//! 문자열 처리 유틸리티

use crate::core::errors::{AppError, AppResult};

/// 필수 문자열 필드를 검증합니다.
///
/// 값이 없거나 공백뿐이면 `"{field_name}이 필요합니다."` 메시지의
/// ValidationError를 반환합니다.
pub fn validate_required_string(value: Option<&str>, field_name: &str) -> AppResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(AppError::ValidationError(format!(
            "{}이 필요합니다.",
            field_name
        ))),
    }
}

/// 선택 문자열을 정리합니다. 공백뿐인 값은 None으로 간주합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string_present() {
        let result = validate_required_string(Some("  외식업  "), "업종");
        assert_eq!(result.unwrap(), "외식업");
    }

    #[test]
    fn test_validate_required_string_missing() {
        let result = validate_required_string(None, "market_code");
        match result {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "market_code이 필요합니다.");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_validate_required_string_blank() {
        assert!(validate_required_string(Some("   "), "industry").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  값  ".to_string())), Some("값".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }
}
