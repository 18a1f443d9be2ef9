//! 회원가입 요청 DTO
//!
//! 새로운 회원 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::{BusinessStage, UserType};

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 클라이언트 필드명은 camelCase를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 로그인 아이디 (3-20자, 영문/숫자/언더스코어만 허용)
    #[validate(length(min = 3, max = 20, message = "아이디는 3-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    /// 실명 (1-50자)
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 닉네임 (2-10자)
    #[validate(length(min = 2, max = 10, message = "닉네임은 2-10자 사이여야 합니다"))]
    pub nickname: Option<String>,

    /// 사용자 유형 (기본값: ENTREPRENEUR)
    pub user_type: Option<UserType>,

    /// 사업 단계
    pub business_stage: Option<BusinessStage>,

    /// 전화번호 (010-1234-5678 형식)
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    /// 관심 업종 목록
    #[serde(default)]
    pub interested_business_types: Vec<String>,

    /// 선호 지역 목록
    #[serde(default)]
    pub preferred_areas: Vec<String>,

    /// 프로필 이미지 URL
    pub profile_image: Option<String>,
}

/// 아이디 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::new("invalid_username")
            .with_message("아이디는 영문, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증 (숫자와 하이픈만 허용)
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !phone.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(ValidationError::new("invalid_phone")
            .with_message("전화번호는 010-1234-5678 형식이어야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "daejeon_user".to_string(),
            email: "user@daejeon.kr".to_string(),
            password: "password123!".to_string(),
            name: "홍길동".to_string(),
            nickname: Some("대전사업가".to_string()),
            user_type: Some(UserType::Entrepreneur),
            business_stage: None,
            phone: Some("010-1234-5678".to_string()),
            interested_business_types: vec!["카페".to_string()],
            preferred_areas: vec!["유성구".to_string()],
            profile_image: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_username_fails() {
        let mut req = valid_request();
        req.username = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_password_fails() {
        let mut req = valid_request();
        req.password = "short".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_with_special_chars_fails() {
        let mut req = valid_request();
        req.username = "user!name".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_camel_case_deserialization() {
        let json = r#"{
            "username": "daejeon_user",
            "email": "user@daejeon.kr",
            "password": "password123!",
            "name": "홍길동",
            "userType": "ENTREPRENEUR",
            "businessStage": "PLANNING"
        }"#;

        let req: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_type, Some(UserType::Entrepreneur));
        assert_eq!(req.business_stage, Some(BusinessStage::Planning));
    }
}
