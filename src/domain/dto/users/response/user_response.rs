//! 회원 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{BusinessStage, User, UserType};

/// 회원 응답 DTO
///
/// 비밀번호 해시 등 내부 필드를 제외한 공개 프로필입니다.
/// 클라이언트 필드명은 camelCase를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub nickname: Option<String>,
    pub user_type: UserType,
    pub business_stage: Option<BusinessStage>,
    pub phone: Option<String>,
    pub interested_business_types: Vec<String>,
    pub preferred_areas: Vec<String>,
    pub profile_image: Option<String>,
    pub is_active: bool,
    /// RFC 3339 형식 생성 일시
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let created_at = user.created_at.try_to_rfc3339_string().unwrap_or_default();

        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
            name: user.name,
            nickname: user.nickname,
            user_type: user.user_type,
            business_stage: user.business_stage,
            phone: user.phone,
            interested_business_types: user.interested_business_types,
            preferred_areas: user.preferred_areas,
            profile_image: user.profile_image,
            is_active: user.is_active,
            created_at,
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// 토큰 만료 시간 (초)
    pub expires_in: i64,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(
            "daejeon_user".to_string(),
            "user@daejeon.kr".to_string(),
            "홍길동".to_string(),
            "$2b$04$secret-hash".to_string(),
            UserType::Entrepreneur,
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"userType\":\"ENTREPRENEUR\""));
    }

    #[test]
    fn test_login_response_camel_case() {
        let user = User::new(
            "daejeon_user".to_string(),
            "user@daejeon.kr".to_string(),
            "홍길동".to_string(),
            "hash".to_string(),
            UserType::Entrepreneur,
        );

        let response = LoginResponse::new(user, "token".to_string(), 86400);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["accessToken"], "token");
        assert_eq!(json["tokenType"], "Bearer");
    }
}
