//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 로그인 아이디
    #[validate(length(min = 1, message = "아이디를 입력해주세요"))]
    pub username: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_fails() {
        let req = LoginRequest {
            username: String::new(),
            password: "password123!".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
