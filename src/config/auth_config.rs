//! # 인증 설정
//!
//! JWT 토큰 발급에 필요한 설정값을 환경 변수에서 읽습니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 비밀키 (`JWT_SECRET`)
    ///
    /// 프로덕션에서 미설정 시 경고를 남기고 개발용 기본값을 사용합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ JWT_SECRET 미설정 - 개발용 기본 키를 사용합니다");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 유효 시간 (`JWT_EXPIRATION_HOURS`, 기본 24시간)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_default() {
        if std::env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
