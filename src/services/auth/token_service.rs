//! JWT 토큰 서비스
//!
//! HS256 액세스 토큰의 발급과 검증을 담당합니다.
//! 토큰에는 사용자 ID(`sub`)와 사용자 유형이 포함됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 사용자 유형 (ENTREPRENEUR 등)
    pub user_type: String,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 서비스
pub struct TokenService;

static INSTANCE: Lazy<Arc<TokenService>> = Lazy::new(|| Arc::new(TokenService));

inventory::submit! {
    ServiceRegistration {
        name: "TokenService",
        constructor: || { TokenService::instance(); },
    }
}

impl TokenService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<TokenService> {
        INSTANCE.clone()
    }

    /// 액세스 토큰을 발급합니다.
    pub fn generate_token(&self, user_id: &str, user_type: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            user_type: user_type.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JwtConfig::secret().as_ref()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(JwtConfig::secret().as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다.".to_string())
            }
            _ => AppError::AuthenticationError("유효하지 않은 토큰입니다.".to_string()),
        })
    }

    /// Authorization 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token(header_value: &str) -> AppResult<&str> {
        header_value.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다.".to_string())
        })
    }

    /// 토큰 유효 시간을 초 단위로 반환합니다.
    pub fn expires_in_seconds(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::instance();

        let token = service
            .generate_token("507f1f77bcf86cd799439011", "ENTREPRENEUR")
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.user_type, "ENTREPRENEUR");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = TokenService::instance();

        let result = service.verify_token("not-a-real-token");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let token = TokenService::extract_bearer_token("Bearer abc.def.ghi").unwrap();
        assert_eq!(token, "abc.def.ghi");

        assert!(TokenService::extract_bearer_token("Basic abc").is_err());
    }

    #[test]
    fn test_expires_in_matches_config() {
        let service = TokenService::instance();
        assert_eq!(
            service.expires_in_seconds(),
            JwtConfig::expiration_hours() * 3600
        );
    }
}
