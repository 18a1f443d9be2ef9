//! # 데이터 및 서버 설정
//!
//! 환경 변수 기반의 서버/보안 설정을 중앙에서 관리합니다.
//! 환경별로 다른 설정값을 제공하며, 민감한 값은 환경 변수로만 받습니다.

use std::env;

/// 실행 환경 구분
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 미설정 시 개발 환경으로 동작합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    pub fn current() -> Self {
        let env_str = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        match env_str.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }

    /// 프로덕션 환경 여부
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 환경에 따른 bcrypt cost를 반환합니다.
    ///
    /// 개발/테스트 환경은 빠른 피드백을 위해 낮은 cost를,
    /// 프로덕션은 보안 강도를 위해 높은 cost를 사용합니다.
    /// `BCRYPT_COST` 환경 변수로 재정의할 수 있습니다 (4~15 범위).
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
                log::warn!("BCRYPT_COST {} 는 4~15 범위를 벗어나 무시합니다", cost);
            }
        }

        Self::bcrypt_cost_for_env(Environment::current())
    }

    /// 환경별 기본 bcrypt cost
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩 호스트 (`HOST`, 기본 `127.0.0.1`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 바인딩 포트 (`PORT`, 기본 `8080`)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_cost_for_environments() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_environment_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_server_defaults() {
        // HOST/PORT 미설정 환경에서 기본값을 확인
        if std::env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }
        if std::env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
