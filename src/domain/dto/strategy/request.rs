//! 전략 카드 요청 DTO

use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;
use crate::utils::string_utils::validate_required_string;

/// 사용자 프로필
///
/// 전략 카드 생성과 정책 추천에서 공통으로 사용됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// ENTREPRENEUR / INVESTOR / ADVISOR
    pub user_type: Option<String>,
    /// PLANNING / STARTUP / GROWTH / MATURE
    pub business_stage: Option<String>,
    /// 자본 (만원)
    pub capital: Option<i64>,
    /// 낮음 / 중간 / 높음
    pub risk_tolerance: Option<String>,
    /// 초보 / 중급 / 고급
    pub experience: Option<String>,
}

/// 전략 카드 생성 POST 본문
///
/// 필수 필드 누락 시 원본 API와 동일한 메시지의 400을 반환해야 하므로
/// validator 대신 `validated()`에서 필드별 수동 검증을 수행합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateStrategyRequest {
    pub market_code: Option<String>,
    pub industry: Option<String>,
    pub risk_type: Option<String>,
    pub user_profile: Option<UserProfile>,
}

impl GenerateStrategyRequest {
    /// 필수 필드를 검증하고 정리된 값을 반환합니다.
    pub fn validated(&self) -> AppResult<(String, String, String, UserProfile)> {
        let market_code = validate_required_string(self.market_code.as_deref(), "market_code")?;
        let industry = validate_required_string(self.industry.as_deref(), "industry")?;
        let risk_type = validate_required_string(self.risk_type.as_deref(), "risk_type")?;

        let profile = self.user_profile.clone().ok_or_else(|| {
            crate::core::errors::AppError::ValidationError("user_profile이 필요합니다.".to_string())
        })?;

        Ok((market_code, industry, risk_type, profile))
    }
}

/// 템플릿 목록 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

/// 성공 사례 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessCaseQuery {
    pub industry: Option<String>,
    pub strategy_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_missing_market_code_names_the_field() {
        let req = GenerateStrategyRequest {
            industry: Some("카페".to_string()),
            risk_type: Some("과포화 경쟁형".to_string()),
            user_profile: Some(UserProfile::default()),
            ..Default::default()
        };

        match req.validated() {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "market_code이 필요합니다.");
            }
            other => panic!("unexpected: {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_missing_user_profile() {
        let req = GenerateStrategyRequest {
            market_code: Some("10000".to_string()),
            industry: Some("카페".to_string()),
            risk_type: Some("과포화 경쟁형".to_string()),
            user_profile: None,
        };

        match req.validated() {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "user_profile이 필요합니다.");
            }
            other => panic!("unexpected: {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = GenerateStrategyRequest {
            market_code: Some("10000".to_string()),
            industry: Some("카페".to_string()),
            risk_type: Some("유입 저조형".to_string()),
            user_profile: Some(UserProfile {
                experience: Some("초보".to_string()),
                ..Default::default()
            }),
        };

        let (code, industry, risk_type, profile) = req.validated().unwrap();
        assert_eq!(code, "10000");
        assert_eq!(industry, "카페");
        assert_eq!(risk_type, "유입 저조형");
        assert_eq!(profile.experience.as_deref(), Some("초보"));
    }
}
