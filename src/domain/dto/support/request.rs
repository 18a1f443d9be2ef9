//! 지원 도구 요청 DTO

use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;
use crate::domain::dto::strategy::request::UserProfile;
use crate::utils::string_utils::validate_required_string;

/// 지원센터 조회 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// 전문가 조회 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyQuery {
    pub specialty: Option<String>,
}

/// 성공 사례 조회 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryQuery {
    pub industry: Option<String>,
}

/// 정책 추천 POST 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyRecommendationRequest {
    pub user_profile: Option<UserProfile>,
    pub business_type: Option<String>,
    /// PLANNING / STARTUP / GROWTH / MATURE
    pub business_stage: Option<String>,
    pub location: Option<String>,
    /// 자본금 (만원)
    pub capital_amount: Option<i64>,
    /// 고용 계획 (명)
    pub employment_plan: Option<u32>,
}

impl PolicyRecommendationRequest {
    /// 필수 필드를 검증하고 정리된 값을 반환합니다.
    pub fn validated(&self) -> AppResult<(UserProfile, String, String)> {
        let profile = self.user_profile.clone().ok_or_else(|| {
            crate::core::errors::AppError::ValidationError("user_profile이 필요합니다.".to_string())
        })?;
        let business_type =
            validate_required_string(self.business_type.as_deref(), "business_type")?;
        let business_stage =
            validate_required_string(self.business_stage.as_deref(), "business_stage")?;

        Ok((profile, business_type, business_stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_missing_business_type() {
        let req = PolicyRecommendationRequest {
            user_profile: Some(UserProfile::default()),
            business_stage: Some("PLANNING".to_string()),
            ..Default::default()
        };

        match req.validated() {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "business_type이 필요합니다.");
            }
            other => panic!("unexpected: {:?}", other.is_ok()),
        }
    }
}
