//! 리스크 분류 요청 DTO

use serde::{Deserialize, Serialize};

/// 리스크 분류 POST 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub industry: Option<String>,
}

/// 상세 리스크 분석 POST 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedAnalysisRequest {
    /// 분석할 리스크 유형 (필수)
    pub risk_type: Option<String>,
    pub industry: Option<String>,
}

/// 완화 전략 조회 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTypeQuery {
    pub risk_type: Option<String>,
}
