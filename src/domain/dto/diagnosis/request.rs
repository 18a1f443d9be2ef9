//! 핵심 진단 요청 DTO

use serde::{Deserialize, Serialize};

/// 시계열 분석 기간 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// 분석 기간 (개월, 기본 12)
    pub period_months: Option<usize>,
}

impl PeriodQuery {
    pub fn months(&self) -> usize {
        self.period_months.unwrap_or(12)
    }
}

/// 업종 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryQuery {
    pub industry: Option<String>,
}

/// 업종 지정 POST 본문 (건강 점수 / 종합 진단)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryRequest {
    pub industry: Option<String>,
}
