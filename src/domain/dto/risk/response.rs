//! 리스크 분류 응답 DTO

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 상권 리스크 분류 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskClassification {
    pub market_code: String,
    pub market_name: String,
    pub industry: Option<String>,
    /// 유입 저조형 / 과포화 경쟁형 / 소비력 약형 / 성장 잠재형
    pub primary_risk_type: String,
    /// 주요 리스크 점수 (0-100, 높을수록 위험)
    pub primary_risk_score: f64,
    /// 낮음 / 보통 / 높음 / 매우높음
    pub risk_level: String,
    /// 유형별 리스크 점수
    pub risk_scores: BTreeMap<String, f64>,
    pub risk_factors: Vec<String>,
    pub analysis: String,
    pub recommendations: Vec<String>,
    /// 성공 확률 (%)
    pub success_probability: f64,
    pub analysis_date: String,
}

/// 리스크 정량 지표
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIndicators {
    /// 경쟁 밀도 지수
    pub competition_density: f64,
    /// 시장 포화도 (%)
    pub market_saturation: f64,
    /// 가격 경쟁 강도
    pub price_competition: f64,
    /// 고객 획득 비용 (원)
    pub customer_acquisition_cost: f64,
}

/// 리스크 영향 평가 (낮음 / 중간 / 높음)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub revenue_impact: String,
    pub profit_margin_impact: String,
    pub market_share_impact: String,
    pub growth_potential_impact: String,
}

/// 리스크 완화 전략
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationStrategy {
    pub strategy_name: String,
    pub description: String,
    /// 쉬움 / 중간 / 어려움
    pub implementation_difficulty: String,
    /// 낮음 / 중간 / 높음
    pub expected_effectiveness: String,
    pub required_investment: String,
    pub timeline: String,
}

/// 리스크 극복 성공 사례
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSuccessCase {
    pub case_name: String,
    pub description: String,
    pub results: String,
    pub key_factors: Vec<String>,
}

/// 상세 리스크 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedRiskAnalysis {
    pub market_code: String,
    pub market_name: String,
    pub risk_type: String,
    pub risk_description: String,
    pub risk_indicators: RiskIndicators,
    pub impact_assessment: ImpactAssessment,
    pub mitigation_strategies: Vec<MitigationStrategy>,
    pub success_cases: Vec<RiskSuccessCase>,
    pub analysis_date: String,
}

/// 리스크 유형 카탈로그 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTypeInfo {
    pub risk_type: String,
    pub description: String,
    pub main_indicators: Vec<String>,
}
