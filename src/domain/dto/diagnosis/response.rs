//! 핵심 진단 응답 DTO
//!
//! 각 지표 분석 결과의 직렬화 구조입니다. 등급은 `A`~`D`
//! (종합 점수는 `F`까지), 분석 텍스트는 한국어로 제공됩니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 유동인구 월별 데이터 포인트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTraffic {
    pub month: String,
    pub traffic: u64,
}

/// 카드매출 월별 데이터 포인트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: u64,
}

/// 유동인구 변화량 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootTrafficAnalysis {
    pub market_code: String,
    pub current_monthly_traffic: u64,
    /// 월평균 변화율 (%, 소수점 2자리)
    pub average_monthly_change: f64,
    /// 기간 총 변화율 (%)
    pub total_change_period: f64,
    /// 증가 / 감소 / 안정
    pub trend: String,
    pub grade: String,
    pub monthly_data: Vec<MonthlyTraffic>,
    pub analysis: String,
}

/// 카드매출 추이 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSalesAnalysis {
    pub market_code: String,
    pub current_monthly_sales: u64,
    pub average_monthly_change: f64,
    pub total_change_period: f64,
    pub trend: String,
    pub grade: String,
    pub monthly_data: Vec<MonthlySales>,
    pub analysis: String,
}

/// 특정 업종 경쟁도 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryCompetition {
    pub market_code: String,
    pub industry: String,
    pub business_count: u32,
    pub total_businesses: u32,
    /// 동일업종 비율 (%, 소수점 2자리)
    pub industry_ratio: f64,
    /// 낮음 / 보통 / 높음 / 매우 높음
    pub competition_level: String,
    pub grade: String,
    pub analysis: String,
}

/// 전체 업종 분포 결과 (업종 미지정 시)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBreakdown {
    pub market_code: String,
    pub industry_breakdown: BTreeMap<String, u32>,
    pub total_businesses: u32,
    pub analysis: String,
}

/// 동일업종 수 분석 결과
///
/// 업종 지정 여부에 따라 두 가지 형태 중 하나로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SameIndustryAnalysis {
    Competition(IndustryCompetition),
    Breakdown(IndustryBreakdown),
}

impl SameIndustryAnalysis {
    /// 경쟁도 등급 (전체 분포 형태에는 등급이 없음)
    pub fn grade(&self) -> Option<&str> {
        match self {
            SameIndustryAnalysis::Competition(c) => Some(&c.grade),
            SameIndustryAnalysis::Breakdown(_) => None,
        }
    }
}

/// 창업·폐업 비율 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRatesAnalysis {
    pub market_code: String,
    pub startup_rate: f64,
    pub closure_rate: f64,
    pub survival_rate: f64,
    /// 종합 점수 (0-100, 소수점 2자리)
    pub total_score: f64,
    pub grade: String,
    /// 매우 양호 / 양호 / 보통 / 우려
    pub health_status: String,
    pub analysis: String,
}

/// 체류시간 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DwellTimeAnalysis {
    pub market_code: String,
    /// 평균 체류시간 (분)
    pub average_dwell_time: f64,
    pub peak_hours: Vec<String>,
    pub weekend_ratio: f64,
    pub grade: String,
    /// 매우 우수 / 우수 / 보통 / 부족
    pub time_quality: String,
    pub analysis: String,
}

/// 지표별 점수 기여 내역
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdownEntry {
    pub score: f64,
    pub grade: String,
    pub weight: f64,
}

/// 건강 점수 지표별 내역
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub foot_traffic: ScoreBreakdownEntry,
    pub card_sales: ScoreBreakdownEntry,
    pub business_rates: ScoreBreakdownEntry,
    pub dwell_time: ScoreBreakdownEntry,
}

/// 건강 점수에 포함되는 세부 지표 분석
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub foot_traffic: FootTrafficAnalysis,
    pub card_sales: CardSalesAnalysis,
    pub business_rates: BusinessRatesAnalysis,
    pub dwell_time: DwellTimeAnalysis,
    pub same_industry: Option<SameIndustryAnalysis>,
}

/// 상권 건강 점수 종합 산정 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoreAnalysis {
    pub market_code: String,
    pub industry: Option<String>,
    pub total_score: f64,
    /// A / B / C / D / F
    pub final_grade: String,
    /// 매우 건강 / 건강 / 보통 / 주의 / 위험
    pub health_status: String,
    pub score_breakdown: ScoreBreakdown,
    pub detailed_analysis: DetailedAnalysis,
    pub recommendations: Vec<String>,
}

/// 종합 진단의 지표 묶음
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveIndicators {
    pub foot_traffic: FootTrafficAnalysis,
    pub card_sales: CardSalesAnalysis,
    pub same_industry: SameIndustryAnalysis,
    pub business_rates: BusinessRatesAnalysis,
    pub dwell_time: DwellTimeAnalysis,
}

/// 종합 진단 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveSummary {
    pub overall_grade: String,
    pub health_status: String,
    pub total_score: f64,
    pub key_insights: Vec<String>,
}

/// 종합 상권 진단 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    pub market_code: String,
    pub industry: Option<String>,
    /// RFC 3339 형식 분석 일시
    pub analysis_timestamp: String,
    pub indicators: ComprehensiveIndicators,
    pub health_score: HealthScoreAnalysis,
    pub summary: ComprehensiveSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_industry_untagged_serialization() {
        let breakdown = SameIndustryAnalysis::Breakdown(IndustryBreakdown {
            market_code: "10000".to_string(),
            industry_breakdown: BTreeMap::from([("식음료업".to_string(), 45)]),
            total_businesses: 132,
            analysis: "전체 업종별 사업체 현황입니다.".to_string(),
        });

        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("industry_breakdown").is_some());
        assert!(json.get("competition_level").is_none());
    }

    #[test]
    fn test_same_industry_grade_accessor() {
        let competition = SameIndustryAnalysis::Competition(IndustryCompetition {
            market_code: "10000".to_string(),
            industry: "식음료업".to_string(),
            business_count: 45,
            total_businesses: 132,
            industry_ratio: 34.09,
            competition_level: "매우 높음".to_string(),
            grade: "D".to_string(),
            analysis: String::new(),
        });

        assert_eq!(competition.grade(), Some("D"));
    }
}
