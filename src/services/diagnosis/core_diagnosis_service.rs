//! 상권 진단 핵심 지표 분석 서비스
//!
//! 유동인구, 카드매출, 동일업종, 창업·폐업 비율, 체류시간의 다섯 지표를
//! 분석하고 가중 합산으로 상권 건강 점수를 산정합니다.
//!
//! ## 등급 기준
//!
//! | 지표 | A | B | C | D |
//! |------|---|---|---|---|
//! | 유동인구 월평균 변화율 | >5% | >0% | >-5% | 이하 |
//! | 카드매출 월평균 변화율 | >3% | >0% | >-3% | 이하 |
//! | 동일업종 비율 | ≤10% | ≤20% | ≤30% | 초과 |
//! | 창업·폐업 종합 점수 | ≥90 | ≥80 | ≥70 | 미만 |
//! | 평균 체류시간 | ≥60분 | ≥45분 | ≥30분 | 미만 |

use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::diagnosis::response::{
    BusinessRatesAnalysis, CardSalesAnalysis, ComprehensiveAnalysis, ComprehensiveIndicators,
    ComprehensiveSummary, DetailedAnalysis, DwellTimeAnalysis, FootTrafficAnalysis,
    HealthScoreAnalysis, IndustryBreakdown, IndustryCompetition, MonthlySales, MonthlyTraffic,
    SameIndustryAnalysis, ScoreBreakdown, ScoreBreakdownEntry,
};
use crate::domain::models::market::{MarketRecord, MonthlyValue};
use crate::services::diagnosis::market_data::MarketDataStore;

/// 건강 점수 가중치
const WEIGHT_FOOT_TRAFFIC: f64 = 0.25;
const WEIGHT_CARD_SALES: f64 = 0.25;
const WEIGHT_BUSINESS_RATES: f64 = 0.25;
const WEIGHT_DWELL_TIME: f64 = 0.15;
const WEIGHT_COMPETITION: f64 = 0.10;

/// 상권 진단 서비스
pub struct CoreDiagnosisService;

static INSTANCE: Lazy<Arc<CoreDiagnosisService>> = Lazy::new(|| Arc::new(CoreDiagnosisService));

inventory::submit! {
    ServiceRegistration {
        name: "CoreDiagnosisService",
        constructor: || { CoreDiagnosisService::instance(); },
    }
}

/// 소수점 2자리 반올림
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 월별 시계열의 변화량 통계
struct SeriesStats {
    average_monthly_change: f64,
    total_change: f64,
    trend: &'static str,
}

/// 최근 N개월 구간의 월간 변화율 평균과 기간 총 변화율을 계산합니다.
///
/// 데이터가 2개 미만이면 변화율 0, 안정 트렌드로 간주합니다.
fn series_stats(values: &[u64]) -> SeriesStats {
    if values.len() < 2 {
        return SeriesStats {
            average_monthly_change: 0.0,
            total_change: 0.0,
            trend: "안정",
        };
    }

    let changes: Vec<f64> = values
        .windows(2)
        .map(|pair| ((pair[1] as f64 - pair[0] as f64) / pair[0] as f64) * 100.0)
        .collect();

    let average = changes.iter().sum::<f64>() / changes.len() as f64;
    let total =
        ((values[values.len() - 1] as f64 - values[0] as f64) / values[0] as f64) * 100.0;

    SeriesStats {
        average_monthly_change: average,
        total_change: total,
        trend: if average > 0.0 { "증가" } else { "감소" },
    }
}

/// 시계열에서 최근 N개월 구간을 추출합니다 (1..=전체 길이 범위로 클램핑).
fn recent_window(series: &[MonthlyValue], period_months: usize) -> &[MonthlyValue] {
    let n = period_months.clamp(1, series.len());
    &series[series.len() - n..]
}

fn grade_score(grade: &str) -> f64 {
    match grade {
        "A" => 100.0,
        "B" => 80.0,
        "C" => 60.0,
        "D" => 40.0,
        _ => 60.0,
    }
}

impl CoreDiagnosisService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<CoreDiagnosisService> {
        INSTANCE.clone()
    }

    fn market<'a>(
        &self,
        store: &'a MarketDataStore,
        market_code: &str,
        missing_message: &str,
    ) -> AppResult<&'a MarketRecord> {
        store
            .find(market_code)
            .ok_or_else(|| AppError::NotFound(missing_message.to_string()))
    }

    /// 유동인구 변화량 분석
    pub fn foot_traffic_analysis(
        &self,
        market_code: &str,
        period_months: usize,
    ) -> AppResult<FootTrafficAnalysis> {
        let store = MarketDataStore::instance();
        let market = self.market(&store, market_code, "해당 상권의 유동인구 데이터가 없습니다.")?;

        let window = recent_window(&market.foot_traffic, period_months);
        let values: Vec<u64> = window.iter().map(|m| m.value).collect();
        let stats = series_stats(&values);

        let grade = if stats.average_monthly_change > 5.0 {
            "A"
        } else if stats.average_monthly_change > 0.0 {
            "B"
        } else if stats.average_monthly_change > -5.0 {
            "C"
        } else {
            "D"
        };

        Ok(FootTrafficAnalysis {
            market_code: market_code.to_string(),
            current_monthly_traffic: *values.last().unwrap_or(&0),
            average_monthly_change: round2(stats.average_monthly_change),
            total_change_period: round2(stats.total_change),
            trend: stats.trend.to_string(),
            grade: grade.to_string(),
            monthly_data: window
                .iter()
                .map(|m| MonthlyTraffic {
                    month: m.month.clone(),
                    traffic: m.value,
                })
                .collect(),
            analysis: foot_traffic_text(stats.average_monthly_change, grade),
        })
    }

    /// 카드매출 추이 분석
    pub fn card_sales_analysis(
        &self,
        market_code: &str,
        period_months: usize,
    ) -> AppResult<CardSalesAnalysis> {
        let store = MarketDataStore::instance();
        let market = self.market(&store, market_code, "해당 상권의 카드매출 데이터가 없습니다.")?;

        let window = recent_window(&market.card_sales, period_months);
        let values: Vec<u64> = window.iter().map(|m| m.value).collect();
        let stats = series_stats(&values);

        let grade = if stats.average_monthly_change > 3.0 {
            "A"
        } else if stats.average_monthly_change > 0.0 {
            "B"
        } else if stats.average_monthly_change > -3.0 {
            "C"
        } else {
            "D"
        };

        Ok(CardSalesAnalysis {
            market_code: market_code.to_string(),
            current_monthly_sales: *values.last().unwrap_or(&0),
            average_monthly_change: round2(stats.average_monthly_change),
            total_change_period: round2(stats.total_change),
            trend: stats.trend.to_string(),
            grade: grade.to_string(),
            monthly_data: window
                .iter()
                .map(|m| MonthlySales {
                    month: m.month.clone(),
                    sales: m.value,
                })
                .collect(),
            analysis: card_sales_text(stats.average_monthly_change, grade),
        })
    }

    /// 동일업종 수 분석
    ///
    /// 업종이 지정되고 해당 상권에 존재하면 경쟁도 분석을,
    /// 그 외에는 전체 업종 분포를 반환합니다.
    pub fn same_industry_analysis(
        &self,
        market_code: &str,
        industry: Option<&str>,
    ) -> AppResult<SameIndustryAnalysis> {
        let store = MarketDataStore::instance();
        let market = self.market(
            &store,
            market_code,
            "해당 상권의 업종별 사업체 데이터가 없습니다.",
        )?;

        let total = market.total_businesses();

        if let Some(industry) = industry {
            let count = market.industry_count(industry);
            if count > 0 {
                let ratio = (count as f64 / total as f64) * 100.0;

                let (competition_level, grade) = if ratio > 30.0 {
                    ("매우 높음", "D")
                } else if ratio > 20.0 {
                    ("높음", "C")
                } else if ratio > 10.0 {
                    ("보통", "B")
                } else {
                    ("낮음", "A")
                };

                return Ok(SameIndustryAnalysis::Competition(IndustryCompetition {
                    market_code: market_code.to_string(),
                    industry: industry.to_string(),
                    business_count: count,
                    total_businesses: total,
                    industry_ratio: round2(ratio),
                    competition_level: competition_level.to_string(),
                    grade: grade.to_string(),
                    analysis: competition_text(ratio, competition_level),
                }));
            }
        }

        Ok(SameIndustryAnalysis::Breakdown(IndustryBreakdown {
            market_code: market_code.to_string(),
            industry_breakdown: market
                .industries
                .iter()
                .map(|i| (i.industry.clone(), i.count))
                .collect::<BTreeMap<_, _>>(),
            total_businesses: total,
            analysis: "전체 업종별 사업체 현황입니다.".to_string(),
        }))
    }

    /// 창업·폐업 비율 분석
    pub fn business_rates_analysis(&self, market_code: &str) -> AppResult<BusinessRatesAnalysis> {
        let store = MarketDataStore::instance();
        let market =
            self.market(&store, market_code, "해당 상권의 창업·폐업 데이터가 없습니다.")?;

        let rates = market.rates;

        // 15% 이상 창업률이면 만점, 10% 이상 폐업률이면 0점
        let startup_score = (rates.startup_rate / 15.0 * 100.0).min(100.0);
        let closure_score = (100.0 - rates.closure_rate / 10.0 * 100.0).max(0.0);
        let survival_score = rates.survival_rate;

        let total_score = startup_score * 0.3 + closure_score * 0.3 + survival_score * 0.4;

        let (grade, health_status) = if total_score >= 90.0 {
            ("A", "매우 양호")
        } else if total_score >= 80.0 {
            ("B", "양호")
        } else if total_score >= 70.0 {
            ("C", "보통")
        } else {
            ("D", "우려")
        };

        Ok(BusinessRatesAnalysis {
            market_code: market_code.to_string(),
            startup_rate: rates.startup_rate,
            closure_rate: rates.closure_rate,
            survival_rate: rates.survival_rate,
            total_score: round2(total_score),
            grade: grade.to_string(),
            health_status: health_status.to_string(),
            analysis: business_rates_text(health_status),
        })
    }

    /// 체류시간 분석
    pub fn dwell_time_analysis(&self, market_code: &str) -> AppResult<DwellTimeAnalysis> {
        let store = MarketDataStore::instance();
        let market =
            self.market(&store, market_code, "해당 상권의 체류시간 데이터가 없습니다.")?;

        let avg_time = market.dwell.average_minutes;

        let (grade, time_quality) = if avg_time >= 60.0 {
            ("A", "매우 우수")
        } else if avg_time >= 45.0 {
            ("B", "우수")
        } else if avg_time >= 30.0 {
            ("C", "보통")
        } else {
            ("D", "부족")
        };

        Ok(DwellTimeAnalysis {
            market_code: market_code.to_string(),
            average_dwell_time: avg_time,
            peak_hours: market.dwell.peak_hours.clone(),
            weekend_ratio: market.dwell.weekend_ratio,
            grade: grade.to_string(),
            time_quality: time_quality.to_string(),
            analysis: dwell_time_text(avg_time, time_quality),
        })
    }

    /// 상권 건강 점수 종합 산정
    ///
    /// 지표별 등급을 점수(A=100, B=80, C=60, D=40)로 변환한 뒤
    /// 가중 합산합니다. 업종 미지정 시 경쟁도 가중치(0.10)를 제외하고
    /// 나머지 가중치로 재정규화합니다.
    pub fn health_score(
        &self,
        market_code: &str,
        industry: Option<&str>,
    ) -> AppResult<HealthScoreAnalysis> {
        let foot_traffic = self.foot_traffic_analysis(market_code, 12)?;
        let card_sales = self.card_sales_analysis(market_code, 12)?;
        let business_rates = self.business_rates_analysis(market_code)?;
        let dwell_time = self.dwell_time_analysis(market_code)?;

        // 업종이 지정되고 해당 상권에 존재할 때만 경쟁도를 반영합니다.
        let same_industry = match industry {
            Some(industry) => match self.same_industry_analysis(market_code, Some(industry))? {
                competition @ SameIndustryAnalysis::Competition(_) => Some(competition),
                SameIndustryAnalysis::Breakdown(_) => None,
            },
            None => None,
        };

        let foot_traffic_score = grade_score(&foot_traffic.grade);
        let card_sales_score = grade_score(&card_sales.grade);
        let business_rates_score = business_rates.total_score;
        let dwell_time_score = grade_score(&dwell_time.grade);

        let mut total_score = foot_traffic_score * WEIGHT_FOOT_TRAFFIC
            + card_sales_score * WEIGHT_CARD_SALES
            + business_rates_score * WEIGHT_BUSINESS_RATES
            + dwell_time_score * WEIGHT_DWELL_TIME;

        match &same_industry {
            Some(analysis) => {
                let competition_score = analysis.grade().map(grade_score).unwrap_or(60.0);
                total_score += competition_score * WEIGHT_COMPETITION;
            }
            None => {
                // 경쟁도 가중치 재정규화
                total_score /= 1.0 - WEIGHT_COMPETITION;
            }
        }

        let (final_grade, health_status) = if total_score >= 90.0 {
            ("A", "매우 건강")
        } else if total_score >= 80.0 {
            ("B", "건강")
        } else if total_score >= 70.0 {
            ("C", "보통")
        } else if total_score >= 60.0 {
            ("D", "주의")
        } else {
            ("F", "위험")
        };

        Ok(HealthScoreAnalysis {
            market_code: market_code.to_string(),
            industry: industry.map(str::to_string),
            total_score: round2(total_score),
            final_grade: final_grade.to_string(),
            health_status: health_status.to_string(),
            score_breakdown: ScoreBreakdown {
                foot_traffic: ScoreBreakdownEntry {
                    score: foot_traffic_score,
                    grade: foot_traffic.grade.clone(),
                    weight: WEIGHT_FOOT_TRAFFIC,
                },
                card_sales: ScoreBreakdownEntry {
                    score: card_sales_score,
                    grade: card_sales.grade.clone(),
                    weight: WEIGHT_CARD_SALES,
                },
                business_rates: ScoreBreakdownEntry {
                    score: business_rates_score,
                    grade: business_rates.grade.clone(),
                    weight: WEIGHT_BUSINESS_RATES,
                },
                dwell_time: ScoreBreakdownEntry {
                    score: dwell_time_score,
                    grade: dwell_time.grade.clone(),
                    weight: WEIGHT_DWELL_TIME,
                },
            },
            detailed_analysis: DetailedAnalysis {
                foot_traffic,
                card_sales,
                business_rates,
                dwell_time,
                same_industry,
            },
            recommendations: health_score_recommendations(final_grade),
        })
    }

    /// 종합 상권 진단
    pub fn comprehensive(
        &self,
        market_code: &str,
        industry: Option<&str>,
    ) -> AppResult<ComprehensiveAnalysis> {
        let foot_traffic = self.foot_traffic_analysis(market_code, 12)?;
        let card_sales = self.card_sales_analysis(market_code, 12)?;
        let same_industry = self.same_industry_analysis(market_code, industry)?;
        let business_rates = self.business_rates_analysis(market_code)?;
        let dwell_time = self.dwell_time_analysis(market_code)?;
        let health_score = self.health_score(market_code, industry)?;

        let key_insights = vec![
            format!("유동인구 변화율: {:.1}%", foot_traffic.average_monthly_change),
            format!("카드매출 변화율: {:.1}%", card_sales.average_monthly_change),
            format!("생존률: {:.1}%", business_rates.survival_rate),
            format!("평균 체류시간: {}분", dwell_time.average_dwell_time),
        ];

        let summary = ComprehensiveSummary {
            overall_grade: health_score.final_grade.clone(),
            health_status: health_score.health_status.clone(),
            total_score: health_score.total_score,
            key_insights,
        };

        Ok(ComprehensiveAnalysis {
            market_code: market_code.to_string(),
            industry: industry.map(str::to_string),
            analysis_timestamp: Utc::now().to_rfc3339(),
            indicators: ComprehensiveIndicators {
                foot_traffic,
                card_sales,
                same_industry,
                business_rates,
                dwell_time,
            },
            health_score,
            summary,
        })
    }
}

fn foot_traffic_text(change_rate: f64, grade: &str) -> String {
    match grade {
        "A" => format!(
            "유동인구가 월평균 {:.1}% 증가하여 매우 활발한 상권입니다.",
            change_rate
        ),
        "B" => format!(
            "유동인구가 월평균 {:.1}% 증가하여 양호한 성장세를 보입니다.",
            change_rate
        ),
        "C" => format!(
            "유동인구가 월평균 {:.1}% 변화하여 안정적인 상태입니다.",
            change_rate
        ),
        _ => format!(
            "유동인구가 월평균 {:.1}% 감소하여 주의가 필요합니다.",
            change_rate
        ),
    }
}

fn card_sales_text(change_rate: f64, grade: &str) -> String {
    match grade {
        "A" => format!(
            "카드매출이 월평균 {:.1}% 증가하여 소비활동이 매우 활발합니다.",
            change_rate
        ),
        "B" => format!(
            "카드매출이 월평균 {:.1}% 증가하여 양호한 소비 트렌드를 보입니다.",
            change_rate
        ),
        "C" => format!(
            "카드매출이 월평균 {:.1}% 변화하여 안정적인 소비 패턴입니다.",
            change_rate
        ),
        _ => format!(
            "카드매출이 월평균 {:.1}% 감소하여 소비력 저하가 우려됩니다.",
            change_rate
        ),
    }
}

fn competition_text(ratio: f64, level: &str) -> String {
    match level {
        "매우 높음" => format!(
            "동일업종 비율이 {:.1}%로 경쟁이 매우 치열합니다. 차별화 전략이 필수입니다.",
            ratio
        ),
        "높음" => format!(
            "동일업종 비율이 {:.1}%로 경쟁이 치열한 편입니다. 차별화가 필요합니다.",
            ratio
        ),
        "보통" => format!("동일업종 비율이 {:.1}%로 적당한 경쟁 수준입니다.", ratio),
        _ => format!(
            "동일업종 비율이 {:.1}%로 경쟁이 낮아 진입 기회가 좋습니다.",
            ratio
        ),
    }
}

fn business_rates_text(status: &str) -> String {
    match status {
        "매우 양호" => "창업·폐업 비율이 매우 양호하여 상권 활력이 높습니다.".to_string(),
        "양호" => "창업·폐업 비율이 양호하여 상권이 안정적으로 성장하고 있습니다.".to_string(),
        "보통" => "창업·폐업 비율이 보통 수준으로 상권이 안정적입니다.".to_string(),
        _ => "창업·폐업 비율에 우려가 있어 상권 활력 제고가 필요합니다.".to_string(),
    }
}

fn dwell_time_text(avg_time: f64, quality: &str) -> String {
    match quality {
        "매우 우수" => format!(
            "평균 체류시간이 {}분으로 매우 우수하여 고객 만족도가 높습니다.",
            avg_time
        ),
        "우수" => format!("평균 체류시간이 {}분으로 우수한 편입니다.", avg_time),
        "보통" => format!("평균 체류시간이 {}분으로 보통 수준입니다.", avg_time),
        _ => format!(
            "평균 체류시간이 {}분으로 부족하여 고객 유치 전략이 필요합니다.",
            avg_time
        ),
    }
}

fn health_score_recommendations(grade: &str) -> Vec<String> {
    let texts: [&str; 3] = match grade {
        "A" | "B" => [
            "현재 상권 상태가 양호합니다. 지속적인 모니터링을 권장합니다.",
            "기존 고객 유지와 신규 고객 확보에 집중하세요.",
            "상권 내 경쟁력을 유지하기 위한 차별화 전략을 수립하세요.",
        ],
        "C" => [
            "상권 상태가 보통 수준입니다. 개선 여지가 있습니다.",
            "유동인구 증가를 위한 마케팅 전략을 검토하세요.",
            "고객 체류시간 연장을 위한 서비스 개선을 고려하세요.",
        ],
        _ => [
            "상권 상태에 주의가 필요합니다. 신중한 진입을 권장합니다.",
            "상권 활성화 방안을 면밀히 검토하세요.",
            "대안 상권 검토를 권장합니다.",
        ],
    };

    texts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_stats_short_series_is_stable() {
        let stats = series_stats(&[150000]);
        assert_eq!(stats.average_monthly_change, 0.0);
        assert_eq!(stats.total_change, 0.0);
        assert_eq!(stats.trend, "안정");
    }

    #[test]
    fn test_series_stats_growth() {
        // 매월 +10%
        let stats = series_stats(&[100, 110, 121]);
        assert!((stats.average_monthly_change - 10.0).abs() < 1e-9);
        assert!((stats.total_change - 21.0).abs() < 1e-9);
        assert_eq!(stats.trend, "증가");
    }

    #[test]
    fn test_foot_traffic_grade_boundary_is_strict() {
        // 월평균 변화율이 정확히 5.0%면 A가 아닌 B
        let stats = series_stats(&[100, 105]);
        assert!((stats.average_monthly_change - 5.0).abs() < 1e-9);

        let service = CoreDiagnosisService::instance();
        let analysis = service.foot_traffic_analysis("10000", 12).unwrap();
        // 대전역 상권은 월평균 약 +2.6% → B
        assert_eq!(analysis.grade, "B");
        assert_eq!(analysis.trend, "증가");
        assert_eq!(analysis.current_monthly_traffic, 195000);
        assert_eq!(analysis.monthly_data.len(), 12);
    }

    #[test]
    fn test_foot_traffic_declining_market_is_d() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.foot_traffic_analysis("30000", 12).unwrap();

        assert_eq!(analysis.grade, "D");
        assert_eq!(analysis.trend, "감소");
        assert!(analysis.average_monthly_change < -5.0);
    }

    #[test]
    fn test_foot_traffic_unknown_market_is_not_found() {
        let service = CoreDiagnosisService::instance();
        let result = service.foot_traffic_analysis("99999", 12);

        match result {
            Err(AppError::NotFound(msg)) => {
                assert_eq!(msg, "해당 상권의 유동인구 데이터가 없습니다.");
            }
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_period_months_is_clamped() {
        let service = CoreDiagnosisService::instance();

        let three = service.foot_traffic_analysis("10000", 3).unwrap();
        assert_eq!(three.monthly_data.len(), 3);

        // 0은 최소 1개월로, 100은 전체 길이로 클램핑
        let zero = service.foot_traffic_analysis("10000", 0).unwrap();
        assert_eq!(zero.monthly_data.len(), 1);
        assert_eq!(zero.trend, "안정");
        assert_eq!(zero.average_monthly_change, 0.0);

        let huge = service.foot_traffic_analysis("10000", 100).unwrap();
        assert_eq!(huge.monthly_data.len(), 12);
    }

    #[test]
    fn test_card_sales_thresholds() {
        let service = CoreDiagnosisService::instance();

        // 대전역 상권 월평균 약 +1.6% → B
        let growing = service.card_sales_analysis("10000", 12).unwrap();
        assert_eq!(growing.grade, "B");

        // 둔산 상권 월평균 약 -5% → D
        let declining = service.card_sales_analysis("30000", 12).unwrap();
        assert_eq!(declining.grade, "D");
    }

    #[test]
    fn test_same_industry_competition_grading() {
        let service = CoreDiagnosisService::instance();

        // 식음료업 45/132 = 34.09% → 매우 높음 / D
        let analysis = service
            .same_industry_analysis("10000", Some("식음료업"))
            .unwrap();

        match analysis {
            SameIndustryAnalysis::Competition(c) => {
                assert_eq!(c.business_count, 45);
                assert_eq!(c.total_businesses, 132);
                assert!((c.industry_ratio - 34.09).abs() < 0.01);
                assert_eq!(c.competition_level, "매우 높음");
                assert_eq!(c.grade, "D");
            }
            _ => panic!("Expected competition analysis"),
        }
    }

    #[test]
    fn test_same_industry_without_industry_returns_breakdown() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.same_industry_analysis("10000", None).unwrap();

        match analysis {
            SameIndustryAnalysis::Breakdown(b) => {
                assert_eq!(b.total_businesses, 132);
                assert_eq!(b.industry_breakdown.get("식음료업"), Some(&45));
            }
            _ => panic!("Expected breakdown"),
        }
    }

    #[test]
    fn test_unknown_industry_falls_back_to_breakdown() {
        let service = CoreDiagnosisService::instance();
        let analysis = service
            .same_industry_analysis("10000", Some("없는업종"))
            .unwrap();

        assert!(matches!(analysis, SameIndustryAnalysis::Breakdown(_)));
    }

    #[test]
    fn test_business_rates_formula() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.business_rates_analysis("10000").unwrap();

        // startup: min(12.5/15*100, 100) = 83.33, closure: 100-83 = 17.0
        // total = 83.33*0.3 + 17.0*0.3 + 91.7*0.4 = 66.78
        assert!((analysis.total_score - 66.78).abs() < 0.01);
        assert_eq!(analysis.grade, "D");
        assert_eq!(analysis.health_status, "우려");
    }

    #[test]
    fn test_business_rates_clamping() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.business_rates_analysis("30000").unwrap();

        // 폐업률 14.8% → closure_score는 0으로 클램핑
        // total = 41.33*0.3 + 0 + 78.5*0.4 = 43.8
        assert!((analysis.total_score - 43.8).abs() < 0.01);
        assert_eq!(analysis.grade, "D");
    }

    #[test]
    fn test_dwell_time_boundaries() {
        let service = CoreDiagnosisService::instance();

        // 45분은 경계값 포함 → B
        let b = service.dwell_time_analysis("10000").unwrap();
        assert_eq!(b.grade, "B");
        assert_eq!(b.time_quality, "우수");

        // 22분 → D
        let d = service.dwell_time_analysis("30000").unwrap();
        assert_eq!(d.grade, "D");
    }

    #[test]
    fn test_health_score_renormalizes_without_industry() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.health_score("10000", None).unwrap();

        // (80*0.25 + 80*0.25 + 66.78*0.25 + 80*0.15) / 0.9 = 76.33
        assert!((analysis.total_score - 76.33).abs() < 0.01);
        assert_eq!(analysis.final_grade, "C");
        assert_eq!(analysis.health_status, "보통");
        assert!(analysis.detailed_analysis.same_industry.is_none());
        assert_eq!(analysis.recommendations.len(), 3);
    }

    #[test]
    fn test_health_score_with_industry_includes_competition() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.health_score("10000", Some("식음료업")).unwrap();

        // 68.695 + 40*0.1 = 72.695, 소수 둘째 자리 반올림 시 72.69 (재정규화 없음)
        assert!((analysis.total_score - 72.69).abs() < 0.01);
        assert_eq!(analysis.final_grade, "C");
        assert!(analysis.detailed_analysis.same_industry.is_some());
    }

    #[test]
    fn test_health_score_declining_market_is_f() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.health_score("30000", None).unwrap();

        assert_eq!(analysis.final_grade, "F");
        assert_eq!(analysis.health_status, "위험");
        assert!(analysis.total_score < 60.0);
    }

    #[test]
    fn test_comprehensive_summary_insights() {
        let service = CoreDiagnosisService::instance();
        let analysis = service.comprehensive("10000", Some("식음료업")).unwrap();

        assert_eq!(analysis.summary.key_insights.len(), 4);
        assert!(analysis.summary.key_insights[2].starts_with("생존률: 91.7%"));
        assert!(analysis.summary.key_insights[3].contains("45분"));
        assert_eq!(analysis.summary.overall_grade, analysis.health_score.final_grade);
    }
}
