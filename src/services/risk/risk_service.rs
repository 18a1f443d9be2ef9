//! 리스크 유형 분류 서비스
//!
//! 핵심 지표 점수를 조합하여 상권을 네 가지 리스크 유형으로 분류합니다.
//!
//! - 유입 저조형: 유동인구와 체류시간이 약한 상권
//! - 과포화 경쟁형: 동일업종 밀집도가 높은 상권
//! - 소비력 약형: 카드매출과 상권 활력이 약한 상권
//! - 성장 잠재형: 다른 리스크가 모두 낮아 성장 여력이 있는 상권
//!
//! 각 유형의 점수는 0-100이며 높을수록 해당 유형의 성격이 강합니다.

use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::diagnosis::response::SameIndustryAnalysis;
use crate::domain::dto::risk::response::{
    DetailedRiskAnalysis, ImpactAssessment, MitigationStrategy, RiskClassification,
    RiskIndicators, RiskSuccessCase, RiskTypeInfo,
};
use crate::services::diagnosis::{CoreDiagnosisService, MarketDataStore};

pub const RISK_TYPE_LOW_INFLOW: &str = "유입 저조형";
pub const RISK_TYPE_OVERSATURATED: &str = "과포화 경쟁형";
pub const RISK_TYPE_WEAK_SPENDING: &str = "소비력 약형";
pub const RISK_TYPE_GROWTH_POTENTIAL: &str = "성장 잠재형";

/// 리스크 분류 서비스
pub struct RiskClassificationService;

static INSTANCE: Lazy<Arc<RiskClassificationService>> =
    Lazy::new(|| Arc::new(RiskClassificationService));

inventory::submit! {
    ServiceRegistration {
        name: "RiskClassificationService",
        constructor: || { RiskClassificationService::instance(); },
    }
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

fn risk_level(score: f64) -> &'static str {
    if score < 40.0 {
        "낮음"
    } else if score < 60.0 {
        "보통"
    } else if score < 80.0 {
        "높음"
    } else {
        "매우높음"
    }
}

impl RiskClassificationService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<RiskClassificationService> {
        INSTANCE.clone()
    }

    /// 상권 리스크 분류
    pub fn classify(
        &self,
        market_code: &str,
        industry: Option<&str>,
    ) -> AppResult<RiskClassification> {
        let store = MarketDataStore::instance();
        let market = store
            .find(market_code)
            .ok_or_else(|| AppError::NotFound("해당 상권 데이터가 없습니다.".to_string()))?;

        let diagnosis = CoreDiagnosisService::instance();

        let foot_traffic = diagnosis.foot_traffic_analysis(market_code, 12)?;
        let card_sales = diagnosis.card_sales_analysis(market_code, 12)?;
        let business_rates = diagnosis.business_rates_analysis(market_code)?;
        let dwell_time = diagnosis.dwell_time_analysis(market_code)?;

        let foot_score = grade_score(&foot_traffic.grade);
        let sales_score = grade_score(&card_sales.grade);
        let dwell_score = grade_score(&dwell_time.grade);
        let rates_score = business_rates.total_score;
        let competition_score = self.competition_score(market_code, industry)?;

        // 유형별 리스크 점수 (높을수록 해당 유형 성격이 강함)
        let inflow_risk = 0.6 * (100.0 - foot_score) + 0.4 * (100.0 - dwell_score);
        let competition_risk = 0.7 * (100.0 - competition_score) + 0.3 * (100.0 - rates_score);
        let spending_risk = 0.6 * (100.0 - sales_score) + 0.4 * (100.0 - rates_score);
        let growth_potential =
            100.0 - (inflow_risk + competition_risk + spending_risk) / 3.0;

        let risk_scores = BTreeMap::from([
            (RISK_TYPE_LOW_INFLOW.to_string(), round2(inflow_risk)),
            (RISK_TYPE_OVERSATURATED.to_string(), round2(competition_risk)),
            (RISK_TYPE_WEAK_SPENDING.to_string(), round2(spending_risk)),
            (
                RISK_TYPE_GROWTH_POTENTIAL.to_string(),
                round2(growth_potential),
            ),
        ]);

        // 고정 순서에서 최대 점수를 가진 유형이 주요 유형
        let ordered = [
            (RISK_TYPE_LOW_INFLOW, inflow_risk),
            (RISK_TYPE_OVERSATURATED, competition_risk),
            (RISK_TYPE_WEAK_SPENDING, spending_risk),
            (RISK_TYPE_GROWTH_POTENTIAL, growth_potential),
        ];
        let (primary_type, primary_score) = ordered
            .iter()
            .fold(ordered[0], |best, current| {
                if current.1 > best.1 { *current } else { best }
            });

        let mut risk_factors = Vec::new();
        if foot_score <= 60.0 {
            risk_factors.push("유동인구 감소".to_string());
        }
        if sales_score <= 60.0 {
            risk_factors.push("카드매출 정체".to_string());
        }
        if competition_score <= 60.0 {
            risk_factors.push("동일업종 과다".to_string());
        }
        if rates_score < 70.0 {
            risk_factors.push("폐업률 대비 창업률 부족".to_string());
        }
        if dwell_score <= 60.0 {
            risk_factors.push("짧은 고객 체류시간".to_string());
        }

        Ok(RiskClassification {
            market_code: market_code.to_string(),
            market_name: market.name.clone(),
            industry: industry.map(str::to_string),
            primary_risk_type: primary_type.to_string(),
            primary_risk_score: round2(primary_score),
            risk_level: risk_level(primary_score).to_string(),
            risk_scores,
            risk_factors,
            analysis: classification_text(primary_type),
            recommendations: type_recommendations(primary_type),
            success_probability: round2(100.0 - primary_score / 2.0),
            analysis_date: Utc::now().to_rfc3339(),
        })
    }

    /// 업종 경쟁도 점수
    ///
    /// 업종이 지정되면 해당 업종의 경쟁 등급을, 미지정이면 상권 내
    /// 최대 업종 비율을 동일한 기준으로 등급화하여 사용합니다.
    fn competition_score(&self, market_code: &str, industry: Option<&str>) -> AppResult<f64> {
        let diagnosis = CoreDiagnosisService::instance();

        match diagnosis.same_industry_analysis(market_code, industry)? {
            SameIndustryAnalysis::Competition(c) => Ok(grade_score(&c.grade)),
            SameIndustryAnalysis::Breakdown(b) => {
                let max_count = b.industry_breakdown.values().copied().max().unwrap_or(0);
                let ratio = if b.total_businesses == 0 {
                    0.0
                } else {
                    (max_count as f64 / b.total_businesses as f64) * 100.0
                };

                let grade = if ratio > 30.0 {
                    "D"
                } else if ratio > 20.0 {
                    "C"
                } else if ratio > 10.0 {
                    "B"
                } else {
                    "A"
                };
                Ok(grade_score(grade))
            }
        }
    }

    /// 상세 리스크 분석
    pub fn detailed_analysis(
        &self,
        market_code: &str,
        risk_type: &str,
        industry: Option<&str>,
    ) -> AppResult<DetailedRiskAnalysis> {
        let store = MarketDataStore::instance();
        let market = store
            .find(market_code)
            .ok_or_else(|| AppError::NotFound("해당 상권 데이터가 없습니다.".to_string()))?;

        if !Self::is_known_type(risk_type) {
            return Err(AppError::ValidationError(format!(
                "알 수 없는 리스크 유형입니다: {}",
                risk_type
            )));
        }

        let diagnosis = CoreDiagnosisService::instance();
        let competition_score = self.competition_score(market_code, industry)?;
        let business_rates = diagnosis.business_rates_analysis(market_code)?;

        // 정량 지표는 경쟁도와 상권 활력에서 유도
        let saturation = 100.0 - competition_score;
        let indicators = RiskIndicators {
            competition_density: round2(saturation / 10.0),
            market_saturation: round2(saturation),
            price_competition: round2(saturation / 12.5),
            customer_acquisition_cost: round2(10000.0 + saturation * 150.0),
        };

        Ok(DetailedRiskAnalysis {
            market_code: market_code.to_string(),
            market_name: market.name.clone(),
            risk_type: risk_type.to_string(),
            risk_description: type_description(risk_type).to_string(),
            risk_indicators: indicators,
            impact_assessment: impact_assessment(risk_type, business_rates.total_score),
            mitigation_strategies: self.mitigation_strategies(risk_type)?,
            success_cases: success_cases(risk_type),
            analysis_date: Utc::now().to_rfc3339(),
        })
    }

    /// 네 가지 리스크 유형 카탈로그
    pub fn risk_types(&self) -> Vec<RiskTypeInfo> {
        vec![
            RiskTypeInfo {
                risk_type: RISK_TYPE_LOW_INFLOW.to_string(),
                description: type_description(RISK_TYPE_LOW_INFLOW).to_string(),
                main_indicators: vec!["유동인구 변화율".to_string(), "평균 체류시간".to_string()],
            },
            RiskTypeInfo {
                risk_type: RISK_TYPE_OVERSATURATED.to_string(),
                description: type_description(RISK_TYPE_OVERSATURATED).to_string(),
                main_indicators: vec!["동일업종 비율".to_string(), "창업·폐업 비율".to_string()],
            },
            RiskTypeInfo {
                risk_type: RISK_TYPE_WEAK_SPENDING.to_string(),
                description: type_description(RISK_TYPE_WEAK_SPENDING).to_string(),
                main_indicators: vec!["카드매출 변화율".to_string(), "생존률".to_string()],
            },
            RiskTypeInfo {
                risk_type: RISK_TYPE_GROWTH_POTENTIAL.to_string(),
                description: type_description(RISK_TYPE_GROWTH_POTENTIAL).to_string(),
                main_indicators: vec![
                    "유동인구 변화율".to_string(),
                    "카드매출 변화율".to_string(),
                    "동일업종 비율".to_string(),
                ],
            },
        ]
    }

    /// 유형별 완화 전략
    pub fn mitigation_strategies(&self, risk_type: &str) -> AppResult<Vec<MitigationStrategy>> {
        if !Self::is_known_type(risk_type) {
            return Err(AppError::NotFound(format!(
                "해당 리스크 유형의 완화 전략이 없습니다: {}",
                risk_type
            )));
        }

        Ok(mitigation_catalog(risk_type))
    }

    fn is_known_type(risk_type: &str) -> bool {
        matches!(
            risk_type,
            RISK_TYPE_LOW_INFLOW
                | RISK_TYPE_OVERSATURATED
                | RISK_TYPE_WEAK_SPENDING
                | RISK_TYPE_GROWTH_POTENTIAL
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn type_description(risk_type: &str) -> &'static str {
    match risk_type {
        RISK_TYPE_LOW_INFLOW => "유동인구와 체류시간이 부족하여 고객 유입이 저조한 상권",
        RISK_TYPE_OVERSATURATED => "동일업종 사업체가 과도하게 많아 경쟁이 치열한 상권",
        RISK_TYPE_WEAK_SPENDING => "카드매출과 상권 활력이 약해 소비력이 낮은 상권",
        _ => "주요 리스크가 낮아 성장 여력이 있는 상권",
    }
}

fn classification_text(risk_type: &str) -> String {
    match risk_type {
        RISK_TYPE_LOW_INFLOW => {
            "고객 유입이 저조하여 방문 동기 부여와 접근성 개선이 필요합니다.".to_string()
        }
        RISK_TYPE_OVERSATURATED => {
            "동일업종 사업체가 과도하게 많아 경쟁이 치열하며, 신규 진입 시 어려움이 예상됩니다."
                .to_string()
        }
        RISK_TYPE_WEAK_SPENDING => {
            "소비력이 약한 상권으로 객단가 제고와 소비층 확대 전략이 필요합니다.".to_string()
        }
        _ => "주요 리스크 요인이 낮아 성장 잠재력이 높은 상권입니다.".to_string(),
    }
}

fn type_recommendations(risk_type: &str) -> Vec<String> {
    let texts: &[&str] = match risk_type {
        RISK_TYPE_LOW_INFLOW => &[
            "SNS 마케팅으로 신규 고객 유입을 확대하세요.",
            "체류시간 연장을 위한 공간·서비스 개선을 검토하세요.",
            "인근 거점과 연계한 방문 동선을 설계하세요.",
        ],
        RISK_TYPE_OVERSATURATED => &[
            "차별화된 컨셉 도입",
            "고객층 세분화",
            "온라인 마케팅 강화",
        ],
        RISK_TYPE_WEAK_SPENDING => &[
            "객단가 상승을 위한 상품 다양화를 추진하세요.",
            "프리미엄 고객층 확보 전략을 검토하세요.",
            "비용 구조를 점검하여 수익성을 방어하세요.",
        ],
        _ => &[
            "성장 모멘텀 유지를 위한 선제적 투자를 검토하세요.",
            "고객 충성도 프로그램으로 기반을 다지세요.",
            "상권 변화 지표를 주기적으로 모니터링하세요.",
        ],
    };

    texts.iter().map(|s| s.to_string()).collect()
}

fn impact_assessment(risk_type: &str, rates_score: f64) -> ImpactAssessment {
    let vitality = if rates_score >= 80.0 {
        "낮음"
    } else if rates_score >= 60.0 {
        "중간"
    } else {
        "높음"
    };

    match risk_type {
        RISK_TYPE_LOW_INFLOW => ImpactAssessment {
            revenue_impact: "높음".to_string(),
            profit_margin_impact: "중간".to_string(),
            market_share_impact: "중간".to_string(),
            growth_potential_impact: vitality.to_string(),
        },
        RISK_TYPE_OVERSATURATED => ImpactAssessment {
            revenue_impact: "중간".to_string(),
            profit_margin_impact: "높음".to_string(),
            market_share_impact: "높음".to_string(),
            growth_potential_impact: vitality.to_string(),
        },
        RISK_TYPE_WEAK_SPENDING => ImpactAssessment {
            revenue_impact: "높음".to_string(),
            profit_margin_impact: "높음".to_string(),
            market_share_impact: "중간".to_string(),
            growth_potential_impact: vitality.to_string(),
        },
        _ => ImpactAssessment {
            revenue_impact: "낮음".to_string(),
            profit_margin_impact: "낮음".to_string(),
            market_share_impact: "낮음".to_string(),
            growth_potential_impact: "낮음".to_string(),
        },
    }
}

fn mitigation_catalog(risk_type: &str) -> Vec<MitigationStrategy> {
    let entries: &[(&str, &str, &str, &str, &str, &str)] = match risk_type {
        RISK_TYPE_LOW_INFLOW => &[
            (
                "지역 연계 마케팅",
                "인근 관광지·오피스와 연계한 방문 동기 부여 캠페인을 운영",
                "쉬움",
                "중간",
                "낮음",
                "1-3개월",
            ),
            (
                "체류형 공간 개선",
                "좌석·동선·콘텐츠를 개선하여 고객 체류시간을 연장",
                "중간",
                "높음",
                "중간",
                "3-6개월",
            ),
        ],
        RISK_TYPE_OVERSATURATED => &[
            (
                "차별화된 컨셉 도입",
                "고유한 브랜드 아이덴티티와 차별화된 서비스로 경쟁 우위를 확보",
                "중간",
                "높음",
                "중간",
                "3-6개월",
            ),
            (
                "틈새 고객층 공략",
                "고객층 세분화를 통해 경쟁이 덜한 세그먼트에 집중",
                "중간",
                "중간",
                "낮음",
                "2-4개월",
            ),
        ],
        RISK_TYPE_WEAK_SPENDING => &[
            (
                "상품 다양화",
                "객단가 상승을 위한 상품·메뉴 라인업 확대",
                "쉬움",
                "중간",
                "중간",
                "2-4개월",
            ),
            (
                "프리미엄 라인 도입",
                "소비력 있는 고객층을 겨냥한 프리미엄 상품 출시",
                "어려움",
                "높음",
                "높음",
                "6-12개월",
            ),
        ],
        _ => &[
            (
                "선제적 확장 투자",
                "성장 모멘텀이 유지될 때 좌석·인력·채널을 선제 확충",
                "중간",
                "높음",
                "높음",
                "3-6개월",
            ),
            (
                "고객 충성도 프로그램",
                "멤버십과 리워드로 재방문율을 높여 성장 기반을 강화",
                "쉬움",
                "중간",
                "낮음",
                "1-2개월",
            ),
        ],
    };

    entries
        .iter()
        .map(
            |(name, description, difficulty, effectiveness, investment, timeline)| {
                MitigationStrategy {
                    strategy_name: name.to_string(),
                    description: description.to_string(),
                    implementation_difficulty: difficulty.to_string(),
                    expected_effectiveness: effectiveness.to_string(),
                    required_investment: investment.to_string(),
                    timeline: timeline.to_string(),
                }
            },
        )
        .collect()
}

fn success_cases(risk_type: &str) -> Vec<RiskSuccessCase> {
    let entries: &[(&str, &str, &str, &[&str])] = match risk_type {
        RISK_TYPE_LOW_INFLOW => &[(
            "대전 골목상권 B의 유입 반등",
            "지역 축제 연계 이벤트와 SNS 캠페인으로 방문객을 회복",
            "월 방문객 40% 증가, 주말 매출 1.5배",
            &["지역 연계", "온라인 홍보", "체류형 콘텐츠"],
        )],
        RISK_TYPE_OVERSATURATED => &[(
            "대전 카페 A의 차별화 성공",
            "독특한 인테리어와 특별한 메뉴로 경쟁에서 승리",
            "매출 30% 증가, 고객 충성도 향상",
            &["독창적 컨셉", "고품질 서비스", "지속적 혁신"],
        )],
        RISK_TYPE_WEAK_SPENDING => &[(
            "분식집 C의 객단가 개선",
            "세트 메뉴와 프리미엄 라인 도입으로 객단가를 끌어올림",
            "객단가 25% 상승, 재방문율 유지",
            &["메뉴 재설계", "가격 전략", "고객 피드백 반영"],
        )],
        _ => &[(
            "신도시 베이커리 D의 선제 확장",
            "성장기 상권에서 2호점을 선제 출점하여 시장을 선점",
            "지역 점유율 1위, 매출 2배",
            &["시장 선점", "브랜드 일관성", "지표 기반 의사결정"],
        )],
    };

    entries
        .iter()
        .map(|(name, description, results, factors)| RiskSuccessCase {
            case_name: name.to_string(),
            description: description.to_string(),
            results: results.to_string(),
            key_factors: factors.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declining_market_is_low_inflow() {
        let service = RiskClassificationService::instance();
        let result = service.classify("30000", None).unwrap();

        assert_eq!(result.primary_risk_type, RISK_TYPE_LOW_INFLOW);
        assert_eq!(result.risk_level, "높음");
        assert!(result.risk_factors.contains(&"유동인구 감소".to_string()));
        assert!((result.success_probability - (100.0 - result.primary_risk_score / 2.0)).abs() < 0.01);
    }

    #[test]
    fn test_healthy_market_is_growth_potential() {
        let service = RiskClassificationService::instance();
        let result = service.classify("10000", Some("식음료업")).unwrap();

        assert_eq!(result.primary_risk_type, RISK_TYPE_GROWTH_POTENTIAL);
        assert_eq!(result.risk_scores.len(), 4);
    }

    #[test]
    fn test_unknown_market_is_not_found() {
        let service = RiskClassificationService::instance();
        assert!(matches!(
            service.classify("99999", None),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(risk_level(39.99), "낮음");
        assert_eq!(risk_level(40.0), "보통");
        assert_eq!(risk_level(60.0), "높음");
        assert_eq!(risk_level(80.0), "매우높음");
    }

    #[test]
    fn test_detailed_analysis_rejects_unknown_type() {
        let service = RiskClassificationService::instance();
        let result = service.detailed_analysis("10000", "없는유형", None);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_detailed_analysis_has_strategies_and_cases() {
        let service = RiskClassificationService::instance();
        let analysis = service
            .detailed_analysis("10000", RISK_TYPE_OVERSATURATED, Some("식음료업"))
            .unwrap();

        assert_eq!(analysis.risk_type, RISK_TYPE_OVERSATURATED);
        assert!(!analysis.mitigation_strategies.is_empty());
        assert!(!analysis.success_cases.is_empty());
        assert!(analysis.risk_indicators.market_saturation > 0.0);
    }

    #[test]
    fn test_risk_types_catalog() {
        let service = RiskClassificationService::instance();
        let types = service.risk_types();

        assert_eq!(types.len(), 4);
        assert!(types.iter().any(|t| t.risk_type == RISK_TYPE_WEAK_SPENDING));
    }

    #[test]
    fn test_mitigation_strategies_unknown_type() {
        let service = RiskClassificationService::instance();
        assert!(matches!(
            service.mitigation_strategies("없는유형"),
            Err(AppError::NotFound(_))
        ));
    }
}
