//! 지원 도구 서비스
//!
//! 소상공인 지원센터·전문가 상담·정책 추천·성공 사례를 제공합니다.
//! 디렉터리는 정적 카탈로그이며, 정책 추천만 사용자 프로필에 따라
//! 매칭 점수를 계산합니다.

use chrono::Utc;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::support::request::PolicyRecommendationRequest;
use crate::domain::dto::support::response::{
    ExpertProfile, Policy, PolicyRecommendations, SupportCenter, SupportSuccessCase,
};

/// 지원 도구 서비스
pub struct SupportToolsService;

static INSTANCE: Lazy<Arc<SupportToolsService>> = Lazy::new(|| Arc::new(SupportToolsService));

inventory::submit! {
    ServiceRegistration {
        name: "SupportToolsService",
        constructor: || { SupportToolsService::instance(); },
    }
}

impl SupportToolsService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<SupportToolsService> {
        INSTANCE.clone()
    }

    /// 지원센터 목록 (지역 필터)
    pub fn support_centers(&self, region: Option<&str>) -> Vec<SupportCenter> {
        center_catalog()
            .into_iter()
            .filter(|center| region.is_none_or(|r| center.region == r))
            .collect()
    }

    /// 전문가 목록 (전문 분야 필터)
    pub fn experts(&self, specialty: Option<&str>) -> Vec<ExpertProfile> {
        expert_catalog()
            .into_iter()
            .filter(|expert| {
                specialty.is_none_or(|s| expert.specialties.iter().any(|sp| sp == s))
            })
            .collect()
    }

    /// 맞춤형 정책 추천
    ///
    /// 창업 단계·업종·자본금 조건으로 매칭 점수를 계산하고
    /// 점수 내림차순으로 정렬합니다.
    pub fn policy_recommendations(
        &self,
        request: &PolicyRecommendationRequest,
    ) -> AppResult<PolicyRecommendations> {
        let (_profile, business_type, business_stage) = request.validated()?;

        let mut policies: Vec<Policy> = policy_catalog()
            .into_iter()
            .map(|(policy, criteria)| {
                let score = criteria.match_score(
                    &business_type,
                    &business_stage,
                    request.capital_amount,
                    request.employment_plan,
                );
                Policy {
                    match_score: score,
                    ..policy
                }
            })
            .filter(|policy| policy.match_score > 0.0)
            .collect();

        policies.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(PolicyRecommendations {
            total_count: policies.len(),
            recommended_policies: policies,
            generation_date: Utc::now().to_rfc3339(),
        })
    }

    /// 창업 성공 사례 (업종 필터)
    pub fn success_cases(&self, industry: Option<&str>) -> Vec<SupportSuccessCase> {
        success_case_catalog()
            .into_iter()
            .filter(|case| industry.is_none_or(|i| case.industry == i))
            .collect()
    }
}

/// 정책별 매칭 조건
struct PolicyCriteria {
    /// 대상 창업 단계 (빈 목록이면 전체)
    stages: &'static [&'static str],
    /// 대상 업종 (빈 목록이면 전체)
    business_types: &'static [&'static str],
    /// 자본금 상한 (만원)
    max_capital: Option<i64>,
    /// 고용 계획 요구 여부
    requires_employment: bool,
}

impl PolicyCriteria {
    /// 기본 50점에서 조건 충족마다 가산, 미충족 필수 조건은 0점 처리.
    fn match_score(
        &self,
        business_type: &str,
        business_stage: &str,
        capital_amount: Option<i64>,
        employment_plan: Option<u32>,
    ) -> f64 {
        let mut score: f64 = 50.0;

        if !self.stages.is_empty() {
            if self.stages.contains(&business_stage) {
                score += 20.0;
            } else {
                return 0.0;
            }
        }

        if !self.business_types.is_empty() {
            if self.business_types.contains(&business_type) {
                score += 15.0;
            } else {
                score -= 20.0;
            }
        }

        if let Some(max) = self.max_capital {
            match capital_amount {
                Some(capital) if capital <= max => score += 10.0,
                Some(_) => return 0.0,
                None => {}
            }
        }

        if self.requires_employment {
            match employment_plan {
                Some(plan) if plan > 0 => score += 5.0,
                _ => return 0.0,
            }
        }

        score.clamp(0.0, 100.0)
    }
}

fn center(
    id: &str,
    name: &str,
    region: &str,
    address: &str,
    phone: &str,
    email: &str,
    website: &str,
    services: &[&str],
    operating_hours: &str,
    specialties: &[&str],
    consultation_fee: &str,
) -> SupportCenter {
    SupportCenter {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        website: website.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
        operating_hours: operating_hours.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        consultation_fee: consultation_fee.to_string(),
        languages: vec!["한국어".to_string()],
        accessibility: vec!["주차 가능".to_string(), "휠체어 접근 가능".to_string()],
    }
}

fn center_catalog() -> Vec<SupportCenter> {
    vec![
        center(
            "CENTER_001",
            "대전 소상공인지원센터",
            "동구",
            "대전광역시 동구 중앙로 101",
            "042-123-4567",
            "dongu@sbiz.or.kr",
            "https://www.sbiz.or.kr",
            &["창업 상담", "경영 진단", "자금 지원 안내", "교육 프로그램"],
            "평일 09:00-18:00",
            &["창업 지원", "자금 조달"],
            "무료",
        ),
        center(
            "CENTER_002",
            "유성구 창업지원센터",
            "유성구",
            "대전광역시 유성구 대학로 99",
            "042-234-5678",
            "yuseong@startup.or.kr",
            "https://www.yuseong-startup.or.kr",
            &["기술 창업 상담", "입주 공간 지원", "투자 연계", "멘토링"],
            "평일 09:00-18:00",
            &["기술 창업", "투자 유치"],
            "무료",
        ),
        center(
            "CENTER_003",
            "서구 상권활성화재단",
            "서구",
            "대전광역시 서구 둔산로 201",
            "042-345-6789",
            "seogu@market.or.kr",
            "https://www.seogu-market.or.kr",
            &["상권 분석 지원", "점포 경영 개선", "마케팅 지원"],
            "평일 09:00-18:00, 토요일 09:00-13:00",
            &["상권 분석", "마케팅"],
            "무료",
        ),
    ]
}

fn expert(
    expert_id: &str,
    name: &str,
    title: &str,
    company: &str,
    experience_years: u32,
    specialties: &[&str],
    consultation_types: &[&str],
    consultation_fee: u32,
    available_times: &[&str],
    rating: f64,
    review_count: u32,
    success_cases: &[&str],
) -> ExpertProfile {
    ExpertProfile {
        expert_id: expert_id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        experience_years,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        consultation_types: consultation_types.iter().map(|s| s.to_string()).collect(),
        consultation_fee,
        available_times: available_times.iter().map(|s| s.to_string()).collect(),
        rating,
        review_count,
        success_cases: success_cases.iter().map(|s| s.to_string()).collect(),
    }
}

fn expert_catalog() -> Vec<ExpertProfile> {
    vec![
        expert(
            "EXPERT_001",
            "김상권",
            "상권분석 전문위원",
            "소상공인시장진흥공단",
            15,
            &["상권 분석", "입지 선정"],
            &["대면 상담", "화상 상담"],
            50000,
            &["평일 10:00-17:00"],
            4.8,
            127,
            &["둔산동 카페 입지 컨설팅", "대전역 상권 진입 전략"],
        ),
        expert(
            "EXPERT_002",
            "이마케팅",
            "디지털마케팅 컨설턴트",
            "로컬브랜딩랩",
            9,
            &["마케팅", "브랜딩"],
            &["화상 상담", "전화 상담"],
            40000,
            &["평일 14:00-20:00", "토요일 10:00-14:00"],
            4.6,
            89,
            &["음식점 SNS 바이럴 캠페인", "소매점 온라인 전환"],
        ),
        expert(
            "EXPERT_003",
            "박재무",
            "세무·자금 전문가",
            "한밭세무회계",
            20,
            &["자금 조달", "세무"],
            &["대면 상담"],
            60000,
            &["평일 09:00-18:00"],
            4.9,
            203,
            &["정책자금 조달 지원", "창업 초기 세무 설계"],
        ),
    ]
}

fn policy(
    policy_id: &str,
    policy_name: &str,
    organization: &str,
    description: &str,
    support_amount: &str,
    eligibility: &[&str],
    application_period: &str,
    required_documents: &[&str],
    contact_info: &str,
    website: &str,
    application_difficulty: &str,
) -> Policy {
    Policy {
        policy_id: policy_id.to_string(),
        policy_name: policy_name.to_string(),
        organization: organization.to_string(),
        description: description.to_string(),
        support_amount: support_amount.to_string(),
        eligibility: eligibility.iter().map(|s| s.to_string()).collect(),
        application_period: application_period.to_string(),
        required_documents: required_documents.iter().map(|s| s.to_string()).collect(),
        contact_info: contact_info.to_string(),
        website: website.to_string(),
        match_score: 0.0,
        application_difficulty: application_difficulty.to_string(),
    }
}

fn policy_catalog() -> Vec<(Policy, PolicyCriteria)> {
    vec![
        (
            policy(
                "POLICY_001",
                "예비창업패키지",
                "중소벤처기업부",
                "예비 창업자의 사업화 자금과 창업 교육·멘토링을 지원",
                "최대 1억원",
                &["예비 창업자", "공고일 기준 사업자 미등록"],
                "매년 2-3월",
                &["사업계획서", "신분증 사본"],
                "1357 (중소기업 통합콜센터)",
                "https://www.k-startup.go.kr",
                "중간",
            ),
            PolicyCriteria {
                stages: &["PLANNING"],
                business_types: &[],
                max_capital: None,
                requires_employment: false,
            },
        ),
        (
            policy(
                "POLICY_002",
                "소상공인 정책자금 (일반경영안정자금)",
                "소상공인시장진흥공단",
                "운영자금이 부족한 소상공인에게 저금리 융자를 지원",
                "최대 7천만원 (융자)",
                &["업력 1년 이상 소상공인"],
                "연중 상시",
                &["사업자등록증", "부가가치세 과세표준증명"],
                "042-363-7130",
                "https://ols.semas.or.kr",
                "쉬움",
            ),
            PolicyCriteria {
                stages: &["STARTUP", "GROWTH", "MATURE"],
                business_types: &[],
                max_capital: Some(30000),
                requires_employment: false,
            },
        ),
        (
            policy(
                "POLICY_003",
                "청년 고용 창출 장려금",
                "고용노동부",
                "청년을 신규 채용한 소상공인에게 인건비 일부를 지원",
                "1인당 연 최대 900만원",
                &["청년(만 15-34세) 정규직 신규 채용"],
                "연중 상시",
                &["사업자등록증", "근로계약서", "고용보험 가입 이력"],
                "1350 (고용노동부 상담센터)",
                "https://www.work24.go.kr",
                "중간",
            ),
            PolicyCriteria {
                stages: &["STARTUP", "GROWTH"],
                business_types: &[],
                max_capital: None,
                requires_employment: true,
            },
        ),
        (
            policy(
                "POLICY_004",
                "외식업 경영환경 개선 지원",
                "대전광역시",
                "관내 외식업 점포의 시설 개선과 위생 설비 교체 비용을 지원",
                "최대 500만원",
                &["대전시 소재 외식업 사업자"],
                "매년 4-5월",
                &["사업자등록증", "견적서"],
                "042-270-3742",
                "https://www.daejeon.go.kr",
                "쉬움",
            ),
            PolicyCriteria {
                stages: &[],
                business_types: &["식음료업", "음식점"],
                max_capital: None,
                requires_employment: false,
            },
        ),
    ]
}

fn success_case_catalog() -> Vec<SupportSuccessCase> {
    let entries: &[(&str, &str, &str, &str, &str, &str, &str, &[&str])] = &[
        (
            "SUPPORT_CASE_001",
            "동구 브런치카페 온도",
            "카페",
            "동구",
            "퇴직 후 예비창업패키지로 시작해 상권 분석 상담을 거쳐 입지를 결정했습니다.",
            "예비창업패키지",
            "개업 1년차 월 매출 2,400만원 달성",
            &["사전 상권 분석", "지원금 활용한 초기 투자 절감"],
        ),
        (
            "SUPPORT_CASE_002",
            "유성 반찬가게 손맛",
            "식음료업",
            "유성구",
            "정책자금 융자로 설비를 교체하고 온라인 판매를 병행했습니다.",
            "소상공인 정책자금",
            "폐업 위기에서 월 매출 60% 회복",
            &["저금리 융자", "판매 채널 다각화"],
        ),
        (
            "SUPPORT_CASE_003",
            "둔산 편집숍 결",
            "소매업",
            "서구",
            "상권활성화재단의 마케팅 지원으로 SNS 고객층을 확보했습니다.",
            "마케팅 지원 사업",
            "신규 고객 40% 증가",
            &["전문가 멘토링", "꾸준한 콘텐츠 운영"],
        ),
    ];

    entries
        .iter()
        .map(
            |(case_id, name, industry, region, story, support, results, factors)| {
                SupportSuccessCase {
                    case_id: case_id.to_string(),
                    business_name: name.to_string(),
                    industry: industry.to_string(),
                    region: region.to_string(),
                    owner_story: story.to_string(),
                    support_used: vec![support.to_string()],
                    results: results.to_string(),
                    key_factors: factors.iter().map(|s| s.to_string()).collect(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::dto::strategy::request::UserProfile;

    fn recommendation_request(
        business_type: &str,
        business_stage: &str,
        capital: Option<i64>,
        employment: Option<u32>,
    ) -> PolicyRecommendationRequest {
        PolicyRecommendationRequest {
            user_profile: Some(UserProfile::default()),
            business_type: Some(business_type.to_string()),
            business_stage: Some(business_stage.to_string()),
            location: Some("대전".to_string()),
            capital_amount: capital,
            employment_plan: employment,
        }
    }

    #[test]
    fn test_support_centers_region_filter() {
        let service = SupportToolsService::instance();

        assert_eq!(service.support_centers(None).len(), 3);

        let yuseong = service.support_centers(Some("유성구"));
        assert_eq!(yuseong.len(), 1);
        assert_eq!(yuseong[0].name, "유성구 창업지원센터");

        assert!(service.support_centers(Some("중구")).is_empty());
    }

    #[test]
    fn test_experts_specialty_filter() {
        let service = SupportToolsService::instance();

        assert_eq!(service.experts(None).len(), 3);

        let marketing = service.experts(Some("마케팅"));
        assert_eq!(marketing.len(), 1);
        assert_eq!(marketing[0].expert_id, "EXPERT_002");
    }

    #[test]
    fn test_policy_recommendations_planning_stage() {
        let service = SupportToolsService::instance();
        let request = recommendation_request("카페", "PLANNING", Some(3000), None);

        let result = service.policy_recommendations(&request).unwrap();

        // PLANNING 단계는 업력 요건이 있는 융자·고용 정책에서 제외됩니다.
        let ids: Vec<&str> = result
            .recommended_policies
            .iter()
            .map(|p| p.policy_id.as_str())
            .collect();
        assert!(ids.contains(&"POLICY_001"));
        assert!(!ids.contains(&"POLICY_002"));
        assert!(!ids.contains(&"POLICY_003"));
        assert_eq!(result.total_count, result.recommended_policies.len());
    }

    #[test]
    fn test_policy_recommendations_sorted_by_score() {
        let service = SupportToolsService::instance();
        let request = recommendation_request("식음료업", "GROWTH", Some(5000), Some(2));

        let result = service.policy_recommendations(&request).unwrap();

        let scores: Vec<f64> = result
            .recommended_policies
            .iter()
            .map(|p| p.match_score)
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(scores, sorted);
        assert!(result.recommended_policies.iter().all(|p| p.match_score > 0.0));
    }

    #[test]
    fn test_policy_recommendations_capital_limit() {
        let service = SupportToolsService::instance();
        // 자본금 상한 초과 시 정책자금 제외
        let request = recommendation_request("소매업", "GROWTH", Some(50000), None);

        let result = service.policy_recommendations(&request).unwrap();
        assert!(result
            .recommended_policies
            .iter()
            .all(|p| p.policy_id != "POLICY_002"));
    }

    #[test]
    fn test_policy_recommendations_missing_fields() {
        let service = SupportToolsService::instance();
        let request = PolicyRecommendationRequest {
            user_profile: Some(UserProfile::default()),
            ..Default::default()
        };

        match service.policy_recommendations(&request) {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "business_type이 필요합니다.");
            }
            other => panic!("unexpected: {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_success_cases_industry_filter() {
        let service = SupportToolsService::instance();

        assert_eq!(service.success_cases(None).len(), 3);

        let cafe = service.success_cases(Some("카페"));
        assert_eq!(cafe.len(), 1);
        assert_eq!(cafe[0].business_name, "동구 브런치카페 온도");
    }
}
