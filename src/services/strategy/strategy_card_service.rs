//! 전략 카드 서비스
//!
//! 리스크 유형과 사용자 프로필에 맞는 실행 전략 카드를 생성합니다.
//! 전략은 6개 카테고리 7개 템플릿으로 구성된 정적 카탈로그에서 선택되며,
//! 템플릿 ID는 안정적이어서 체크리스트 조회에 그대로 사용됩니다.

use chrono::Utc;
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::strategy::request::UserProfile;
use crate::domain::dto::strategy::response::{
    ChecklistItem, DifficultyLevel, StrategyCard, StrategyCardsResponse, StrategyCategory,
    StrategyChecklist, StrategySuccessCase, StrategyTemplateEntry, TemplateFilters,
    TemplatesResponse,
};
use crate::services::diagnosis::MarketDataStore;
use crate::services::risk::risk_service::{
    RISK_TYPE_GROWTH_POTENTIAL, RISK_TYPE_LOW_INFLOW, RISK_TYPE_OVERSATURATED,
    RISK_TYPE_WEAK_SPENDING,
};

/// 전략 카드 서비스
pub struct StrategyCardService;

static INSTANCE: Lazy<Arc<StrategyCardService>> = Lazy::new(|| Arc::new(StrategyCardService));

inventory::submit! {
    ServiceRegistration {
        name: "StrategyCardService",
        constructor: || { StrategyCardService::instance(); },
    }
}

impl StrategyCardService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<StrategyCardService> {
        INSTANCE.clone()
    }

    /// 맞춤형 전략 카드 생성
    ///
    /// 리스크 유형에 매핑된 카테고리의 템플릿을 우선순위 내림차순으로
    /// 정렬합니다. 경험 수준이 `초보`이면 `매우 높음` 난이도를 제외합니다.
    pub fn generate(
        &self,
        market_code: &str,
        industry: &str,
        risk_type: &str,
        user_profile: &UserProfile,
    ) -> AppResult<StrategyCardsResponse> {
        let store = MarketDataStore::instance();
        let market = store
            .find(market_code)
            .ok_or_else(|| AppError::NotFound("해당 상권 데이터가 없습니다.".to_string()))?;

        let categories = categories_for_risk_type(risk_type).ok_or_else(|| {
            AppError::ValidationError(format!("알 수 없는 리스크 유형입니다: {}", risk_type))
        })?;

        let beginner = user_profile.experience.as_deref() == Some("초보");

        let mut cards: Vec<StrategyCard> = template_catalog()
            .into_iter()
            .filter(|(_, card)| categories.contains(&card.category.as_str()))
            .filter(|(_, card)| !(beginner && card.difficulty == "매우 높음"))
            .map(|(_, card)| card)
            .collect();

        cards.sort_by(|a, b| b.priority.cmp(&a.priority));

        Ok(StrategyCardsResponse {
            generation_id: Uuid::new_v4().to_string(),
            market_code: market_code.to_string(),
            market_name: market.name.clone(),
            industry: industry.to_string(),
            risk_type: risk_type.to_string(),
            total_count: cards.len(),
            strategy_cards: cards,
            generation_date: Utc::now().to_rfc3339(),
        })
    }

    /// 전략별 체크리스트
    pub fn checklist(&self, strategy_id: &str) -> AppResult<StrategyChecklist> {
        let card = template_catalog()
            .into_iter()
            .find(|(id, _)| *id == strategy_id)
            .map(|(_, card)| card)
            .ok_or_else(|| {
                AppError::NotFound("해당 전략의 체크리스트가 없습니다.".to_string())
            })?;

        let items = checklist_items(strategy_id);

        Ok(StrategyChecklist {
            strategy_id: strategy_id.to_string(),
            strategy_title: card.strategy_name,
            total_items: items.len(),
            checklist_items: items,
            completion_estimate: card.duration,
        })
    }

    /// 템플릿 카탈로그 (카테고리/난이도 필터)
    pub fn templates(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> TemplatesResponse {
        let templates: Vec<StrategyTemplateEntry> = template_catalog()
            .into_iter()
            .filter(|(_, card)| category.is_none_or(|c| card.category == c))
            .filter(|(_, card)| difficulty.is_none_or(|d| card.difficulty == d))
            .map(|(id, card)| StrategyTemplateEntry {
                id: id.to_string(),
                card,
            })
            .collect();

        TemplatesResponse {
            total_templates: templates.len(),
            templates,
            filters: TemplateFilters {
                category: category.map(str::to_string),
                difficulty: difficulty.map(str::to_string),
            },
        }
    }

    /// 6개 전략 카테고리
    pub fn categories(&self) -> Vec<StrategyCategory> {
        let catalog = template_catalog();
        let count = |category: &str| {
            catalog
                .iter()
                .filter(|(_, card)| card.category == category)
                .count()
        };

        vec![
            ("marketing", "마케팅", "유동인구 증가 및 브랜드 인지도 향상"),
            ("competition", "경쟁력", "경쟁 우위 확보 및 차별화"),
            ("operations", "운영", "운영 효율성 및 비용 최적화"),
            ("innovation", "혁신", "혁신적 비즈니스 모델 도입"),
            ("channels", "채널", "판매 채널 확대 및 다각화"),
            ("customer_management", "고객관리", "고객 충성도 향상 및 관계 관리"),
        ]
        .into_iter()
        .map(|(id, name, description)| StrategyCategory {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            template_count: count(id),
        })
        .collect()
    }

    /// 난이도 레벨 메타데이터
    pub fn difficulty_levels(&self) -> Vec<DifficultyLevel> {
        vec![
            DifficultyLevel {
                level: "낮음".to_string(),
                description: "초보자도 쉽게 실행할 수 있는 전략".to_string(),
                required_experience: "경험 불필요".to_string(),
                estimated_time: "1-2개월".to_string(),
                success_rate: "80-90%".to_string(),
            },
            DifficultyLevel {
                level: "중간".to_string(),
                description: "일정한 경험과 자원이 필요한 전략".to_string(),
                required_experience: "1-3년".to_string(),
                estimated_time: "2-4개월".to_string(),
                success_rate: "60-80%".to_string(),
            },
            DifficultyLevel {
                level: "높음".to_string(),
                description: "상당한 전문성과 자원이 필요한 전략".to_string(),
                required_experience: "3-5년".to_string(),
                estimated_time: "3-6개월".to_string(),
                success_rate: "40-60%".to_string(),
            },
            DifficultyLevel {
                level: "매우 높음".to_string(),
                description: "높은 전문성과 상당한 자원이 필요한 전략".to_string(),
                required_experience: "5년 이상".to_string(),
                estimated_time: "6-12개월".to_string(),
                success_rate: "20-40%".to_string(),
            },
        ]
    }

    /// 성공 사례 (업종/전략 유형 필터)
    pub fn success_cases(
        &self,
        industry: Option<&str>,
        strategy_type: Option<&str>,
    ) -> Vec<StrategySuccessCase> {
        success_case_catalog()
            .into_iter()
            .filter(|case| industry.is_none_or(|i| case.industry == i))
            .filter(|case| strategy_type.is_none_or(|t| case.strategy_type == t))
            .collect()
    }
}

/// 리스크 유형별 전략 카테고리 매핑
fn categories_for_risk_type(risk_type: &str) -> Option<&'static [&'static str]> {
    match risk_type {
        RISK_TYPE_LOW_INFLOW => Some(&["marketing", "channels"]),
        RISK_TYPE_OVERSATURATED => Some(&["competition", "customer_management"]),
        RISK_TYPE_WEAK_SPENDING => Some(&["operations", "channels"]),
        RISK_TYPE_GROWTH_POTENTIAL => Some(&["innovation", "marketing"]),
        _ => None,
    }
}

fn card(
    strategy_id: &str,
    strategy_name: &str,
    category: &str,
    description: &str,
    difficulty: &str,
    duration: &str,
    cost_level: &str,
    expected_impact: &str,
    priority: u8,
    success_probability: u8,
    required_resources: &[&str],
    implementation_steps: &[&str],
    tips: &[&str],
) -> StrategyCard {
    StrategyCard {
        strategy_id: strategy_id.to_string(),
        strategy_name: strategy_name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        duration: duration.to_string(),
        cost_level: cost_level.to_string(),
        expected_impact: expected_impact.to_string(),
        priority,
        success_probability,
        required_resources: required_resources.iter().map(|s| s.to_string()).collect(),
        implementation_steps: implementation_steps.iter().map(|s| s.to_string()).collect(),
        tips: tips.iter().map(|s| s.to_string()).collect(),
    }
}

/// 7개 전략 템플릿 (6개 카테고리, 마케팅 2개)
fn template_catalog() -> Vec<(&'static str, StrategyCard)> {
    vec![
        (
            "STRAT_001",
            card(
                "STRAT_001",
                "SNS 바이럴 마케팅",
                "marketing",
                "인스타그램·블로그 중심의 콘텐츠로 상권 방문 동기를 만드는 전략",
                "낮음",
                "1-2개월",
                "낮음",
                "신규 방문객 20-30% 증가",
                5,
                85,
                &["콘텐츠 제작 인력", "월 광고비 50만원"],
                &["타깃 고객 정의", "콘텐츠 캘린더 수립", "해시태그 캠페인 운영", "성과 분석"],
                &["고객 후기 리포스트를 적극 활용하세요", "지역 해시태그를 함께 사용하세요"],
            ),
        ),
        (
            "STRAT_002",
            card(
                "STRAT_002",
                "지역 제휴 프로모션",
                "marketing",
                "인근 점포·기관과 상호 할인 제휴로 교차 방문을 유도하는 전략",
                "중간",
                "2-4개월",
                "중간",
                "재방문율 15% 향상",
                4,
                70,
                &["제휴 협상 시간", "할인 재원"],
                &["제휴 후보 선정", "혜택 구조 설계", "공동 홍보물 제작", "효과 측정"],
                &["혜택은 양쪽 모두에게 이익이 되도록 설계하세요"],
            ),
        ),
        (
            "STRAT_003",
            card(
                "STRAT_003",
                "차별화된 컨셉 도입",
                "competition",
                "고유한 테마와 특별한 메뉴·상품으로 경쟁에서 차별화를 추구하는 전략",
                "중간",
                "3-6개월",
                "중간",
                "매출 20-30% 증가, 고객 충성도 향상",
                4,
                75,
                &["컨셉 기획 비용", "인테리어 개선 비용"],
                &["경쟁 점포 분석", "컨셉 기획", "메뉴·상품 개발", "공간 연출", "고객 반응 테스트"],
                &["고객 피드백 적극 수용", "SNS 마케팅 활용"],
            ),
        ),
        (
            "STRAT_004",
            card(
                "STRAT_004",
                "운영 비용 최적화",
                "operations",
                "원가·인력·에너지 비용을 구조적으로 점검하여 수익성을 방어하는 전략",
                "낮음",
                "1-2개월",
                "낮음",
                "영업이익률 5-10%p 개선",
                3,
                80,
                &["원가 분석 시간"],
                &["비용 항목 분해", "공급처 재협상", "피크타임 인력 배치 조정", "월별 점검"],
                &["고정비부터 줄이면 효과가 오래갑니다"],
            ),
        ),
        (
            "STRAT_005",
            card(
                "STRAT_005",
                "스마트 주문·구독 모델 도입",
                "innovation",
                "선주문·구독 기반의 새로운 판매 모델로 매출 구조를 혁신하는 전략",
                "매우 높음",
                "6-12개월",
                "높음",
                "반복 매출 기반 확보",
                3,
                40,
                &["시스템 구축 비용", "운영 프로세스 재설계"],
                &["수요 검증", "시스템 선정", "파일럿 운영", "전면 도입"],
                &["파일럿으로 수요를 먼저 검증하세요"],
            ),
        ),
        (
            "STRAT_006",
            card(
                "STRAT_006",
                "온라인 판매 채널 확장",
                "channels",
                "배달앱·스마트스토어 입점으로 상권 밖 수요를 흡수하는 전략",
                "중간",
                "2-3개월",
                "중간",
                "매출 채널 다변화, 월 매출 10-20% 증가",
                4,
                72,
                &["입점 수수료", "포장·배송 체계"],
                &["채널 선정", "상품 구성 최적화", "입점 등록", "리뷰 관리"],
                &["첫 달은 노출 프로모션에 집중하세요"],
            ),
        ),
        (
            "STRAT_007",
            card(
                "STRAT_007",
                "단골 멤버십 프로그램",
                "customer_management",
                "적립·등급 혜택으로 재방문을 구조화하는 고객 관계 전략",
                "낮음",
                "1-2개월",
                "낮음",
                "재방문율 25% 향상",
                5,
                82,
                &["멤버십 운영 도구"],
                &["혜택 설계", "가입 동선 구축", "단골 세그먼트 관리", "혜택 고도화"],
                &["가입 장벽을 최대한 낮추세요"],
            ),
        ),
    ]
}

fn checklist_items(strategy_id: &str) -> Vec<ChecklistItem> {
    let entries: &[(&str, &str, &str, &str, &str, &[&str], &[&str], &str)] = match strategy_id {
        "STRAT_001" => &[
            (
                "CHK_001",
                "타깃 고객 및 채널 정의",
                "주 고객층의 연령·관심사를 정의하고 주력 SNS 채널을 선정",
                "높음",
                "1주",
                &["고객 데이터"],
                &[],
                "타깃 페르소나와 채널 선정 완료",
            ),
            (
                "CHK_002",
                "콘텐츠 캘린더 수립",
                "월 단위 게시 일정과 콘텐츠 유형을 계획",
                "중간",
                "1-2주",
                &["기획 인력"],
                &["타깃 정의 완료"],
                "4주치 콘텐츠 일정 확정",
            ),
            (
                "CHK_003",
                "캠페인 운영 및 성과 분석",
                "해시태그 캠페인을 운영하고 도달·방문 전환을 측정",
                "중간",
                "4주",
                &["광고비"],
                &["콘텐츠 캘린더 확정"],
                "방문 전환 지표 확보",
            ),
        ],
        "STRAT_002" => &[
            (
                "CHK_001",
                "제휴 후보 목록화",
                "교차 방문 가능성이 높은 인근 점포·기관을 목록화",
                "높음",
                "1주",
                &[],
                &[],
                "제휴 후보 5곳 이상 확보",
            ),
            (
                "CHK_002",
                "혜택 구조 설계 및 협상",
                "상호 할인·적립 구조를 설계하고 제휴 계약을 체결",
                "높음",
                "2-3주",
                &["할인 재원"],
                &["후보 목록 확보"],
                "제휴 계약 2건 이상 체결",
            ),
            (
                "CHK_003",
                "공동 홍보 실행",
                "공동 홍보물을 제작·배포하고 교차 방문을 측정",
                "중간",
                "4주",
                &["홍보물 제작비"],
                &["제휴 계약 체결"],
                "교차 방문 데이터 확보",
            ),
        ],
        "STRAT_003" => &[
            (
                "CHK_001",
                "컨셉 기획 및 브랜드 아이덴티티 설정",
                "고유한 테마와 브랜드 스토리를 기반으로 한 컨셉 개발",
                "높음",
                "2-3주",
                &["기획 인력", "디자인 비용"],
                &["시장 조사 완료"],
                "브랜드 컨셉 확정 및 고객 반응 테스트 완료",
            ),
            (
                "CHK_002",
                "시그니처 메뉴·상품 개발",
                "경쟁 점포와 구분되는 대표 상품을 개발",
                "높음",
                "3-4주",
                &["개발 비용"],
                &["컨셉 확정"],
                "시그니처 상품 출시",
            ),
            (
                "CHK_003",
                "공간 연출 및 론칭",
                "컨셉에 맞는 인테리어 개선과 리뉴얼 론칭 이벤트 진행",
                "중간",
                "4-8주",
                &["인테리어 비용"],
                &["시그니처 상품 출시"],
                "리뉴얼 론칭 및 초기 반응 측정",
            ),
        ],
        "STRAT_004" => &[
            (
                "CHK_001",
                "비용 구조 분해",
                "원가·인건비·임대료·에너지 비용을 항목별로 분해",
                "높음",
                "1주",
                &["매출·비용 데이터"],
                &[],
                "항목별 비용 비중표 작성",
            ),
            (
                "CHK_002",
                "공급처 재협상",
                "주요 원재료 공급 조건을 비교 견적으로 재협상",
                "중간",
                "2주",
                &[],
                &["비용 구조 분해 완료"],
                "원가율 2%p 이상 절감",
            ),
            (
                "CHK_003",
                "인력 배치 최적화",
                "피크타임 분석에 따라 근무 스케줄을 재편",
                "중간",
                "2주",
                &["매출 시간대 데이터"],
                &["비용 구조 분해 완료"],
                "시간대별 인건비 효율 개선",
            ),
        ],
        "STRAT_005" => &[
            (
                "CHK_001",
                "수요 검증",
                "기존 고객 대상 설문·사전 예약으로 구독 수요를 검증",
                "높음",
                "3-4주",
                &["설문 도구"],
                &[],
                "유효 수요 50건 이상 확인",
            ),
            (
                "CHK_002",
                "시스템 선정 및 구축",
                "주문·결제·구독 관리 시스템을 선정하고 구축",
                "높음",
                "8-12주",
                &["시스템 구축 비용"],
                &["수요 검증 완료"],
                "파일럿 운영 가능한 시스템 오픈",
            ),
            (
                "CHK_003",
                "파일럿 운영 및 전면 도입",
                "소규모 파일럿으로 운영 프로세스를 다듬은 뒤 확대",
                "중간",
                "8주",
                &["운영 인력"],
                &["시스템 구축 완료"],
                "구독 유지율 70% 이상",
            ),
        ],
        "STRAT_006" => &[
            (
                "CHK_001",
                "채널 선정",
                "배달앱·스마트스토어 중 상품 특성에 맞는 채널을 선정",
                "높음",
                "1주",
                &[],
                &[],
                "주력 채널 1-2개 확정",
            ),
            (
                "CHK_002",
                "상품 구성 최적화",
                "포장·배송에 적합하도록 상품 구성과 가격을 조정",
                "높음",
                "2주",
                &["포장재"],
                &["채널 확정"],
                "온라인 전용 상품 구성 완료",
            ),
            (
                "CHK_003",
                "입점 및 리뷰 관리",
                "입점 등록을 완료하고 초기 리뷰를 집중 관리",
                "중간",
                "4주",
                &["입점 수수료"],
                &["상품 구성 완료"],
                "평점 4.5 이상 유지",
            ),
        ],
        "STRAT_007" => &[
            (
                "CHK_001",
                "혜택 설계",
                "적립률·등급 혜택을 수익성과 함께 설계",
                "높음",
                "1주",
                &[],
                &[],
                "멤버십 혜택표 확정",
            ),
            (
                "CHK_002",
                "가입 동선 구축",
                "QR·전화번호 기반의 간편 가입 동선을 구축",
                "중간",
                "1-2주",
                &["멤버십 운영 도구"],
                &["혜택 설계 완료"],
                "일 가입 10건 이상",
            ),
            (
                "CHK_003",
                "단골 세그먼트 운영",
                "방문 주기별 세그먼트에 맞는 리텐션 메시지를 운영",
                "중간",
                "4주",
                &["메시지 발송 비용"],
                &["가입 동선 구축"],
                "재방문율 개선 확인",
            ),
        ],
        _ => &[],
    };

    entries
        .iter()
        .map(
            |(id, title, description, priority, time, resources, dependencies, criteria)| {
                ChecklistItem {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    priority: priority.to_string(),
                    estimated_time: time.to_string(),
                    required_resources: resources.iter().map(|s| s.to_string()).collect(),
                    dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
                    success_criteria: criteria.to_string(),
                }
            },
        )
        .collect()
}

fn success_case_catalog() -> Vec<StrategySuccessCase> {
    let entries: &[(&str, &str, &str, &str, &str, &[&str])] = &[
        (
            "대전 카페 A의 차별화 성공",
            "카페",
            "competition",
            "독특한 인테리어와 시그니처 메뉴로 포화 상권에서 차별화",
            "매출 30% 증가, 고객 충성도 향상",
            &["독창적 컨셉", "고품질 서비스", "지속적 혁신"],
        ),
        (
            "음식점 B의 SNS 전환",
            "음식점",
            "marketing",
            "메뉴 제작 과정 콘텐츠로 바이럴에 성공하여 원거리 방문객 확보",
            "신규 방문객 45% 증가",
            &["꾸준한 콘텐츠", "고객 참여 이벤트"],
        ),
        (
            "소매점 C의 온라인 확장",
            "소매업",
            "channels",
            "스마트스토어 입점으로 상권 밖 수요를 흡수",
            "월 매출 25% 증가, 재고 회전율 개선",
            &["온라인 전용 구성", "리뷰 관리"],
        ),
        (
            "분식집 D의 멤버십 운영",
            "음식점",
            "customer_management",
            "전화번호 적립 멤버십으로 단골 기반을 구조화",
            "재방문율 30% 향상",
            &["간편 가입", "등급별 혜택"],
        ),
    ];

    entries
        .iter()
        .map(
            |(name, industry, strategy_type, description, results, factors)| StrategySuccessCase {
                case_name: name.to_string(),
                industry: industry.to_string(),
                strategy_type: strategy_type.to_string(),
                description: description.to_string(),
                results: results.to_string(),
                key_factors: factors.iter().map(|s| s.to_string()).collect(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beginner_profile() -> UserProfile {
        UserProfile {
            user_type: Some("ENTREPRENEUR".to_string()),
            business_stage: Some("PLANNING".to_string()),
            capital: Some(5000),
            risk_tolerance: Some("중간".to_string()),
            experience: Some("초보".to_string()),
        }
    }

    #[test]
    fn test_generate_maps_risk_type_to_categories() {
        let service = StrategyCardService::instance();
        let response = service
            .generate("10000", "카페", RISK_TYPE_OVERSATURATED, &beginner_profile())
            .unwrap();

        assert_eq!(response.market_name, "대전역 상권");
        assert!(!response.strategy_cards.is_empty());
        assert!(response.strategy_cards.iter().all(|card| {
            card.category == "competition" || card.category == "customer_management"
        }));
        assert_eq!(response.total_count, response.strategy_cards.len());
    }

    #[test]
    fn test_generate_sorted_by_priority() {
        let service = StrategyCardService::instance();
        let response = service
            .generate("10000", "카페", RISK_TYPE_LOW_INFLOW, &beginner_profile())
            .unwrap();

        let priorities: Vec<u8> = response.strategy_cards.iter().map(|c| c.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_beginner_filters_hardest_difficulty() {
        let service = StrategyCardService::instance();

        let beginner = service
            .generate("10000", "카페", RISK_TYPE_GROWTH_POTENTIAL, &beginner_profile())
            .unwrap();
        assert!(beginner
            .strategy_cards
            .iter()
            .all(|card| card.difficulty != "매우 높음"));

        let expert = UserProfile {
            experience: Some("고급".to_string()),
            ..beginner_profile()
        };
        let advanced = service
            .generate("10000", "카페", RISK_TYPE_GROWTH_POTENTIAL, &expert)
            .unwrap();
        assert!(advanced
            .strategy_cards
            .iter()
            .any(|card| card.difficulty == "매우 높음"));
    }

    #[test]
    fn test_generate_unknown_market() {
        let service = StrategyCardService::instance();
        let result = service.generate("99999", "카페", RISK_TYPE_LOW_INFLOW, &beginner_profile());

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_generate_unknown_risk_type() {
        let service = StrategyCardService::instance();
        let result = service.generate("10000", "카페", "없는유형", &beginner_profile());

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_checklist_known_and_unknown_id() {
        let service = StrategyCardService::instance();

        let checklist = service.checklist("STRAT_003").unwrap();
        assert_eq!(checklist.strategy_title, "차별화된 컨셉 도입");
        assert_eq!(checklist.total_items, checklist.checklist_items.len());
        assert!(checklist.total_items >= 3);

        assert!(matches!(
            service.checklist("STRAT_999"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_templates_filtering() {
        let service = StrategyCardService::instance();

        let all = service.templates(None, None);
        assert_eq!(all.total_templates, 7);

        let marketing = service.templates(Some("marketing"), None);
        assert_eq!(marketing.total_templates, 2);

        let easy_marketing = service.templates(Some("marketing"), Some("낮음"));
        assert_eq!(easy_marketing.total_templates, 1);
    }

    #[test]
    fn test_categories_counts() {
        let service = StrategyCardService::instance();
        let categories = service.categories();

        assert_eq!(categories.len(), 6);
        let marketing = categories.iter().find(|c| c.id == "marketing").unwrap();
        assert_eq!(marketing.template_count, 2);
    }

    #[test]
    fn test_difficulty_levels_catalog() {
        let service = StrategyCardService::instance();
        let levels = service.difficulty_levels();

        assert_eq!(levels.len(), 4);
        assert_eq!(levels[3].level, "매우 높음");
    }

    #[test]
    fn test_success_cases_filters() {
        let service = StrategyCardService::instance();

        assert_eq!(service.success_cases(None, None).len(), 4);
        assert_eq!(service.success_cases(Some("음식점"), None).len(), 2);
        assert_eq!(
            service
                .success_cases(Some("음식점"), Some("marketing"))
                .len(),
            1
        );
    }
}
