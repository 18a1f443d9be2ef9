//! 전략 카드 응답 DTO

use serde::{Deserialize, Serialize};

/// 전략 카드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCard {
    /// 안정적인 템플릿 ID (체크리스트 조회에 사용)
    pub strategy_id: String,
    pub strategy_name: String,
    pub category: String,
    pub description: String,
    /// 낮음 / 중간 / 높음 / 매우 높음
    pub difficulty: String,
    pub duration: String,
    /// 낮음 / 중간 / 높음
    pub cost_level: String,
    pub expected_impact: String,
    /// 우선순위 (1-5, 높을수록 우선)
    pub priority: u8,
    /// 성공 확률 (%)
    pub success_probability: u8,
    pub required_resources: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub tips: Vec<String>,
}

/// 전략 카드 생성 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCardsResponse {
    /// 생성 요청 식별자 (UUID v4)
    pub generation_id: String,
    pub market_code: String,
    pub market_name: String,
    pub industry: String,
    pub risk_type: String,
    pub strategy_cards: Vec<StrategyCard>,
    pub total_count: usize,
    pub generation_date: String,
}

/// 체크리스트 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 높음 / 중간 / 낮음
    pub priority: String,
    pub estimated_time: String,
    pub required_resources: Vec<String>,
    pub dependencies: Vec<String>,
    pub success_criteria: String,
}

/// 전략별 체크리스트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyChecklist {
    pub strategy_id: String,
    pub strategy_title: String,
    pub checklist_items: Vec<ChecklistItem>,
    pub total_items: usize,
    pub completion_estimate: String,
}

/// 전략 템플릿 카탈로그 항목 (필터 조회용)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTemplateEntry {
    pub id: String,
    #[serde(flatten)]
    pub card: StrategyCard,
}

/// 템플릿 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesResponse {
    pub total_templates: usize,
    pub templates: Vec<StrategyTemplateEntry>,
    pub filters: TemplateFilters,
}

/// 적용된 템플릿 필터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFilters {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

/// 전략 카테고리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template_count: usize,
}

/// 난이도 레벨 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyLevel {
    pub level: String,
    pub description: String,
    pub required_experience: String,
    pub estimated_time: String,
    pub success_rate: String,
}

/// 전략 실행 성공 사례
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySuccessCase {
    pub case_name: String,
    pub industry: String,
    pub strategy_type: String,
    pub description: String,
    pub results: String,
    pub key_factors: Vec<String>,
}
