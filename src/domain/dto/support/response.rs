//! 지원 도구 응답 DTO

use serde::{Deserialize, Serialize};

/// 소상공인 지원센터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportCenter {
    pub id: String,
    pub name: String,
    pub region: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub services: Vec<String>,
    pub operating_hours: String,
    pub specialties: Vec<String>,
    pub consultation_fee: String,
    pub languages: Vec<String>,
    pub accessibility: Vec<String>,
}

/// 전문가 상담 프로필
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertProfile {
    pub expert_id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub experience_years: u32,
    pub specialties: Vec<String>,
    pub consultation_types: Vec<String>,
    /// 상담비 (원/시간)
    pub consultation_fee: u32,
    pub available_times: Vec<String>,
    /// 평점 (1-5)
    pub rating: f64,
    pub review_count: u32,
    pub success_cases: Vec<String>,
}

/// 지원 정책
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: String,
    pub policy_name: String,
    pub organization: String,
    pub description: String,
    pub support_amount: String,
    pub eligibility: Vec<String>,
    pub application_period: String,
    pub required_documents: Vec<String>,
    pub contact_info: String,
    pub website: String,
    /// 매칭 점수 (0-100)
    pub match_score: f64,
    /// 쉬움 / 중간 / 어려움
    pub application_difficulty: String,
}

/// 정책 추천 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecommendations {
    pub recommended_policies: Vec<Policy>,
    pub total_count: usize,
    pub generation_date: String,
}

/// 창업 성공 사례
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportSuccessCase {
    pub case_id: String,
    pub business_name: String,
    pub industry: String,
    pub region: String,
    pub owner_story: String,
    pub support_used: Vec<String>,
    pub results: String,
    pub key_factors: Vec<String>,
}
