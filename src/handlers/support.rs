//! # 지원 도구 HTTP 핸들러
//!
//! 지원센터·전문가 상담·정책 추천·성공 사례 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/support-centers` | 지원센터 디렉터리 |
//! | `GET` | `/expert-consultation` | 전문가 디렉터리 |
//! | `POST` | `/policy-recommendations` | 맞춤형 정책 추천 |
//! | `GET` | `/success-cases` | 창업 성공 사례 |

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::support::request::{
    IndustryQuery, PolicyRecommendationRequest, RegionQuery, SpecialtyQuery,
};
use crate::services::support::SupportToolsService;

/// 지원센터 디렉터리 핸들러
///
/// `GET /api/v1/support-tools/support-centers?region=유성구`
#[get("/support-centers")]
pub async fn support_centers(query: web::Query<RegionQuery>) -> Result<HttpResponse, AppError> {
    let service = SupportToolsService::instance();
    let centers = service.support_centers(query.region.as_deref());

    Ok(response::ok(centers))
}

/// 전문가 상담 디렉터리 핸들러
///
/// `GET /api/v1/support-tools/expert-consultation?specialty=마케팅`
#[get("/expert-consultation")]
pub async fn expert_consultation(
    query: web::Query<SpecialtyQuery>,
) -> Result<HttpResponse, AppError> {
    let service = SupportToolsService::instance();
    let experts = service.experts(query.specialty.as_deref());

    Ok(response::ok(experts))
}

/// 맞춤형 정책 추천 핸들러
///
/// 창업 단계·업종·자본금에 따라 매칭 점수를 계산한 정책 목록을 반환합니다.
/// `user_profile`, `business_type`, `business_stage`는 필수입니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/support-tools/policy-recommendations`
///
/// # 요청 본문
///
/// ```json
/// {
///   "user_profile": { "userType": "ENTREPRENEUR" },
///   "business_type": "식음료업",
///   "business_stage": "PLANNING",
///   "capital_amount": 5000,
///   "employment_plan": 2
/// }
/// ```
#[post("/policy-recommendations")]
pub async fn policy_recommendations(
    payload: web::Json<PolicyRecommendationRequest>,
) -> Result<HttpResponse, AppError> {
    let service = SupportToolsService::instance();
    let recommendations = service.policy_recommendations(&payload)?;

    Ok(response::ok(recommendations))
}

/// 창업 성공 사례 핸들러
///
/// `GET /api/v1/support-tools/success-cases?industry=카페`
#[get("/success-cases")]
pub async fn success_cases(query: web::Query<IndustryQuery>) -> Result<HttpResponse, AppError> {
    let service = SupportToolsService::instance();
    let cases = service.success_cases(query.industry.as_deref());

    Ok(response::ok(cases))
}
