//! # 전략 카드 HTTP 핸들러
//!
//! 맞춤형 전략 카드 생성과 템플릿·체크리스트 조회 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/generate` | 맞춤형 전략 카드 생성 |
//! | `GET` | `/checklist/{strategy_id}` | 전략별 체크리스트 |
//! | `GET` | `/templates` | 전략 템플릿 카탈로그 |
//! | `GET` | `/categories` | 전략 카테고리 |
//! | `GET` | `/difficulty-levels` | 난이도 레벨 |
//! | `GET` | `/success-cases` | 전략 성공 사례 |

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::strategy::request::{
    GenerateStrategyRequest, SuccessCaseQuery, TemplateQuery,
};
use crate::services::strategy::StrategyCardService;

/// 전략 카드 생성 핸들러
///
/// 리스크 유형과 사용자 프로필에 맞는 실행 전략 카드를 생성합니다.
/// `market_code`, `industry`, `risk_type`, `user_profile`은 필수입니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/strategy-cards/generate`
///
/// # 요청 본문
///
/// ```json
/// {
///   "market_code": "10000",
///   "industry": "식음료업",
///   "risk_type": "유입 저조형",
///   "user_profile": {
///     "userType": "ENTREPRENEUR",
///     "businessStage": "PLANNING",
///     "capital": 5000,
///     "experience": "초보"
///   }
/// }
/// ```
///
/// # 응답
///
/// ## 필수 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "success": false,
///   "error": { "code": "VALIDATION_ERROR", "message": "market_code이 필요합니다." }
/// }
/// ```
#[post("/generate")]
pub async fn generate(
    payload: web::Json<GenerateStrategyRequest>,
) -> Result<HttpResponse, AppError> {
    let (market_code, industry, risk_type, user_profile) = payload.validated()?;

    let service = StrategyCardService::instance();
    let cards = service.generate(&market_code, &industry, &risk_type, &user_profile)?;

    Ok(response::ok(cards))
}

/// 전략 체크리스트 핸들러
///
/// `GET /api/v1/strategy-cards/checklist/{strategy_id}`
#[get("/checklist/{strategy_id}")]
pub async fn checklist(strategy_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = StrategyCardService::instance();
    let checklist = service.checklist(&strategy_id)?;

    Ok(response::ok(checklist))
}

/// 전략 템플릿 카탈로그 핸들러
///
/// `GET /api/v1/strategy-cards/templates?category=marketing&difficulty=낮음`
#[get("/templates")]
pub async fn templates(query: web::Query<TemplateQuery>) -> Result<HttpResponse, AppError> {
    let service = StrategyCardService::instance();
    let templates = service.templates(query.category.as_deref(), query.difficulty.as_deref());

    Ok(response::ok(templates))
}

/// 전략 카테고리 핸들러
///
/// `GET /api/v1/strategy-cards/categories`
#[get("/categories")]
pub async fn categories() -> Result<HttpResponse, AppError> {
    let service = StrategyCardService::instance();

    Ok(response::ok(service.categories()))
}

/// 난이도 레벨 핸들러
///
/// `GET /api/v1/strategy-cards/difficulty-levels`
#[get("/difficulty-levels")]
pub async fn difficulty_levels() -> Result<HttpResponse, AppError> {
    let service = StrategyCardService::instance();

    Ok(response::ok(service.difficulty_levels()))
}

/// 전략 성공 사례 핸들러
///
/// `GET /api/v1/strategy-cards/success-cases?industry=카페&strategy_type=competition`
#[get("/success-cases")]
pub async fn success_cases(query: web::Query<SuccessCaseQuery>) -> Result<HttpResponse, AppError> {
    let service = StrategyCardService::instance();
    let cases = service.success_cases(query.industry.as_deref(), query.strategy_type.as_deref());

    Ok(response::ok(cases))
}
