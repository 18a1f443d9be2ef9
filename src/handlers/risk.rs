//! # 리스크 분류 HTTP 핸들러
//!
//! 상권 리스크 유형 분류와 상세 분석 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/classify/{market_code}` | 리스크 유형 분류 |
//! | `POST` | `/detailed-analysis/{market_code}` | 유형별 상세 분석 |
//! | `GET` | `/risk-types` | 리스크 유형 카탈로그 |
//! | `GET` | `/mitigation-strategies` | 완화 전략 조회 |

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::risk::request::{ClassifyRequest, DetailedAnalysisRequest, RiskTypeQuery};
use crate::services::risk::RiskClassificationService;
use crate::utils::string_utils::validate_required_string;

/// 리스크 분류 핸들러
///
/// 4가지 리스크 유형(유입 저조형, 과포화 경쟁형, 소비력 약형,
/// 성장 잠재형) 중 해당 상권의 주요 리스크를 판별합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/risk-classification/classify/{market_code}`
///
/// # 요청 본문 (선택)
///
/// ```json
/// { "industry": "식음료업" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "data": {
///     "market_code": "30000",
///     "primary_risk_type": "유입 저조형",
///     "risk_level": "높음",
///     "success_probability": 70.0
///   }
/// }
/// ```
#[post("/classify/{market_code}")]
pub async fn classify(
    market_code: web::Path<String>,
    payload: Option<web::Json<ClassifyRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();

    let service = RiskClassificationService::instance();
    let classification = service.classify(&market_code, request.industry.as_deref())?;

    Ok(response::ok(classification))
}

/// 상세 리스크 분석 핸들러
///
/// 지정한 리스크 유형의 지표·영향 평가·완화 전략·성공 사례를 반환합니다.
/// `risk_type`은 필수입니다.
///
/// `POST /api/v1/risk-classification/detailed-analysis/{market_code}`
#[post("/detailed-analysis/{market_code}")]
pub async fn detailed_analysis(
    market_code: web::Path<String>,
    payload: Option<web::Json<DetailedAnalysisRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();
    let risk_type = validate_required_string(request.risk_type.as_deref(), "risk_type")?;

    let service = RiskClassificationService::instance();
    let analysis =
        service.detailed_analysis(&market_code, &risk_type, request.industry.as_deref())?;

    Ok(response::ok(analysis))
}

/// 리스크 유형 카탈로그 핸들러
///
/// `GET /api/v1/risk-classification/risk-types`
#[get("/risk-types")]
pub async fn risk_types() -> Result<HttpResponse, AppError> {
    let service = RiskClassificationService::instance();

    Ok(response::ok(service.risk_types()))
}

/// 완화 전략 조회 핸들러
///
/// `GET /api/v1/risk-classification/mitigation-strategies?risk_type=유입 저조형`
#[get("/mitigation-strategies")]
pub async fn mitigation_strategies(
    query: web::Query<RiskTypeQuery>,
) -> Result<HttpResponse, AppError> {
    let risk_type = validate_required_string(query.risk_type.as_deref(), "risk_type")?;

    let service = RiskClassificationService::instance();
    let strategies = service.mitigation_strategies(&risk_type)?;

    Ok(response::ok(strategies))
}
