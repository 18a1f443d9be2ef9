//! # 핵심 진단 HTTP 핸들러
//!
//! 상권 핵심 진단 지표 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/foot-traffic/{market_code}` | 유동인구 분석 |
//! | `GET` | `/card-sales/{market_code}` | 카드매출 분석 |
//! | `GET` | `/same-industry/{market_code}` | 동일업종 경쟁 분석 |
//! | `GET` | `/business-rates/{market_code}` | 창업·폐업률 분석 |
//! | `GET` | `/dwell-time/{market_code}` | 체류시간 분석 |
//! | `POST` | `/health-score/{market_code}` | 종합 건강 점수 |
//! | `POST` | `/comprehensive/{market_code}` | 5대 지표 종합 진단 |

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::diagnosis::request::{IndustryQuery, IndustryRequest, PeriodQuery};
use crate::services::diagnosis::CoreDiagnosisService;

/// 유동인구 분석 핸들러
///
/// 월별 유동인구 시계열의 변화율과 추세를 분석합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/core-diagnosis/foot-traffic/{market_code}?period_months=12`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "data": {
///     "market_code": "10000",
///     "current_monthly_traffic": 195000,
///     "average_monthly_change": 2.59,
///     "trend": "증가",
///     "grade": "B"
///   }
/// }
/// ```
///
/// ## 상권 없음 (404 Not Found)
/// ```json
/// {
///   "success": false,
///   "error": { "code": "DATA_NOT_FOUND", "message": "해당 상권의 유동인구 데이터가 없습니다." }
/// }
/// ```
#[get("/foot-traffic/{market_code}")]
pub async fn foot_traffic(
    market_code: web::Path<String>,
    query: web::Query<PeriodQuery>,
) -> Result<HttpResponse, AppError> {
    let service = CoreDiagnosisService::instance();
    let analysis = service.foot_traffic_analysis(&market_code, query.months())?;

    Ok(response::ok(analysis))
}

/// 카드매출 분석 핸들러
///
/// `GET /api/v1/core-diagnosis/card-sales/{market_code}?period_months=12`
#[get("/card-sales/{market_code}")]
pub async fn card_sales(
    market_code: web::Path<String>,
    query: web::Query<PeriodQuery>,
) -> Result<HttpResponse, AppError> {
    let service = CoreDiagnosisService::instance();
    let analysis = service.card_sales_analysis(&market_code, query.months())?;

    Ok(response::ok(analysis))
}

/// 동일업종 경쟁 분석 핸들러
///
/// 업종을 지정하면 해당 업종의 경쟁 강도를, 지정하지 않으면
/// 전체 업종별 사업체 현황을 반환합니다.
///
/// `GET /api/v1/core-diagnosis/same-industry/{market_code}?industry=식음료업`
#[get("/same-industry/{market_code}")]
pub async fn same_industry(
    market_code: web::Path<String>,
    query: web::Query<IndustryQuery>,
) -> Result<HttpResponse, AppError> {
    let service = CoreDiagnosisService::instance();
    let analysis = service.same_industry_analysis(&market_code, query.industry.as_deref())?;

    Ok(response::ok(analysis))
}

/// 창업·폐업률 분석 핸들러
///
/// `GET /api/v1/core-diagnosis/business-rates/{market_code}`
#[get("/business-rates/{market_code}")]
pub async fn business_rates(market_code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = CoreDiagnosisService::instance();
    let analysis = service.business_rates_analysis(&market_code)?;

    Ok(response::ok(analysis))
}

/// 체류시간 분석 핸들러
///
/// `GET /api/v1/core-diagnosis/dwell-time/{market_code}`
#[get("/dwell-time/{market_code}")]
pub async fn dwell_time(market_code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = CoreDiagnosisService::instance();
    let analysis = service.dwell_time_analysis(&market_code)?;

    Ok(response::ok(analysis))
}

/// 종합 건강 점수 핸들러
///
/// 5대 지표를 가중 합산한 상권 건강 점수를 계산합니다.
/// 본문은 선택이며, 업종을 지정하면 경쟁 지표가 포함됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/core-diagnosis/health-score/{market_code}`
///
/// # 요청 본문 (선택)
///
/// ```json
/// { "industry": "식음료업" }
/// ```
#[post("/health-score/{market_code}")]
pub async fn health_score(
    market_code: web::Path<String>,
    payload: Option<web::Json<IndustryRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();

    let service = CoreDiagnosisService::instance();
    let analysis = service.health_score(&market_code, request.industry.as_deref())?;

    Ok(response::ok(analysis))
}

/// 종합 진단 핸들러
///
/// 5대 지표 전체와 건강 점수, 핵심 인사이트를 한 번에 반환합니다.
///
/// `POST /api/v1/core-diagnosis/comprehensive/{market_code}`
#[post("/comprehensive/{market_code}")]
pub async fn comprehensive(
    market_code: web::Path<String>,
    payload: Option<web::Json<IndustryRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();

    let service = CoreDiagnosisService::instance();
    let analysis = service.comprehensive(&market_code, request.industry.as_deref())?;

    Ok(response::ok(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_foot_traffic_success_envelope() {
        let app = test::init_service(App::new().service(foot_traffic)).await;

        let req = test::TestRequest::get()
            .uri("/foot-traffic/10000")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["market_code"], "10000");
        assert_eq!(body["data"]["grade"], "B");
        assert_eq!(body["data"]["monthly_data"].as_array().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn test_foot_traffic_period_query() {
        let app = test::init_service(App::new().service(foot_traffic)).await;

        let req = test::TestRequest::get()
            .uri("/foot-traffic/10000?period_months=6")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["monthly_data"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn test_foot_traffic_unknown_market() {
        let app = test::init_service(App::new().service(foot_traffic)).await;

        let req = test::TestRequest::get()
            .uri("/foot-traffic/99999")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "DATA_NOT_FOUND");
        assert_eq!(
            body["error"]["message"],
            "해당 상권의 유동인구 데이터가 없습니다."
        );
    }

    #[actix_web::test]
    async fn test_same_industry_with_and_without_industry() {
        let app = test::init_service(App::new().service(same_industry)).await;

        let req = test::TestRequest::get()
            .uri("/same-industry/10000?industry=%EC%8B%9D%EC%9D%8C%EB%A3%8C%EC%97%85")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["business_count"], 45);
        assert_eq!(body["data"]["competition_level"], "매우 높음");

        let req = test::TestRequest::get()
            .uri("/same-industry/10000")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["industry_breakdown"].is_object());
    }

    #[actix_web::test]
    async fn test_health_score_without_body() {
        let app = test::init_service(App::new().service(health_score)).await;

        let req = test::TestRequest::post()
            .uri("/health-score/10000")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["final_grade"], "C");
    }

    #[actix_web::test]
    async fn test_comprehensive_with_industry() {
        let app = test::init_service(App::new().service(comprehensive)).await;

        let req = test::TestRequest::post()
            .uri("/comprehensive/10000")
            .set_json(serde_json::json!({ "industry": "식음료업" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["industry"], "식음료업");
        assert!(body["data"]["summary"]["key_insights"].is_array());
    }
}
