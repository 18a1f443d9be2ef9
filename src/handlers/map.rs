//! # 지도 시각화 HTTP 핸들러
//!
//! 히트맵·반경 분석·접근성 분석 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/heatmap` | 지표별 히트맵 데이터 |
//! | `POST` | `/radius-analysis` | 반경 내 상권 분석 |
//! | `GET` | `/accessibility/{market_code}` | 상권 접근성 분석 |
//! | `GET` | `/analysis-types` | 지원 분석 유형 |

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::map::request::{HeatmapQuery, RadiusAnalysisRequest};
use crate::services::map::MapVisualizationService;

/// 히트맵 데이터 핸들러
///
/// 지원 지표: `health_score`(기본) / `foot_traffic` / `competition`.
///
/// # 엔드포인트
///
/// `GET /api/v1/map-visualization/heatmap?metric=health_score`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "data": {
///     "heatmap_data": [
///       { "lat": 36.3315, "lng": 127.4346, "intensity": 0.76, "color": "#E67E22", "grade": "C" }
///     ],
///     "total_markets": 3,
///     "analysis_type": "health_score"
///   }
/// }
/// ```
#[get("/heatmap")]
pub async fn heatmap(query: web::Query<HeatmapQuery>) -> Result<HttpResponse, AppError> {
    let service = MapVisualizationService::instance();
    let data = service.heatmap(query.metric())?;

    Ok(response::ok(data))
}

/// 반경 분석 핸들러
///
/// 중심 좌표와 반경(km)을 받아 반경 내 상권을 거리순으로 분석합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/map-visualization/radius-analysis`
///
/// # 요청 본문
///
/// ```json
/// {
///   "center_lat": 36.3315,
///   "center_lng": 127.4346,
///   "radius_km": 5.0,
///   "analysis_type": "comprehensive"
/// }
/// ```
#[post("/radius-analysis")]
pub async fn radius_analysis(
    payload: web::Json<RadiusAnalysisRequest>,
) -> Result<HttpResponse, AppError> {
    let service = MapVisualizationService::instance();
    let analysis = service.radius_analysis(
        payload.center_lat,
        payload.center_lng,
        payload.radius_km,
        payload.analysis_type(),
    )?;

    Ok(response::ok(analysis))
}

/// 접근성 분석 핸들러
///
/// `GET /api/v1/map-visualization/accessibility/{market_code}`
#[get("/accessibility/{market_code}")]
pub async fn accessibility(market_code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = MapVisualizationService::instance();
    let report = service.accessibility(&market_code)?;

    Ok(response::ok(report))
}

/// 지원 분석 유형 핸들러
///
/// `GET /api/v1/map-visualization/analysis-types`
#[get("/analysis-types")]
pub async fn analysis_types() -> Result<HttpResponse, AppError> {
    let service = MapVisualizationService::instance();

    Ok(response::ok(service.analysis_types()))
}
