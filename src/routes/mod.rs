//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Route Groups
//!
//! - `/api/v1/auth` - 회원가입 / 로그인
//! - `/api/v1/core-diagnosis` - 핵심 진단 지표
//! - `/api/v1/risk-classification` - 리스크 유형 분류
//! - `/api/v1/strategy-cards` - 맞춤형 전략 카드
//! - `/api/v1/support-tools` - 지원 도구
//! - `/api/v1/map-visualization` - 지도 시각화
//! - `/api/v1/market-diagnosis` - 상권 디렉터리
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use chrono;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Root / health check endpoints
    cfg.service(index);
    cfg.service(health_check);
    cfg.service(api_index);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_diagnosis_routes(cfg);
    configure_risk_routes(cfg);
    configure_strategy_routes(cfg);
    configure_support_routes(cfg);
    configure_map_routes(cfg);
    configure_market_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login),
    );
}

/// 핵심 진단 라우트를 설정합니다
fn configure_diagnosis_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/core-diagnosis")
            .service(handlers::core_diagnosis::foot_traffic)
            .service(handlers::core_diagnosis::card_sales)
            .service(handlers::core_diagnosis::same_industry)
            .service(handlers::core_diagnosis::business_rates)
            .service(handlers::core_diagnosis::dwell_time)
            .service(handlers::core_diagnosis::health_score)
            .service(handlers::core_diagnosis::comprehensive),
    );
}

/// 리스크 분류 라우트를 설정합니다
fn configure_risk_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/risk-classification")
            .service(handlers::risk::classify)
            .service(handlers::risk::detailed_analysis)
            .service(handlers::risk::risk_types)
            .service(handlers::risk::mitigation_strategies),
    );
}

/// 전략 카드 라우트를 설정합니다
fn configure_strategy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/strategy-cards")
            .service(handlers::strategy::generate)
            .service(handlers::strategy::checklist)
            .service(handlers::strategy::templates)
            .service(handlers::strategy::categories)
            .service(handlers::strategy::difficulty_levels)
            .service(handlers::strategy::success_cases),
    );
}

/// 지원 도구 라우트를 설정합니다
fn configure_support_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/support-tools")
            .service(handlers::support::support_centers)
            .service(handlers::support::expert_consultation)
            .service(handlers::support::policy_recommendations)
            .service(handlers::support::success_cases),
    );
}

/// 지도 시각화 라우트를 설정합니다
fn configure_map_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/map-visualization")
            .service(handlers::map::heatmap)
            .service(handlers::map::radius_analysis)
            .service(handlers::map::accessibility)
            .service(handlers::map::analysis_types),
    );
}

/// 상권 디렉터리 라우트를 설정합니다
fn configure_market_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/market-diagnosis")
            .service(handlers::markets::list_markets)
            .service(handlers::markets::get_market)
            .service(handlers::markets::list_districts),
    );
}

/// 서비스 소개 엔드포인트
#[actix_web::get("/")]
async fn index() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "service": "SODAM 상권 진단 백엔드",
        "description": "소상공인을 위한 상권 진단·리스크 분류·전략 추천 API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api/v1/"
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "sodam_backend",
///   "version": "1.0.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "dependency_injection": "Service Registry"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sodam_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Service Registry"
        }
    }))
}

/// API 엔드포인트 인덱스
///
/// NormalizePath::trim() 뒤에 오므로 끝 슬래시 없이 등록해야
/// `/api/v1`과 `/api/v1/` 모두에서 응답합니다.
#[actix_web::get("/api/v1")]
async fn api_index() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "auth": "/api/v1/auth",
        "core_diagnosis": "/api/v1/core-diagnosis",
        "risk_classification": "/api/v1/risk-classification",
        "strategy_cards": "/api/v1/strategy-cards",
        "support_tools": "/api/v1/support-tools",
        "map_visualization": "/api/v1/map-visualization",
        "market_diagnosis": "/api/v1/market-diagnosis"
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "sodam_backend");
    }

    #[actix_web::test]
    async fn test_api_index_lists_feature_scopes() {
        let app = test::init_service(
            App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .service(api_index),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["core_diagnosis"], "/api/v1/core-diagnosis");
        assert_eq!(body["strategy_cards"], "/api/v1/strategy-cards");
    }

    #[actix_web::test]
    async fn test_api_index_serves_trailing_slash() {
        let app = test::init_service(
            App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .service(api_index),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    }
}
