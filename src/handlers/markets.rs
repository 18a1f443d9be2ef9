//! # 상권 디렉터리 HTTP 핸들러
//!
//! 진단 대상 상권 목록과 상세 정보를 제공합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/markets` | 상권 목록 |
//! | `GET` | `/markets/{market_code}` | 상권 상세 |
//! | `GET` | `/districts` | 행정구별 상권 현황 |

use actix_web::{HttpResponse, get, web};
use std::collections::BTreeMap;

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::markets::response::{DistrictSummary, MarketDetail, MarketSummary};
use crate::services::diagnosis::MarketDataStore;

/// 상권 목록 핸들러
///
/// `GET /api/v1/market-diagnosis/markets`
#[get("/markets")]
pub async fn list_markets() -> Result<HttpResponse, AppError> {
    let store = MarketDataStore::instance();
    let markets: Vec<MarketSummary> = store.all().iter().map(MarketSummary::from).collect();

    Ok(response::ok(markets))
}

/// 상권 상세 핸들러
///
/// `GET /api/v1/market-diagnosis/markets/{market_code}`
#[get("/markets/{market_code}")]
pub async fn get_market(market_code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let store = MarketDataStore::instance();
    let market = store
        .find(&market_code)
        .ok_or_else(|| AppError::NotFound("해당 상권 데이터가 없습니다.".to_string()))?;

    Ok(response::ok(MarketDetail::from(market)))
}

/// 행정구별 상권 현황 핸들러
///
/// `GET /api/v1/market-diagnosis/districts`
#[get("/districts")]
pub async fn list_districts() -> Result<HttpResponse, AppError> {
    let store = MarketDataStore::instance();

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for market in store.all() {
        grouped
            .entry(market.district.clone())
            .or_default()
            .push(market.code.clone());
    }

    let districts: Vec<DistrictSummary> = grouped
        .into_iter()
        .map(|(district, market_codes)| DistrictSummary {
            district,
            market_count: market_codes.len(),
            market_codes,
        })
        .collect();

    Ok(response::ok(districts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_list_markets_envelope() {
        let app = test::init_service(App::new().service(list_markets)).await;

        let req = test::TestRequest::get().uri("/markets").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_get_market_detail() {
        let app = test::init_service(App::new().service(get_market)).await;

        let req = test::TestRequest::get().uri("/markets/10000").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["market_name"], "대전역 상권");
        assert_eq!(body["data"]["district"], "동구");
    }

    #[actix_web::test]
    async fn test_get_unknown_market_returns_404_envelope() {
        let app = test::init_service(App::new().service(get_market)).await;

        let req = test::TestRequest::get().uri("/markets/99999").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "DATA_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_list_districts_grouping() {
        let app = test::init_service(App::new().service(list_districts)).await;

        let req = test::TestRequest::get().uri("/districts").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let districts = body["data"].as_array().unwrap();
        assert_eq!(districts.len(), 3);
        assert!(districts.iter().all(|d| d["market_count"] == 1));
    }
}
