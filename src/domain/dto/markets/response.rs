//! 상권 디렉터리 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::models::market::MarketRecord;

/// 상권 목록 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    pub market_code: String,
    pub market_name: String,
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    pub total_businesses: u32,
    pub current_monthly_traffic: u64,
}

impl From<&MarketRecord> for MarketSummary {
    fn from(market: &MarketRecord) -> Self {
        Self {
            market_code: market.code.clone(),
            market_name: market.name.clone(),
            district: market.district.clone(),
            lat: market.lat,
            lng: market.lng,
            total_businesses: market.total_businesses(),
            current_monthly_traffic: market.current_traffic(),
        }
    }
}

/// 상권 상세 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDetail {
    pub market_code: String,
    pub market_name: String,
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    pub total_businesses: u32,
    pub industry_count: usize,
    pub current_monthly_traffic: u64,
    pub current_monthly_sales: u64,
    /// 창업률 (%)
    pub startup_rate: f64,
    /// 폐업률 (%)
    pub closure_rate: f64,
    /// 생존률 (%)
    pub survival_rate: f64,
    /// 평균 체류시간 (분)
    pub average_dwell_minutes: f64,
    pub accessibility_score: u32,
}

impl From<&MarketRecord> for MarketDetail {
    fn from(market: &MarketRecord) -> Self {
        Self {
            market_code: market.code.clone(),
            market_name: market.name.clone(),
            district: market.district.clone(),
            lat: market.lat,
            lng: market.lng,
            total_businesses: market.total_businesses(),
            industry_count: market.industries.len(),
            current_monthly_traffic: market.current_traffic(),
            current_monthly_sales: market.current_sales(),
            startup_rate: market.rates.startup_rate,
            closure_rate: market.rates.closure_rate,
            survival_rate: market.rates.survival_rate,
            average_dwell_minutes: market.dwell.average_minutes,
            accessibility_score: market.accessibility.score,
        }
    }
}

/// 행정구별 상권 현황
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictSummary {
    pub district: String,
    pub market_count: usize,
    pub market_codes: Vec<String>,
}
