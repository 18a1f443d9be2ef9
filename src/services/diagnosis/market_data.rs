//! 상권 샘플 데이터 저장소
//!
//! 분석 서비스들이 공유하는 정적 데이터셋입니다.
//! 실제 운영에서는 외부 상권 데이터 API나 데이터베이스로 교체됩니다.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::registry::ServiceRegistration;
use crate::domain::models::market::{
    AccessibilityProfile, BusStop, BusinessRates, DwellProfile, IndustryCount, MarketRecord,
    MonthlyValue, ParkingFacility, SubwayStation,
};

/// 상권 데이터 저장소
pub struct MarketDataStore {
    markets: Vec<MarketRecord>,
}

static INSTANCE: Lazy<Arc<MarketDataStore>> = Lazy::new(|| {
    Arc::new(MarketDataStore {
        markets: build_sample_markets(),
    })
});

inventory::submit! {
    ServiceRegistration {
        name: "MarketDataStore",
        constructor: || { MarketDataStore::instance(); },
    }
}

impl MarketDataStore {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<MarketDataStore> {
        INSTANCE.clone()
    }

    /// 전체 상권 목록
    pub fn all(&self) -> &[MarketRecord] {
        &self.markets
    }

    /// 상권 코드로 조회
    pub fn find(&self, market_code: &str) -> Option<&MarketRecord> {
        self.markets.iter().find(|m| m.code == market_code)
    }

    /// 등록된 상권 수
    pub fn count(&self) -> usize {
        self.markets.len()
    }
}

fn monthly_series(values: &[u64]) -> Vec<MonthlyValue> {
    const MONTHS: [&str; 12] = [
        "2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06", "2024-07", "2024-08",
        "2024-09", "2024-10", "2024-11", "2024-12",
    ];

    MONTHS
        .iter()
        .zip(values)
        .map(|(month, value)| MonthlyValue::new(month, *value))
        .collect()
}

fn industries(entries: &[(&str, u32)]) -> Vec<IndustryCount> {
    entries
        .iter()
        .map(|(industry, count)| IndustryCount {
            industry: industry.to_string(),
            count: *count,
        })
        .collect()
}

fn strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// 대전 지역 샘플 상권 3곳
fn build_sample_markets() -> Vec<MarketRecord> {
    vec![
        MarketRecord {
            code: "10000".to_string(),
            name: "대전역 상권".to_string(),
            district: "동구".to_string(),
            lat: 36.3315,
            lng: 127.4346,
            foot_traffic: monthly_series(&[
                150000, 145000, 160000, 155000, 170000, 165000, 180000, 175000, 190000, 185000,
                200000, 195000,
            ]),
            card_sales: monthly_series(&[
                2500000000, 2400000000, 2600000000, 2550000000, 2700000000, 2650000000,
                2800000000, 2750000000, 2900000000, 2850000000, 3000000000, 2950000000,
            ]),
            industries: industries(&[
                ("식음료업", 45),
                ("의류업", 32),
                ("생활용품", 28),
                ("전자제품", 15),
                ("화장품", 12),
            ]),
            rates: BusinessRates {
                startup_rate: 12.5,
                closure_rate: 8.3,
                survival_rate: 91.7,
            },
            dwell: DwellProfile {
                average_minutes: 45.0,
                peak_hours: strings(&["12:00-14:00", "18:00-20:00"]),
                weekend_ratio: 1.3,
            },
            accessibility: AccessibilityProfile {
                score: 88,
                subway_stations: vec![SubwayStation {
                    station_name: "대전역".to_string(),
                    line: "1호선".to_string(),
                    walking_time: 3,
                    distance_m: 250.0,
                }],
                bus_stops: vec![BusStop {
                    stop_name: "대전역 정류장".to_string(),
                    route_numbers: strings(&["201", "501", "611"]),
                    walking_time: 2,
                    distance_m: 150.0,
                }],
                parking_facilities: vec![ParkingFacility {
                    facility_name: "대전역 공영주차장".to_string(),
                    capacity: 500,
                    walking_time: 5,
                    distance_m: 400.0,
                    hourly_rate: 2000,
                }],
                recommendations: strings(&[
                    "지하철역과의 연결성이 우수합니다.",
                    "출퇴근 시간대 주차 공간 확보가 필요합니다.",
                ]),
            },
        },
        MarketRecord {
            code: "20000".to_string(),
            name: "유성온천역 상권".to_string(),
            district: "유성구".to_string(),
            lat: 36.3540,
            lng: 127.3420,
            foot_traffic: monthly_series(&[
                120000, 118000, 125000, 122000, 130000, 128000, 135000, 132000, 140000, 138000,
                145000, 142000,
            ]),
            card_sales: monthly_series(&[
                1800000000, 1750000000, 1850000000, 1820000000, 1900000000, 1880000000,
                1950000000, 1920000000, 2000000000, 1980000000, 2050000000, 2020000000,
            ]),
            industries: industries(&[
                ("식음료업", 38),
                ("의류업", 25),
                ("생활용품", 22),
                ("전자제품", 12),
                ("화장품", 8),
            ]),
            rates: BusinessRates {
                startup_rate: 15.2,
                closure_rate: 6.8,
                survival_rate: 93.2,
            },
            dwell: DwellProfile {
                average_minutes: 38.0,
                peak_hours: strings(&["11:00-13:00", "17:00-19:00"]),
                weekend_ratio: 1.5,
            },
            accessibility: AccessibilityProfile {
                score: 82,
                subway_stations: vec![SubwayStation {
                    station_name: "유성온천역".to_string(),
                    line: "1호선".to_string(),
                    walking_time: 4,
                    distance_m: 300.0,
                }],
                bus_stops: vec![BusStop {
                    stop_name: "유성온천역 정류장".to_string(),
                    route_numbers: strings(&["107", "116", "121"]),
                    walking_time: 3,
                    distance_m: 200.0,
                }],
                parking_facilities: vec![ParkingFacility {
                    facility_name: "유성온천 공영주차장".to_string(),
                    capacity: 300,
                    walking_time: 6,
                    distance_m: 450.0,
                    hourly_rate: 1500,
                }],
                recommendations: strings(&[
                    "관광객 유입이 많아 대중교통 접근성이 중요합니다.",
                    "주말 주차 수요 대비가 필요합니다.",
                ]),
            },
        },
        MarketRecord {
            code: "30000".to_string(),
            name: "둔산 먹자골목 상권".to_string(),
            district: "서구".to_string(),
            lat: 36.3510,
            lng: 127.3780,
            foot_traffic: monthly_series(&[
                120000, 110000, 101000, 93000, 85000, 78000, 72000, 66000, 61000, 56000, 51000,
                47000,
            ]),
            card_sales: monthly_series(&[
                900000000, 855000000, 812000000, 771000000, 733000000, 696000000, 661000000,
                628000000, 597000000, 567000000, 539000000, 512000000,
            ]),
            industries: industries(&[
                ("식음료업", 52),
                ("의류업", 18),
                ("생활용품", 14),
                ("전자제품", 6),
                ("화장품", 5),
            ]),
            rates: BusinessRates {
                startup_rate: 6.2,
                closure_rate: 14.8,
                survival_rate: 78.5,
            },
            dwell: DwellProfile {
                average_minutes: 22.0,
                peak_hours: strings(&["18:00-20:00"]),
                weekend_ratio: 0.9,
            },
            accessibility: AccessibilityProfile {
                score: 64,
                subway_stations: vec![],
                bus_stops: vec![BusStop {
                    stop_name: "둔산동 정류장".to_string(),
                    route_numbers: strings(&["301", "318"]),
                    walking_time: 5,
                    distance_m: 350.0,
                }],
                parking_facilities: vec![ParkingFacility {
                    facility_name: "둔산 민영주차장".to_string(),
                    capacity: 120,
                    walking_time: 8,
                    distance_m: 600.0,
                    hourly_rate: 3000,
                }],
                recommendations: strings(&[
                    "지하철 접근성이 낮아 버스 노선 안내가 중요합니다.",
                    "주차 요금 부담이 커 고객 주차 지원을 검토하세요.",
                ]),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_has_three_sample_markets() {
        let store = MarketDataStore::instance();
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_find_known_market() {
        let store = MarketDataStore::instance();
        let market = store.find("10000").unwrap();

        assert_eq!(market.name, "대전역 상권");
        assert_eq!(market.foot_traffic.len(), 12);
        assert_eq!(market.current_traffic(), 195000);
        assert_eq!(market.total_businesses(), 132);
    }

    #[test]
    fn test_find_unknown_market_returns_none() {
        let store = MarketDataStore::instance();
        assert!(store.find("99999").is_none());
    }
}
