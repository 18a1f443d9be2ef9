//! 상권 데이터 모델
//!
//! 분석 서비스들이 공유하는 정적 상권 레코드 구조입니다.
//! 월별 시계열(유동인구, 카드매출)과 업종 분포, 창업/폐업/생존률,
//! 체류시간 프로파일, 교통 접근성 프로파일을 포함합니다.

use serde::{Deserialize, Serialize};

/// 월별 시계열 한 지점
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyValue {
    /// `YYYY-MM` 형식의 월
    pub month: String,
    pub value: u64,
}

impl MonthlyValue {
    pub fn new(month: &str, value: u64) -> Self {
        Self {
            month: month.to_string(),
            value,
        }
    }
}

/// 업종별 사업체 수
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryCount {
    pub industry: String,
    pub count: u32,
}

/// 창업률 / 폐업률 / 생존률 (%)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BusinessRates {
    pub startup_rate: f64,
    pub closure_rate: f64,
    pub survival_rate: f64,
}

/// 체류시간 프로파일
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DwellProfile {
    /// 평균 체류시간 (분)
    pub average_minutes: f64,
    /// 체류시간이 긴 시간대
    pub peak_hours: Vec<String>,
    /// 주말 대비 평일 체류시간 비율
    pub weekend_ratio: f64,
}

/// 인근 지하철역
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubwayStation {
    pub station_name: String,
    pub line: String,
    /// 도보 시간 (분)
    pub walking_time: u32,
    /// 거리 (m)
    pub distance_m: f64,
}

/// 인근 버스 정류장
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusStop {
    pub stop_name: String,
    pub route_numbers: Vec<String>,
    pub walking_time: u32,
    pub distance_m: f64,
}

/// 인근 주차 시설
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingFacility {
    pub facility_name: String,
    pub capacity: u32,
    pub walking_time: u32,
    pub distance_m: f64,
    /// 시간당 요금 (원)
    pub hourly_rate: u32,
}

/// 교통 접근성 프로파일
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityProfile {
    /// 접근성 점수 (0-100)
    pub score: u32,
    pub subway_stations: Vec<SubwayStation>,
    pub bus_stops: Vec<BusStop>,
    pub parking_facilities: Vec<ParkingFacility>,
    pub recommendations: Vec<String>,
}

impl AccessibilityProfile {
    /// 점수를 등급으로 변환합니다.
    pub fn grade(&self) -> &'static str {
        match self.score {
            90..=100 => "A",
            80..=89 => "B",
            70..=79 => "C",
            _ => "D",
        }
    }
}

/// 정적 상권 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRecord {
    /// 상권 코드 (예: "10000")
    pub code: String,
    /// 상권명 (예: "대전역 상권")
    pub name: String,
    /// 행정구 (예: "동구")
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    /// 월별 유동인구 시계열
    pub foot_traffic: Vec<MonthlyValue>,
    /// 월별 카드매출 시계열 (원)
    pub card_sales: Vec<MonthlyValue>,
    /// 업종별 사업체 수
    pub industries: Vec<IndustryCount>,
    pub rates: BusinessRates,
    pub dwell: DwellProfile,
    pub accessibility: AccessibilityProfile,
}

impl MarketRecord {
    /// 전체 사업체 수
    pub fn total_businesses(&self) -> u32 {
        self.industries.iter().map(|i| i.count).sum()
    }

    /// 특정 업종의 사업체 수 (없는 업종은 0)
    pub fn industry_count(&self, industry: &str) -> u32 {
        self.industries
            .iter()
            .find(|i| i.industry == industry)
            .map(|i| i.count)
            .unwrap_or(0)
    }

    /// 현재(최신) 월 유동인구
    pub fn current_traffic(&self) -> u64 {
        self.foot_traffic.last().map(|m| m.value).unwrap_or(0)
    }

    /// 현재(최신) 월 카드매출
    pub fn current_sales(&self) -> u64 {
        self.card_sales.last().map(|m| m.value).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MarketRecord {
        MarketRecord {
            code: "99999".to_string(),
            name: "테스트 상권".to_string(),
            district: "중구".to_string(),
            lat: 36.35,
            lng: 127.38,
            foot_traffic: vec![
                MonthlyValue::new("2024-01", 1000),
                MonthlyValue::new("2024-02", 1100),
            ],
            card_sales: vec![MonthlyValue::new("2024-01", 5000)],
            industries: vec![
                IndustryCount {
                    industry: "식음료업".to_string(),
                    count: 10,
                },
                IndustryCount {
                    industry: "의류업".to_string(),
                    count: 5,
                },
            ],
            rates: BusinessRates {
                startup_rate: 10.0,
                closure_rate: 5.0,
                survival_rate: 95.0,
            },
            dwell: DwellProfile {
                average_minutes: 40.0,
                peak_hours: vec!["12:00-14:00".to_string()],
                weekend_ratio: 1.2,
            },
            accessibility: AccessibilityProfile {
                score: 85,
                subway_stations: vec![],
                bus_stops: vec![],
                parking_facilities: vec![],
                recommendations: vec![],
            },
        }
    }

    #[test]
    fn test_total_and_industry_counts() {
        let record = sample_record();
        assert_eq!(record.total_businesses(), 15);
        assert_eq!(record.industry_count("식음료업"), 10);
        assert_eq!(record.industry_count("없는업종"), 0);
    }

    #[test]
    fn test_current_values_take_latest_month() {
        let record = sample_record();
        assert_eq!(record.current_traffic(), 1100);
        assert_eq!(record.current_sales(), 5000);
    }

    #[test]
    fn test_accessibility_grade_boundaries() {
        let mut profile = sample_record().accessibility;
        profile.score = 90;
        assert_eq!(profile.grade(), "A");
        profile.score = 89;
        assert_eq!(profile.grade(), "B");
        profile.score = 69;
        assert_eq!(profile.grade(), "D");
    }
}
