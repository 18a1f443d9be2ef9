//! 지도 시각화 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::models::market::{BusStop, ParkingFacility, SubwayStation};

/// 히트맵 데이터 포인트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub lat: f64,
    pub lng: f64,
    /// 강도 (0-1)
    pub intensity: f64,
    /// 등급별 색상 코드
    pub color: String,
    pub market_code: String,
    pub market_name: String,
    pub grade: String,
    /// 점수 (0-100)
    pub score: f64,
    pub metric_type: String,
    /// 지표의 실제 값
    pub value: f64,
}

/// 히트맵 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub heatmap_data: Vec<HeatmapPoint>,
    pub total_markets: usize,
    pub analysis_type: String,
    pub generation_date: String,
}

/// 반경 내 상권 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInRadius {
    pub market_code: String,
    pub market_name: String,
    pub lat: f64,
    pub lng: f64,
    /// 중심점으로부터 거리 (km, 소수점 2자리)
    pub distance_km: f64,
    pub health_score: f64,
    pub grade: String,
    /// 낮음 / 보통 / 높음 / 매우높음
    pub competition_level: String,
    pub opportunity_score: f64,
}

/// 반경 분석 요약 통계
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_markets: usize,
    pub average_health_score: f64,
    /// A/B 등급 상권 수
    pub high_grade_markets: usize,
    pub competition_density: f64,
    pub opportunity_index: f64,
}

/// 중심 좌표
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterLocation {
    pub lat: f64,
    pub lng: f64,
}

/// 반경 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusAnalysis {
    pub center_location: CenterLocation,
    pub radius_km: f64,
    pub analysis_type: String,
    pub markets_in_radius: Vec<MarketInRadius>,
    pub summary_statistics: SummaryStatistics,
    pub recommendations: Vec<String>,
    pub analysis_date: String,
}

/// 교통 수단 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transportation {
    pub subway_stations: Vec<SubwayStation>,
    pub bus_stops: Vec<BusStop>,
    pub parking_facilities: Vec<ParkingFacility>,
}

/// 접근성 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub market_code: String,
    pub market_name: String,
    pub accessibility_score: u32,
    pub accessibility_grade: String,
    pub transportation: Transportation,
    pub recommendations: Vec<String>,
}

/// 지원되는 분석 유형
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisTypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}
