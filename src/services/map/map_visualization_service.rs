//! 지도 시각화 서비스
//!
//! 상권 건강 지표를 지도 위에 표현하기 위한 히트맵·반경 분석·
//! 접근성 분석 데이터를 생성합니다.

use chrono::Utc;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::map::response::{
    AccessibilityReport, AnalysisTypeInfo, CenterLocation, HeatmapPoint, HeatmapResponse,
    MarketInRadius, RadiusAnalysis, SummaryStatistics, Transportation,
};
use crate::domain::models::market::MarketRecord;
use crate::services::diagnosis::{CoreDiagnosisService, MarketDataStore};

/// 지구 반지름 (km)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// 지도 시각화 서비스
pub struct MapVisualizationService;

static INSTANCE: Lazy<Arc<MapVisualizationService>> =
    Lazy::new(|| Arc::new(MapVisualizationService));

inventory::submit! {
    ServiceRegistration {
        name: "MapVisualizationService",
        constructor: || { MapVisualizationService::instance(); },
    }
}

impl MapVisualizationService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<MapVisualizationService> {
        INSTANCE.clone()
    }

    /// 지표별 히트맵 데이터
    ///
    /// 지원 지표: health_score / foot_traffic / competition.
    /// 강도는 점수를 0-1로 정규화한 값입니다.
    pub fn heatmap(&self, metric: &str) -> AppResult<HeatmapResponse> {
        if !matches!(metric, "health_score" | "foot_traffic" | "competition") {
            return Err(AppError::ValidationError(format!(
                "지원하지 않는 지표입니다: {}",
                metric
            )));
        }

        let store = MarketDataStore::instance();
        let diagnosis = CoreDiagnosisService::instance();

        let mut points = Vec::with_capacity(store.count());
        for market in store.all() {
            let (score, grade, value) = match metric {
                "health_score" => {
                    let health = diagnosis.health_score(&market.code, None)?;
                    (health.total_score, health.final_grade, health.total_score)
                }
                "foot_traffic" => {
                    let traffic = diagnosis.foot_traffic_analysis(&market.code, 12)?;
                    let score = grade_score(&traffic.grade);
                    (score, traffic.grade, traffic.current_monthly_traffic as f64)
                }
                _ => {
                    let ratio = dominant_industry_ratio(market);
                    let grade = competition_grade(ratio);
                    (grade_score(grade), grade.to_string(), round2(ratio))
                }
            };

            points.push(HeatmapPoint {
                lat: market.lat,
                lng: market.lng,
                intensity: round2(score / 100.0),
                color: grade_color(&grade).to_string(),
                market_code: market.code.clone(),
                market_name: market.name.clone(),
                grade,
                score,
                metric_type: metric.to_string(),
                value,
            });
        }

        Ok(HeatmapResponse {
            total_markets: points.len(),
            heatmap_data: points,
            analysis_type: metric.to_string(),
            generation_date: Utc::now().to_rfc3339(),
        })
    }

    /// 중심 좌표 기준 반경 내 상권 분석
    pub fn radius_analysis(
        &self,
        center_lat: f64,
        center_lng: f64,
        radius_km: f64,
        analysis_type: &str,
    ) -> AppResult<RadiusAnalysis> {
        if !(-90.0..=90.0).contains(&center_lat) || !(-180.0..=180.0).contains(&center_lng) {
            return Err(AppError::ValidationError(
                "유효하지 않은 중심 좌표입니다.".to_string(),
            ));
        }
        if radius_km <= 0.0 || radius_km > 50.0 {
            return Err(AppError::ValidationError(
                "반경은 0보다 크고 50km 이하여야 합니다.".to_string(),
            ));
        }
        if !matches!(analysis_type, "comprehensive" | "competition" | "opportunity") {
            return Err(AppError::ValidationError(format!(
                "지원하지 않는 분석 유형입니다: {}",
                analysis_type
            )));
        }

        let store = MarketDataStore::instance();
        let diagnosis = CoreDiagnosisService::instance();

        let mut markets = Vec::new();
        for market in store.all() {
            let distance = haversine_km(center_lat, center_lng, market.lat, market.lng);
            if distance > radius_km {
                continue;
            }

            let health = diagnosis.health_score(&market.code, None)?;
            let ratio = dominant_industry_ratio(market);
            let opportunity =
                round2(health.total_score * 0.7 + (100.0 - ratio.min(100.0)) * 0.3);

            markets.push(MarketInRadius {
                market_code: market.code.clone(),
                market_name: market.name.clone(),
                lat: market.lat,
                lng: market.lng,
                distance_km: round2(distance),
                health_score: health.total_score,
                grade: health.final_grade,
                competition_level: competition_level(ratio).to_string(),
                opportunity_score: opportunity,
            });
        }

        markets.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let summary = summarize(&markets);
        let recommendations = radius_recommendations(analysis_type, &markets, &summary);

        Ok(RadiusAnalysis {
            center_location: CenterLocation {
                lat: center_lat,
                lng: center_lng,
            },
            radius_km,
            analysis_type: analysis_type.to_string(),
            markets_in_radius: markets,
            summary_statistics: summary,
            recommendations,
            analysis_date: Utc::now().to_rfc3339(),
        })
    }

    /// 상권 접근성 분석
    pub fn accessibility(&self, market_code: &str) -> AppResult<AccessibilityReport> {
        let store = MarketDataStore::instance();
        let market = store.find(market_code).ok_or_else(|| {
            AppError::NotFound("해당 상권의 접근성 데이터가 없습니다.".to_string())
        })?;

        let profile = &market.accessibility;

        Ok(AccessibilityReport {
            market_code: market.code.clone(),
            market_name: market.name.clone(),
            accessibility_score: profile.score,
            accessibility_grade: profile.grade().to_string(),
            transportation: Transportation {
                subway_stations: profile.subway_stations.clone(),
                bus_stops: profile.bus_stops.clone(),
                parking_facilities: profile.parking_facilities.clone(),
            },
            recommendations: profile.recommendations.clone(),
        })
    }

    /// 지원되는 반경 분석 유형
    pub fn analysis_types(&self) -> Vec<AnalysisTypeInfo> {
        vec![
            AnalysisTypeInfo {
                id: "comprehensive".to_string(),
                name: "종합 분석".to_string(),
                description: "건강 점수·경쟁·기회 요인을 모두 반영한 분석".to_string(),
            },
            AnalysisTypeInfo {
                id: "competition".to_string(),
                name: "경쟁 분석".to_string(),
                description: "반경 내 동일업종 경쟁 밀집도 중심 분석".to_string(),
            },
            AnalysisTypeInfo {
                id: "opportunity".to_string(),
                name: "기회 분석".to_string(),
                description: "진입 기회 점수 중심 분석".to_string(),
            },
        ]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 하버사인 공식으로 두 좌표 사이의 거리를 계산합니다.
fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// 가장 점포 수가 많은 업종의 비율 (%)
fn dominant_industry_ratio(market: &MarketRecord) -> f64 {
    let total = market.total_businesses();
    if total == 0 {
        return 0.0;
    }

    let max_count = market
        .industries
        .iter()
        .map(|entry| entry.count)
        .max()
        .unwrap_or(0);

    max_count as f64 / total as f64 * 100.0
}

fn competition_grade(ratio: f64) -> &'static str {
    if ratio > 30.0 {
        "D"
    } else if ratio > 20.0 {
        "C"
    } else if ratio > 10.0 {
        "B"
    } else {
        "A"
    }
}

fn competition_level(ratio: f64) -> &'static str {
    if ratio > 30.0 {
        "매우높음"
    } else if ratio > 20.0 {
        "높음"
    } else if ratio > 10.0 {
        "보통"
    } else {
        "낮음"
    }
}

fn grade_score(grade: &str) -> f64 {
    match grade {
        "A" => 100.0,
        "B" => 80.0,
        "C" => 60.0,
        "D" => 40.0,
        _ => 60.0,
    }
}

fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "#2ECC71",
        "B" => "#F1C40F",
        "C" => "#E67E22",
        _ => "#E74C3C",
    }
}

fn summarize(markets: &[MarketInRadius]) -> SummaryStatistics {
    if markets.is_empty() {
        return SummaryStatistics {
            total_markets: 0,
            average_health_score: 0.0,
            high_grade_markets: 0,
            competition_density: 0.0,
            opportunity_index: 0.0,
        };
    }

    let count = markets.len() as f64;
    let average_health = markets.iter().map(|m| m.health_score).sum::<f64>() / count;
    let high_grade = markets
        .iter()
        .filter(|m| m.grade == "A" || m.grade == "B")
        .count();
    let dense = markets
        .iter()
        .filter(|m| m.competition_level == "높음" || m.competition_level == "매우높음")
        .count();
    let opportunity = markets.iter().map(|m| m.opportunity_score).sum::<f64>() / count;

    SummaryStatistics {
        total_markets: markets.len(),
        average_health_score: round2(average_health),
        high_grade_markets: high_grade,
        competition_density: round2(dense as f64 / count * 100.0),
        opportunity_index: round2(opportunity),
    }
}

fn radius_recommendations(
    analysis_type: &str,
    markets: &[MarketInRadius],
    summary: &SummaryStatistics,
) -> Vec<String> {
    if markets.is_empty() {
        return vec!["반경 내 분석 가능한 상권이 없습니다. 반경을 넓혀보세요.".to_string()];
    }

    let mut recommendations = Vec::new();

    match analysis_type {
        "competition" => {
            if summary.competition_density >= 50.0 {
                recommendations
                    .push("반경 내 경쟁 밀집도가 높습니다. 차별화 전략이 필수적입니다.".to_string());
            } else {
                recommendations
                    .push("경쟁 밀집도가 관리 가능한 수준입니다.".to_string());
            }
        }
        "opportunity" => {
            if let Some(best) = markets.iter().max_by(|a, b| {
                a.opportunity_score
                    .partial_cmp(&b.opportunity_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }) {
                recommendations.push(format!(
                    "기회 점수가 가장 높은 상권은 {}입니다.",
                    best.market_name
                ));
            }
        }
        _ => {
            recommendations.push(format!(
                "반경 내 {}개 상권의 평균 건강 점수는 {:.1}점입니다.",
                summary.total_markets, summary.average_health_score
            ));
            if summary.high_grade_markets > 0 {
                recommendations.push(format!(
                    "A·B 등급 상권이 {}곳 있습니다. 우선 검토를 권장합니다.",
                    summary.high_grade_markets
                ));
            } else {
                recommendations.push(
                    "상위 등급 상권이 없습니다. 진입 시 신중한 검토가 필요합니다.".to_string(),
                );
            }
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_distance() {
        let d = haversine_km(36.3315, 127.4346, 36.3315, 127.4346);
        assert!(d < 1e-9);
    }

    #[test]
    fn test_haversine_daejeon_stations() {
        // 대전역(36.3315, 127.4346) - 유성온천역(36.3540, 127.3420)은 약 8-9km
        let d = haversine_km(36.3315, 127.4346, 36.3540, 127.3420);
        assert!(d > 7.0 && d < 10.0, "distance was {}", d);
    }

    #[test]
    fn test_heatmap_health_score() {
        let service = MapVisualizationService::instance();
        let response = service.heatmap("health_score").unwrap();

        assert_eq!(response.total_markets, 3);
        assert_eq!(response.analysis_type, "health_score");
        for point in &response.heatmap_data {
            assert!((0.0..=1.0).contains(&point.intensity));
            assert!(point.color.starts_with('#'));
            assert_eq!(point.metric_type, "health_score");
        }
    }

    #[test]
    fn test_heatmap_foot_traffic_value_is_current_traffic() {
        let service = MapVisualizationService::instance();
        let response = service.heatmap("foot_traffic").unwrap();

        let daejeon = response
            .heatmap_data
            .iter()
            .find(|p| p.market_code == "10000")
            .unwrap();
        assert_eq!(daejeon.value, 195000.0);
    }

    #[test]
    fn test_heatmap_invalid_metric() {
        let service = MapVisualizationService::instance();
        assert!(matches!(
            service.heatmap("sales_volume"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_radius_analysis_includes_nearby_markets() {
        let service = MapVisualizationService::instance();
        // 대전역 중심 2km: 10000만 포함
        let result = service
            .radius_analysis(36.3315, 127.4346, 2.0, "comprehensive")
            .unwrap();

        assert_eq!(result.markets_in_radius.len(), 1);
        assert_eq!(result.markets_in_radius[0].market_code, "10000");
        assert_eq!(result.summary_statistics.total_markets, 1);
    }

    #[test]
    fn test_radius_analysis_wide_radius_sorted_by_distance() {
        let service = MapVisualizationService::instance();
        let result = service
            .radius_analysis(36.3315, 127.4346, 20.0, "comprehensive")
            .unwrap();

        assert_eq!(result.markets_in_radius.len(), 3);
        let distances: Vec<f64> = result
            .markets_in_radius
            .iter()
            .map(|m| m.distance_km)
            .collect();
        let mut sorted = distances.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(distances, sorted);
    }

    #[test]
    fn test_radius_analysis_invalid_inputs() {
        let service = MapVisualizationService::instance();

        assert!(matches!(
            service.radius_analysis(95.0, 127.0, 5.0, "comprehensive"),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.radius_analysis(36.3, 127.4, 0.0, "comprehensive"),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.radius_analysis(36.3, 127.4, 5.0, "unknown"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_accessibility_report() {
        let service = MapVisualizationService::instance();
        let report = service.accessibility("10000").unwrap();

        assert_eq!(report.market_name, "대전역 상권");
        assert_eq!(report.accessibility_score, 88);
        assert_eq!(report.accessibility_grade, "B");
        assert!(!report.transportation.subway_stations.is_empty());
    }

    #[test]
    fn test_accessibility_unknown_market() {
        let service = MapVisualizationService::instance();
        assert!(matches!(
            service.accessibility("99999"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_analysis_types_catalog() {
        let service = MapVisualizationService::instance();
        let types = service.analysis_types();

        assert_eq!(types.len(), 3);
        assert!(types.iter().any(|t| t.id == "comprehensive"));
    }
}
