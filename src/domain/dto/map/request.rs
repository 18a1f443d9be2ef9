//! 지도 시각화 요청 DTO

use serde::{Deserialize, Serialize};

/// 히트맵 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapQuery {
    /// health_score / foot_traffic / competition (기본 health_score)
    pub metric: Option<String>,
}

impl HeatmapQuery {
    pub fn metric(&self) -> &str {
        self.metric.as_deref().unwrap_or("health_score")
    }
}

/// 반경 분석 POST 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusAnalysisRequest {
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_km: f64,
    /// comprehensive / competition / opportunity (기본 comprehensive)
    pub analysis_type: Option<String>,
}

impl RadiusAnalysisRequest {
    pub fn analysis_type(&self) -> &str {
        self.analysis_type.as_deref().unwrap_or("comprehensive")
    }
}
