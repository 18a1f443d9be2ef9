pub mod map_visualization_service;

pub use map_visualization_service::MapVisualizationService;
