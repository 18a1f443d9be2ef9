pub mod core_diagnosis_service;
pub mod market_data;

pub use core_diagnosis_service::CoreDiagnosisService;
pub use market_data::MarketDataStore;
