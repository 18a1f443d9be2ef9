//! 비영속 도메인 모델

pub mod market;

pub use market::{
    AccessibilityProfile, BusStop, BusinessRates, DwellProfile, IndustryCount, MarketRecord,
    MonthlyValue, ParkingFacility, SubwayStation,
};
