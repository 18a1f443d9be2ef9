pub mod strategy_card_service;

pub use strategy_card_service::StrategyCardService;
