pub mod auth;
pub mod diagnosis;
pub mod map;
pub mod risk;
pub mod strategy;
pub mod support;
pub mod users;
