//! 데이터 접근 계층

pub mod users;
