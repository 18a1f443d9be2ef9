//! 영속화 도메인 엔티티

pub mod users;
