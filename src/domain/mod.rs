//! # Domain Module
//!
//! 도메인 계층입니다.
//!
//! - [`entities`] - 영속화되는 엔티티 (회원)
//! - [`models`] - 비영속 도메인 모델 (상권 레코드)
//! - [`dto`] - HTTP 요청/응답 DTO

pub mod dto;
pub mod entities;
pub mod models;
