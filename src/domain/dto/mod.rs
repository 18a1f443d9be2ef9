//! 요청/응답 DTO 모음
//!
//! 기능 영역별로 request / response 모듈을 나눕니다.

pub mod diagnosis;
pub mod map;
pub mod markets;
pub mod risk;
pub mod strategy;
pub mod support;
pub mod users;
