//! # HTTP Handlers Module
//!
//! 기능 영역별 HTTP 핸들러 모음입니다.
//!
//! - [`auth`] - 회원가입 / 로그인
//! - [`core_diagnosis`] - 핵심 진단 지표 (5대 지표 + 종합)
//! - [`risk`] - 리스크 유형 분류
//! - [`strategy`] - 맞춤형 전략 카드
//! - [`support`] - 지원센터 / 전문가 / 정책 추천
//! - [`map`] - 지도 시각화 (히트맵 / 반경 / 접근성)
//! - [`markets`] - 상권 디렉터리

pub mod auth;
pub mod core_diagnosis;
pub mod map;
pub mod markets;
pub mod risk;
pub mod strategy;
pub mod support;
