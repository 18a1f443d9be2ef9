//! 공통 유틸리티 모듈
//!
//! - [`display_terminal`] - 초기화 과정의 터미널 출력 포맷팅
//! - [`string_utils`] - 문자열 검증 및 정리

pub mod display_terminal;
pub mod string_utils;
