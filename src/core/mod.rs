//! # Core Module
//!
//! 애플리케이션 전역 기반 기능을 담당하는 모듈입니다.
//!
//! - [`errors`] - 통합 에러 타입과 HTTP 응답 매핑
//! - [`registry`] - 싱글톤 서비스 레지스트리
//! - [`response`] - 표준 성공 응답 봉투 헬퍼

pub mod errors;
pub mod registry;
pub mod response;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registry::{ServiceLocator, ServiceRegistration};
