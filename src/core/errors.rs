//! # Application Error Handling System
//!
//! 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror` 기반의 `AppError` 열거형이 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 봉투(envelope)로 자동 변환됩니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 다음 표준 형식을 따릅니다:
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "code": "DATA_NOT_FOUND",
//!     "message": "해당 상권의 유동인구 데이터가 없습니다."
//!   }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 에러 코드 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `VALIDATION_ERROR` |
//! | `AuthenticationError` | 401 Unauthorized | `UNAUTHORIZED` |
//! | `AuthorizationError` | 403 Forbidden | `FORBIDDEN` |
//! | `NotFound` | 404 Not Found | `DATA_NOT_FOUND` |
//! | `ConflictError` | 409 Conflict | `CONFLICT` |
//! | `DatabaseError` | 500 Internal Server Error | `INTERNAL_ERROR` |
//! | `InternalError` | 500 Internal Server Error | `INTERNAL_ERROR` |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층은 `Result<T, AppError>`를 반환하고, 핸들러는 `?`로 전파만 합니다.
/// 상태 코드와 에러 코드 매핑은 `ResponseError` 구현에 모여 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스 없음 (404)
    ///
    /// 존재하지 않는 상권 코드, 전략 ID 등 조회 실패에 사용됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 또는 비즈니스 규칙 위반 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 데이터베이스 연산 오류 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상하지 못한 시스템 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 기계 판독용 에러 코드를 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "DATA_NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::AuthenticationError(_) => "UNAUTHORIZED",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 클라이언트에 노출되는 메시지를 반환합니다.
    ///
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지로 대체합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "서버 내부 오류가 발생했습니다.".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        if matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_)) {
            log::error!("내부 오류: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": {
                "code": self.code(),
                "message": self.public_message(),
            }
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let parsed = raw.parse::<u32>().context("기간 파라미터 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("업종은 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("해당 상권 데이터가 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 아이디입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("비밀번호가 올바르지 않습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = AppError::InternalError("mongodb timeout at 10.0.0.3".to_string());

        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert!(!error.public_message().contains("mongodb"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::ValidationError(String::new()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::NotFound(String::new()).code(), "DATA_NOT_FOUND");
        assert_eq!(AppError::ConflictError(String::new()).code(), "CONFLICT");
        assert_eq!(AppError::AuthenticationError(String::new()).code(), "UNAUTHORIZED");
        assert_eq!(AppError::AuthorizationError(String::new()).code(), "FORBIDDEN");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("추가 컨텍스트");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("추가 컨텍스트"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
