//! # 인증 HTTP 핸들러
//!
//! 회원가입과 로그인 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/register` | 회원가입 | 201 Created |
//! | `POST` | `/login` | 로그인 | 200 OK |

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::response;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::services::users::user_service::UserService;

/// 회원가입 핸들러
///
/// 새로운 소상공인 사용자 계정을 생성합니다.
/// 아이디와 이메일의 고유성을 검증하며, 비밀번호는 bcrypt로 해시되어 저장됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "sodam_user",
///   "email": "owner@example.com",
///   "password": "securepass123",
///   "name": "김소담",
///   "userType": "ENTREPRENEUR",
///   "businessStage": "PLANNING"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "success": true,
///   "message": "회원가입이 완료되었습니다.",
///   "data": { "id": "...", "username": "sodam_user", "email": "owner@example.com" },
///   "timestamp": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 중복 아이디/이메일 (409 Conflict)
/// ```json
/// {
///   "success": false,
///   "error": { "code": "CONFLICT", "message": "이미 사용 중인 아이디입니다." }
/// }
/// ```
#[post("/register")]
pub async fn register(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.register(payload.into_inner()).await?;

    Ok(response::created_with_message(
        user,
        "회원가입이 완료되었습니다.",
    ))
}

/// 로그인 핸들러
///
/// 아이디와 비밀번호를 검증하고 JWT 액세스 토큰을 발급합니다.
/// 존재하지 않는 아이디와 잘못된 비밀번호는 동일한 메시지로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "message": "로그인에 성공했습니다.",
///   "data": {
///     "accessToken": "eyJhbGciOiJIUzI1NiIs...",
///     "tokenType": "Bearer",
///     "expiresIn": 86400,
///     "user": { "id": "...", "username": "sodam_user" }
///   },
///   "timestamp": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 인증 실패 (401 Unauthorized)
/// ```json
/// {
///   "success": false,
///   "error": { "code": "UNAUTHORIZED", "message": "아이디 또는 비밀번호가 올바르지 않습니다." }
/// }
/// ```
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let login_result = service.login(payload.into_inner()).await?;

    Ok(response::ok_with_message(
        login_result,
        "로그인에 성공했습니다.",
    ))
}
