//! 회원 서비스
//!
//! 회원가입과 로그인 비즈니스 로직을 담당합니다.
//! 비밀번호는 bcrypt(환경별 cost)로 해싱하며, 로그인 성공 시
//! JWT 액세스 토큰을 발급합니다.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistration;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::domain::dto::users::response::{LoginResponse, UserResponse};
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;
use crate::utils::string_utils::clean_optional_string;

/// 회원 서비스
pub struct UserService;

static INSTANCE: Lazy<Arc<UserService>> = Lazy::new(|| Arc::new(UserService));

inventory::submit! {
    ServiceRegistration {
        name: "UserService",
        constructor: || { UserService::instance(); },
    }
}

impl UserService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<UserService> {
        INSTANCE.clone()
    }

    /// 회원가입
    ///
    /// 중복 아이디/이메일은 리포지토리에서 409로 거부됩니다.
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let password_hash = bcrypt::hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let mut user = User::new(
            request.username,
            request.email,
            request.name,
            password_hash,
            request.user_type.unwrap_or_default(),
        );
        user.nickname = clean_optional_string(request.nickname);
        user.business_stage = request.business_stage;
        user.phone = clean_optional_string(request.phone);
        user.interested_business_types = request.interested_business_types;
        user.preferred_areas = request.preferred_areas;
        user.profile_image = clean_optional_string(request.profile_image);

        let created = UserRepository::instance().create(user).await?;

        log::info!("👤 신규 회원 가입: {}", created.username);
        Ok(UserResponse::from(created))
    }

    /// 로그인
    ///
    /// 아이디 존재 여부와 비밀번호 불일치를 구분하지 않고
    /// 동일한 401 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let repo = UserRepository::instance();

        let user = repo
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError(
                    "아이디 또는 비밀번호가 올바르지 않습니다.".to_string(),
                )
            })?;

        let password_matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            return Err(AppError::AuthenticationError(
                "아이디 또는 비밀번호가 올바르지 않습니다.".to_string(),
            ));
        }

        if !user.is_active {
            return Err(AppError::AuthorizationError(
                "비활성화된 계정입니다.".to_string(),
            ));
        }

        if let Some(id) = &user.id {
            repo.touch_last_login(id).await?;
        }

        let token_service = TokenService::instance();
        let user_type = serde_json::to_value(user.user_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "ENTREPRENEUR".to_string());

        let access_token = token_service
            .generate_token(&user.id_string().unwrap_or_default(), &user_type)?;

        log::info!("🔑 로그인 성공: {}", user.username);
        Ok(LoginResponse::new(
            user,
            access_token,
            token_service.expires_in_seconds(),
        ))
    }
}
