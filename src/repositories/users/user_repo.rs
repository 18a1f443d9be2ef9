//! 회원 리포지토리
//!
//! `users` 컬렉션에 대한 데이터 접근 계층입니다.
//! 아이디/이메일 중복 검사와 회원 생성, 조회를 담당합니다.

use mongodb::Collection;
use mongodb::bson::{DateTime, doc, oid::ObjectId};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::db::Database;
use crate::domain::entities::users::User;

/// 회원 리포지토리
pub struct UserRepository;

static INSTANCE: Lazy<Arc<UserRepository>> = Lazy::new(|| Arc::new(UserRepository));

inventory::submit! {
    ServiceRegistration {
        name: "UserRepository",
        constructor: || { UserRepository::instance(); },
    }
}

impl UserRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<UserRepository> {
        INSTANCE.clone()
    }

    fn collection(&self) -> Collection<User> {
        let database = ServiceLocator::get::<Database>();
        database.get_database().collection::<User>("users")
    }

    /// 아이디로 회원을 조회합니다.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일로 회원을 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ObjectId로 회원을 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 회원을 생성합니다.
    ///
    /// 아이디와 이메일 중복을 먼저 검사하고, 중복 시 409를 반환합니다.
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 아이디입니다.".to_string(),
            ));
        }

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다.".to_string(),
            ));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 마지막 로그인 시간을 갱신합니다.
    pub async fn touch_last_login(&self, id: &ObjectId) -> AppResult<()> {
        self.collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login_at": DateTime::now(), "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
