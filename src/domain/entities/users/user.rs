//! User Entity Implementation
//!
//! 소담 회원 엔티티입니다. 아이디/비밀번호 기반 로컬 인증을 사용하며
//! 소상공인 프로필(사용자 유형, 사업 단계, 관심 업종 등)을 함께 보관합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// 창업자 / 소상공인
    Entrepreneur,
    /// 투자자
    Investor,
    /// 컨설턴트 / 자문가
    Advisor,
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Entrepreneur
    }
}

/// 사업 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStage {
    Planning,
    Startup,
    Growth,
    Mature,
}

/// 회원 엔티티
///
/// `users` 컬렉션에 영속화되는 유일한 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 아이디 (unique)
    pub username: String,
    /// 이메일 주소 (unique)
    pub email: String,
    /// 실명
    pub name: String,
    /// 닉네임
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 유형
    pub user_type: UserType,
    /// 사업 단계
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_stage: Option<BusinessStage>,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 관심 업종 목록
    #[serde(default)]
    pub interested_business_types: Vec<String>,
    /// 선호 지역 목록
    #[serde(default)]
    pub preferred_areas: Vec<String>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 회원 생성
    pub fn new(
        username: String,
        email: String,
        name: String,
        password_hash: String,
        user_type: UserType,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            name,
            nickname: None,
            password_hash,
            user_type,
            business_stage: None,
            phone: None,
            interested_business_types: Vec::new(),
            preferred_areas: Vec::new(),
            profile_image: None,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId를 16진수 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "daejeon_user".to_string(),
            "user@daejeon.kr".to_string(),
            "홍길동".to_string(),
            "$2b$04$hash".to_string(),
            UserType::Entrepreneur,
        );

        assert!(user.is_active);
        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert!(user.interested_business_types.is_empty());
    }

    #[test]
    fn test_user_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&UserType::Entrepreneur).unwrap();
        assert_eq!(json, "\"ENTREPRENEUR\"");
    }
}
