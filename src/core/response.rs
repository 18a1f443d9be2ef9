//! 성공 응답 봉투 헬퍼
//!
//! 모든 성공 응답은 `{"success": true, "data": ...}` 형식을 따릅니다.
//! 인증 응답처럼 안내 메시지가 필요한 경우 `message`와 `timestamp`가 추가됩니다.

use actix_web::HttpResponse;
use serde::Serialize;

/// `200 OK` + 표준 성공 봉투
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data,
    }))
}

/// `200 OK` + 성공 봉투 + 안내 메시지
pub fn ok_with_message<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// `201 Created` + 성공 봉투 + 안내 메시지
pub fn created_with_message<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "data": data,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_status() {
        let response = ok(serde_json::json!({"market_code": "10000"}));
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[test]
    fn test_created_envelope_status() {
        let response = created_with_message(
            serde_json::json!({"username": "sodam_user"}),
            "회원가입이 완료되었습니다.",
        );
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
    }
}
