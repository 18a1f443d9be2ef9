//! SODAM 상권 진단 백엔드
//!
//! 소상공인을 위한 상권 진단 REST API 서비스입니다.
//! 5대 핵심 지표 진단, 리스크 유형 분류, 맞춤형 전략 카드,
//! 지원 도구, 지도 시각화를 제공합니다.
//!
//! # Features
//!
//! - **핵심 진단**: 유동인구·카드매출·동일업종·창업폐업률·체류시간 5대 지표
//! - **리스크 분류**: 4가지 리스크 유형 판별 및 완화 전략
//! - **전략 카드**: 리스크 유형·사용자 프로필 기반 실행 전략 생성
//! - **지원 도구**: 지원센터·전문가·정책 추천 디렉터리
//! - **지도 시각화**: 히트맵·반경 분석·접근성 분석
//! - **JWT 인증**: 회원가입 / 로그인 및 토큰 발급
//! - **싱글톤 DI**: 서비스 레지스트리 기반 의존성 주입
//! - **MongoDB**: 회원 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 진단/분류/전략 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소 (회원)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use sodam_backend::services::diagnosis::CoreDiagnosisService;
//! use sodam_backend::services::risk::RiskClassificationService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let diagnosis = CoreDiagnosisService::instance();
//! let risk = RiskClassificationService::instance();
//!
//! // 상권 건강 점수 계산 및 리스크 분류
//! let health = diagnosis.health_score("10000", Some("식음료업"))?;
//! let classification = risk.classify("10000", Some("식음료업"))?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
