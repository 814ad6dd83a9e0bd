//! 인증 및 세션 서비스 모듈
//!
//! # Features
//!
//! - bcrypt 기반 로컬 자격 증명 검증
//! - Google OAuth 2.0 Authorization Code 플로우
//! - HS256 서명 세션 토큰과 서버측 세션 레코드
//!
//! # Security
//!
//! - 로그인 실패 원인을 구분하지 않음 (사용자 열거 방지)
//! - 존재하지 않는 사용자도 bcrypt 검증 비용을 지불 (타이밍 공격 방지)
//! - CSRF 방지 (OAuth State 매개변수)
//! - 로그아웃 시 서버측 세션 레코드 삭제

pub mod credential_service;
pub mod google_auth_service;
pub mod session_service;

pub use credential_service::*;
pub use google_auth_service::*;
pub use session_service::*;
