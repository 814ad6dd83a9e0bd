//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 모든 응답은 HTML 페이지 또는 `302 Found` 리다이렉트입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML form, cookie)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 라우트 경계 에러 변환     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 자격 증명, 세션, 시크릿             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore, SessionStore       ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 서비스 에러를 서버 로그에 남긴 뒤 라우트별 실패 페이지로 리다이렉트합니다.
//! 응답에는 실패 원인이 포함되지 않습니다.
//!
//! ## 모듈 구성
//!
//! - **`pages`**: 정적 페이지 (`/`, `/login`, `/register`)
//! - **`auth`**: 회원가입, 로그인, Google OAuth, 로그아웃
//! - **`secrets`**: 시크릿 조회와 제출

pub mod pages;
pub mod auth;
pub mod secrets;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};

/// `302 Found` 리다이렉트 응답
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// HTML 페이지 응답
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 폼 역직렬화 실패(필드 누락, 빈 본문)를 `ValidationError`로 변환합니다.
///
/// 핸들러가 `Result<web::Form<T>, _>`를 받아 기본 400 응답 대신 실패 리다이렉트를 보낼 수 있게 합니다.
pub(crate) fn parse_form<T>(form: Result<web::Form<T>, actix_web::Error>) -> AppResult<T> {
    form.map(web::Form::into_inner)
        .map_err(|e| AppError::ValidationError(format!("form rejected: {}", e)))
}

/// 폼 검증 실패를 `ValidationError`로 변환합니다.
pub(crate) fn validate_form<T: Validate>(form: &T) -> AppResult<()> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}
