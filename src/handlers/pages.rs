//! 정적 페이지 핸들러

use actix_web::{get, web, HttpResponse};
use crate::core::state::AppState;
use crate::views;
use super::html;

/// 랜딩 페이지
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn home() -> HttpResponse {
    html(views::home())
}

/// 로그인 폼
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login_page(state: web::Data<AppState>) -> HttpResponse {
    html(views::login(state.credentials.google_provider().is_some()))
}

/// 회원가입 폼
///
/// # Endpoint
/// `GET /register`
#[get("/register")]
pub async fn register_page(state: web::Data<AppState>) -> HttpResponse {
    html(views::register(state.credentials.google_provider().is_some()))
}
