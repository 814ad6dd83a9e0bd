//! 시크릿 조회/제출 핸들러

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{get, post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::request::SubmitSecretForm;
use crate::domain::models::auth::{CurrentUser, SessionState};
use crate::middlewares::AuthMiddleware;
use crate::views;
use super::{html, parse_form, redirect, validate_form};

/// 로그아웃 후 브라우저 뒤로가기로 페이지가 노출되지 않도록 캐시 금지
fn no_store() -> CacheControl {
    CacheControl(vec![
        CacheDirective::NoCache,
        CacheDirective::Private,
        CacheDirective::NoStore,
        CacheDirective::MustRevalidate,
        CacheDirective::MaxAge(0),
    ])
}

/// 로그인 사용자 전용 시크릿 페이지
///
/// # Endpoint
/// `GET /secrets` (`SECRETS_VISIBILITY=private`)
#[get("/secrets", wrap = "AuthMiddleware::required()")]
pub async fn private_secrets() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(no_store())
        .content_type("text/html; charset=utf-8")
        .body(views::secrets_private())
}

/// 모든 사용자의 시크릿 목록
///
/// # Endpoint
/// `GET /secrets` (`SECRETS_VISIBILITY=public`)
#[get("/secrets")]
pub async fn public_secrets(
    state: web::Data<AppState>,
    session: SessionState,
) -> Result<HttpResponse, AppError> {
    let entries = state.users.list_secrets().await.map_err(|e| {
        e.log("시크릿 목록 조회 실패");
        e
    })?;

    Ok(HttpResponse::Ok()
        .insert_header(no_store())
        .content_type("text/html; charset=utf-8")
        .body(views::secrets_public(&entries, session.is_authenticated())))
}

/// 시크릿 제출 폼
///
/// # Endpoint
/// `GET /submit`
#[get("/submit", wrap = "AuthMiddleware::required()")]
pub async fn submit_page() -> HttpResponse {
    html(views::submit())
}

/// 시크릿 제출
///
/// # Endpoint
/// `POST /submit` (form: `secret`)
#[post("/submit", wrap = "AuthMiddleware::required()")]
pub async fn submit_secret(
    state: web::Data<AppState>,
    current: CurrentUser,
    form: Result<web::Form<SubmitSecretForm>, actix_web::Error>,
) -> HttpResponse {
    let form = parse_form(form).and_then(|form| validate_form(&form).map(|()| form));
    let result = match form {
        Ok(form) => state.users.submit_secret(&current.user_id(), &form.secret).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => redirect("/secrets"),
        Err(AppError::NotAuthenticated) => redirect("/login"),
        Err(e) => {
            e.log("시크릿 제출 실패");
            redirect("/submit")
        }
    }
}
