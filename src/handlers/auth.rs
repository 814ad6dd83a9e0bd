//! 인증 관련 HTTP 핸들러
//!
//! 로컬 회원가입/로그인, Google OAuth, 로그아웃을 처리합니다.
//! 성공하면 세션 쿠키를 발급하고 `/secrets`로, 실패하면 원래 폼으로 리다이렉트합니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::core::state::AppState;
use crate::domain::dto::users::request::{LoginForm, OAuthCallbackQuery, RegisterForm};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::{Credentials, SessionState};
use crate::services::auth::SESSION_COOKIE_NAME;
use super::{parse_form, redirect, validate_form};

/// OAuth CSRF state 쿠키 이름
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";
const OAUTH_STATE_PATH: &str = "/auth/google";

/// 세션을 만들고 쿠키와 함께 `/secrets`로 리다이렉트
async fn start_session(state: &AppState, user: &User) -> AppResult<HttpResponse> {
    let token = state.sessions.establish(user).await?;

    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/secrets"))
        .cookie(state.sessions.session_cookie(token))
        .finish())
}

/// 로컬 회원가입
///
/// # Endpoint
/// `POST /register` (form: `username`, `password`)
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    session: SessionState,
    form: Result<web::Form<RegisterForm>, actix_web::Error>,
) -> HttpResponse {
    if session.is_authenticated() {
        return redirect("/secrets");
    }

    let result = async {
        let form = parse_form(form)?;
        validate_form(&form)?;
        let user = state.credentials.register(&form.username, &form.password).await?;
        start_session(&state, &user).await
    }
    .await;

    result.unwrap_or_else(|e| {
        e.log("회원가입 실패");
        redirect("/register")
    })
}

/// 로컬 로그인
///
/// # Endpoint
/// `POST /login` (form: `username`, `password`)
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    session: SessionState,
    form: Result<web::Form<LoginForm>, actix_web::Error>,
) -> HttpResponse {
    if session.is_authenticated() {
        return redirect("/secrets");
    }

    let result = async {
        let form = parse_form(form)?;
        validate_form(&form)?;
        let LoginForm { username, password } = form;
        let user = state
            .credentials
            .authenticate(Credentials::Local { username, password })
            .await?;
        start_session(&state, &user).await
    }
    .await;

    result.unwrap_or_else(|e| {
        e.log("로그인 실패");
        redirect("/login")
    })
}

/// Google OAuth 시작
///
/// CSRF 방지용 state를 쿠키에 저장하고 Google 동의 화면으로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /auth/google`
#[get("/auth/google")]
pub async fn google_login(state: web::Data<AppState>) -> HttpResponse {
    let (Some(provider), Some(google)) =
        (state.credentials.google_provider(), state.config.google.as_ref())
    else {
        log::warn!("Google OAuth가 설정되지 않았습니다");
        return redirect("/login");
    };

    let oauth_state = Uuid::new_v4().to_string();
    let location = provider.authorization_url(&oauth_state);

    let cookie = Cookie::build(OAUTH_STATE_COOKIE, oauth_state)
        .path(OAUTH_STATE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.cookie_secure)
        .max_age(Duration::minutes(google.state_timeout_minutes))
        .finish();

    log::info!("Google OAuth 리다이렉트");
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// Google OAuth 콜백
///
/// state 검증 → code 교환 → find-or-create → 세션 생성.
/// 어떤 단계에서 실패하든 `/login`으로 리다이렉트하며, state 쿠키는 항상 제거됩니다.
///
/// # Endpoint
/// `GET /auth/google/secrets?code={code}&state={state}`
#[get("/auth/google/secrets")]
pub async fn google_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> HttpResponse {
    let expected_state = req.cookie(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());

    let result = async {
        // 에러 체크 (사용자가 거부했거나 에러 발생)
        if let Some(error) = &query.error {
            let description = query.error_description.as_deref().unwrap_or("no description");
            return Err(AppError::ExternalServiceError(format!(
                "Google OAuth 에러: {} - {}", error, description
            )));
        }

        match (query.state.as_deref(), expected_state.as_deref()) {
            (Some(received), Some(expected)) if received == expected => {}
            _ => return Err(AppError::InvalidCredentials),
        }

        let code = query
            .code
            .clone()
            .ok_or_else(|| AppError::ValidationError("missing code".to_string()))?;

        let user = state.credentials.authenticate(Credentials::Google { code }).await?;
        start_session(&state, &user).await
    }
    .await;

    let mut response = result.unwrap_or_else(|e| {
        e.log("Google OAuth 콜백 실패");
        redirect("/login")
    });

    let mut removal = Cookie::build(OAUTH_STATE_COOKIE, "")
        .path(OAUTH_STATE_PATH)
        .finish();
    removal.make_removal();
    if let Err(e) = response.add_cookie(&removal) {
        log::error!("state 쿠키 제거 실패: {}", e);
    }

    response
}

/// 로그아웃
///
/// 세션 레코드를 삭제하고 쿠키를 만료시킨 뒤 `/`로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        if let Err(e) = state.sessions.destroy(cookie.value()).await {
            e.log("세션 삭제 실패");
        }
    }

    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(state.sessions.removal_cookie())
        .finish()
}
