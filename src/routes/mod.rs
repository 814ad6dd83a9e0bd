//! 라우트 설정 모듈
//!
//! 페이지, 인증, 시크릿 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Route Table
//!
//! | Method | Path | 인증 | 설명 |
//! |--------|------|------|------|
//! | GET | `/` | - | 랜딩 페이지 |
//! | GET | `/login` | - | 로그인 폼 |
//! | GET | `/register` | - | 회원가입 폼 |
//! | POST | `/register` | - | 로컬 회원가입 |
//! | POST | `/login` | - | 로컬 로그인 |
//! | GET | `/auth/google` | - | Google OAuth 시작 |
//! | GET | `/auth/google/secrets` | - | Google OAuth 콜백 |
//! | GET | `/secrets` | private: 필수 | 시크릿 페이지 |
//! | GET | `/submit` | 필수 | 시크릿 제출 폼 |
//! | POST | `/submit` | 필수 | 시크릿 제출 |
//! | GET | `/logout` | - | 로그아웃 |
//! | GET | `/health` | - | 헬스체크 |
//!
//! # Auth Middleware Usage
//!
//! 앱 전체에 `AuthMiddleware::optional()`을 걸어 세션을 복원하고,
//! 보호된 라우트는 핸들러 단위로 `AuthMiddleware::required()`를 겁니다:
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(state.clone())
//!     .wrap(AuthMiddleware::optional())
//!     .configure(|cfg| configure_all_routes(cfg, SecretsVisibility::Private));
//! ```

use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App, HttpResponse};
use crate::config::{RateLimitConfig, SecretsVisibility, SessionBackend};
use crate::core::errors::{AppError, AppResult};
use crate::core::state::AppState;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use chrono;
use serde_json::json;

/// IP별 Rate Limiting 설정 (응답에 `x-ratelimit-*` 헤더 포함)
pub type RateLimiter = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate Limiting 설정을 생성합니다.
///
/// 초당 요청 수나 버스트 크기가 0이면 `ConfigurationError`를 반환합니다.
pub fn rate_limiter(config: &RateLimitConfig) -> AppResult<RateLimiter> {
    let invalid = || {
        AppError::ConfigurationError(
            "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다".to_string(),
        )
    };
    // requests_per_second(0)은 0으로 나누기 때문에 먼저 거부
    if config.per_second == 0 {
        return Err(invalid());
    }

    GovernorConfigBuilder::default()
        .requests_per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(invalid)
}

/// 미들웨어와 라우트를 모두 갖춘 애플리케이션을 조립합니다
///
/// 미들웨어는 등록 역순으로 요청을 처리합니다:
/// `Logger` → `NormalizePath` → 세션 복원 → Rate Limiting → 라우트.
/// Governor는 내부 서비스의 future가 `Unpin`이어야 하므로 라우팅 바로 바깥에 둡니다.
pub fn build_app(
    state: web::Data<AppState>,
    rate_limiter: RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let visibility = state.config.secrets_visibility;

    App::new()
        .app_data(state)
        // Rate Limiting 미들웨어 (가장 먼저 적용)
        .wrap(Governor::new(&rate_limiter))
        .wrap(AuthMiddleware::optional())
        .wrap(middleware::NormalizePath::trim())
        .wrap(middleware::Logger::default())

        // 라우트 설정
        .configure(move |cfg| configure_all_routes(cfg, visibility))
}

/// 모든 라우트를 설정합니다
///
/// `/secrets`는 공개 범위 설정에 따라 다른 핸들러가 등록됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, visibility: SecretsVisibility) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg, visibility);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
///
/// # Examples
///
/// ```bash
/// curl -i -X POST http://localhost:3000/register \
///   -d 'username=alice&password=pw1'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        // Google OAuth
        .service(handlers::auth::google_login)
        .service(handlers::auth::google_callback)
        .service(handlers::auth::logout);
}

fn configure_secret_routes(cfg: &mut web::ServiceConfig, visibility: SecretsVisibility) {
    match visibility {
        SecretsVisibility::Private => cfg.service(handlers::secrets::private_secrets),
        SecretsVisibility::Public => cfg.service(handlers::secrets::public_secrets),
    };

    cfg.service(handlers::secrets::submit_page)
        .service(handlers::secrets::submit_secret);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// `features`는 현재 설정에서 실제로 사용 중인 구성요소를 보여줍니다.
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "secrets_auth_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "sessions": "Redis",
///     "oauth": "Google",
///     "secrets_visibility": "private"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config;
    let sessions = match config.session.backend {
        SessionBackend::Redis { .. } => "Redis",
        SessionBackend::Memory => "Memory",
    };
    let oauth = if config.google.is_some() { "Google" } else { "disabled" };
    let visibility = match config.secrets_visibility {
        SecretsVisibility::Private => "private",
        SecretsVisibility::Public => "public",
    };

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": sessions,
            "oauth": oauth,
            "secrets_visibility": visibility
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use crate::config::AppConfig;
    use crate::core::state::AppState;
    use crate::handlers::auth::OAUTH_STATE_COOKIE;
    use crate::middlewares::AuthMiddleware;
    use crate::repositories::sessions::MemorySessionStore;
    use crate::repositories::users::{MemoryUserStore, UserStore};
    use crate::services::auth::credential_service::tests::StubGoogleProvider;
    use crate::services::auth::{GoogleIdentityProvider, SESSION_COOKIE_NAME};
    use super::*;

    fn test_state(
        users: Arc<MemoryUserStore>,
        visibility: &'static str,
        google: bool,
    ) -> web::Data<AppState> {
        let config = AppConfig::from_lookup(&move |key| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "SESSION_BACKEND" => Some("memory".to_string()),
            "SECRETS_VISIBILITY" => Some(visibility.to_string()),
            "GOOGLE_CLIENT_ID" if google => Some("client".to_string()),
            "GOOGLE_CLIENT_SECRET" if google => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();
        let provider: Option<Arc<dyn GoogleIdentityProvider>> = if google {
            Some(Arc::new(StubGoogleProvider))
        } else {
            None
        };

        web::Data::new(
            AppState::with_stores(config, users, Arc::new(MemorySessionStore::new()), provider)
                .unwrap(),
        )
    }

    macro_rules! app {
        ($state:expr) => {{
            let state = $state;
            let visibility = state.config.secrets_visibility;
            test::init_service(
                App::new()
                    .app_data(state)
                    .wrap(AuthMiddleware::optional())
                    .configure(move |cfg| configure_all_routes(cfg, visibility)),
            )
            .await
        }};
    }

    /// `main`과 같은 미들웨어 스택 (Governor, NormalizePath, Logger 포함)
    macro_rules! full_app {
        ($state:expr) => {{
            let state = $state;
            let limiter = rate_limiter(&state.config.rate_limit).unwrap();
            test::init_service(build_app(state, limiter)).await
        }};
    }

    /// Governor는 피어 IP로 요청을 구분하므로 전체 스택 요청에는 주소가 필요함
    fn from_peer(req: test::TestRequest) -> test::TestRequest {
        req.peer_addr("127.0.0.1:40000".parse().unwrap())
    }

    fn location<B>(resp: &ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn cookie_value<B>(resp: &ServiceResponse<B>, name: &str) -> Option<String> {
        resp.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string())
    }

    macro_rules! post_form {
        ($app:expr, $uri:expr, $form:expr) => {{
            let req = test::TestRequest::post().uri($uri).set_form($form).to_request();
            test::call_service($app, req).await
        }};
    }

    #[actix_web::test]
    async fn test_health_check_reports_configured_backends() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "public", false));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "secrets_auth_service");
        assert_eq!(body["features"]["sessions"], "Memory");
        assert_eq!(body["features"]["oauth"], "disabled");
        assert_eq!(body["features"]["secrets_visibility"], "public");

        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", true));
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["features"]["oauth"], "Google");
    }

    #[::core::prelude::v1::test]
    fn test_rate_limiter_rejects_zero_quota() {
        let config = RateLimitConfig { per_second: 0, burst_size: 10 };
        assert!(matches!(rate_limiter(&config), Err(AppError::ConfigurationError(_))));

        let config = RateLimitConfig { per_second: 10, burst_size: 0 };
        assert!(matches!(rate_limiter(&config), Err(AppError::ConfigurationError(_))));

        let config = RateLimitConfig { per_second: 100, burst_size: 200 };
        assert!(rate_limiter(&config).is_ok());
    }

    #[actix_web::test]
    async fn test_full_stack_trailing_slash_is_normalized_before_guard() {
        let app = full_app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        let req = from_peer(test::TestRequest::get().uri("/secrets/")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");

        let req = from_peer(test::TestRequest::post().uri("/register/"))
            .set_form([("username", "alice"), ("password", "pw1")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/secrets");
        assert!(resp.headers().contains_key("x-ratelimit-limit"));
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = from_peer(test::TestRequest::get().uri("/secrets/"))
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::CACHE_CONTROL).is_some());
    }

    #[actix_web::test]
    async fn test_full_stack_health_check() {
        let app = full_app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        let req = from_peer(test::TestRequest::get().uri("/health/")).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_malformed_forms_redirect_back() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", false));

        let resp = post_form!(&app, "/login", &[("username", "alice")]);
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/login");

        let resp = post_form!(&app, "/register", &[("username", "alice")]);
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/register");

        for uri in ["/login", "/register"] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(location(&resp), uri);
        }

        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_submit_redirects_back() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = test::TestRequest::post()
            .uri("/submit")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(location(&resp), "/submit");
    }

    #[actix_web::test]
    async fn test_register_login_and_view_secrets() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", false));

        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/secrets");
        assert!(cookie_value(&resp, SESSION_COOKIE_NAME).is_some());

        let resp = post_form!(&app, "/login", &[("username", "alice"), ("password", "pw1")]);
        assert_eq!(location(&resp), "/secrets");
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = test::TestRequest::get()
            .uri("/secrets")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::CACHE_CONTROL).is_some());

        let stored = users.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password_hash.as_deref(), Some("pw1"));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_redirects_back() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", false));

        post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw2")]);

        assert_eq!(location(&resp), "/register");
        assert!(cookie_value(&resp, SESSION_COOKIE_NAME).is_none());
        assert_eq!(users.len(), 1);
    }

    #[actix_web::test]
    async fn test_failed_login_redirects_to_login() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));
        post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);

        for (username, password) in [("alice", "wrong"), ("nobody", "pw1"), ("", "pw1")] {
            let resp =
                post_form!(&app, "/login", &[("username", username), ("password", password)]);
            assert_eq!(location(&resp), "/login");
            assert!(cookie_value(&resp, SESSION_COOKIE_NAME).is_none());
        }
    }

    #[actix_web::test]
    async fn test_anonymous_access_to_protected_routes() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        for uri in ["/secrets", "/submit"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/login");
        }

        let resp = post_form!(&app, "/submit", &[("secret", "psst")]);
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_logout_invalidates_session() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/");
        assert_eq!(cookie_value(&resp, SESSION_COOKIE_NAME).as_deref(), Some(""));

        // 이전 토큰을 재사용해도 익명으로 취급됨
        let req = test::TestRequest::get()
            .uri("/secrets")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_authenticated_caller_skips_register() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", false));

        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = test::TestRequest::post()
            .uri("/register")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .set_form([("username", "bob"), ("password", "pw2")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(location(&resp), "/secrets");
        assert_eq!(users.len(), 1);
    }

    #[actix_web::test]
    async fn test_submit_and_public_listing() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "public", false));

        let resp = post_form!(&app, "/register", &[("username", "alice"), ("password", "pw1")]);
        let token = cookie_value(&resp, SESSION_COOKIE_NAME).unwrap();

        let req = test::TestRequest::post()
            .uri("/submit")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token.clone()))
            .set_form([("secret", "<b>I like tea</b>")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/secrets");

        let req = test::TestRequest::post()
            .uri("/submit")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, token))
            .set_form([("secret", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/submit");

        // 익명 사용자도 공개 목록을 볼 수 있음
        let req = test::TestRequest::get().uri("/secrets").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("&lt;b&gt;I like tea&lt;/b&gt;"));
        assert!(!body.contains("<b>I like tea</b>"));
    }

    #[actix_web::test]
    async fn test_google_disabled_redirects_to_login() {
        let app = app!(test_state(Arc::new(MemoryUserStore::new()), "private", false));

        let req = test::TestRequest::get().uri("/auth/google").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_google_flow_creates_user_once() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", true));

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/auth/google").to_request();
            let resp = test::call_service(&app, req).await;
            assert!(location(&resp).starts_with("https://accounts.example.com/auth"));
            let state = cookie_value(&resp, OAUTH_STATE_COOKIE).unwrap();

            let req = test::TestRequest::get()
                .uri(&format!("/auth/google/secrets?code=good-42&state={}", state))
                .cookie(Cookie::new(OAUTH_STATE_COOKIE, state))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(location(&resp), "/secrets");
            assert!(cookie_value(&resp, SESSION_COOKIE_NAME).is_some());
        }

        assert_eq!(users.len(), 1);
        assert!(users.find_by_google_id("google-42").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_google_callback_failures_redirect_to_login() {
        let users = Arc::new(MemoryUserStore::new());
        let app = app!(test_state(users.clone(), "private", true));

        let cases = [
            "/auth/google/secrets?code=good-1&state=forged",
            "/auth/google/secrets?state=expected",
            "/auth/google/secrets?error=access_denied&state=expected",
            "/auth/google/secrets?code=bad-1&state=expected",
        ];
        for uri in cases {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(Cookie::new(OAUTH_STATE_COOKIE, "expected"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(location(&resp), "/login", "{}", uri);
            assert!(cookie_value(&resp, SESSION_COOKIE_NAME).is_none());
        }

        assert!(users.is_empty());
    }
}
