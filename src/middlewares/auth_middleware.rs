//! 세션 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 세션 쿠키를 검증하고 사용자 정보를 복원합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 세션 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::{header, StatusCode}, test, web, App, HttpResponse};
    use crate::config::AppConfig;
    use crate::core::state::AppState;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::{CurrentUser, SessionState};
    use crate::repositories::sessions::MemorySessionStore;
    use crate::repositories::users::{MemoryUserStore, UserStore};
    use crate::services::auth::SESSION_COOKIE_NAME;
    use super::*;

    fn test_state(users: Arc<MemoryUserStore>) -> web::Data<AppState> {
        let config = AppConfig::from_lookup(&|key| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "SESSION_BACKEND" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap();
        web::Data::new(
            AppState::with_stores(config, users, Arc::new(MemorySessionStore::new()), None).unwrap(),
        )
    }

    async fn whoami(state: SessionState) -> HttpResponse {
        match state.current_user() {
            Some(current) => HttpResponse::Ok().body(current.user.label().to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    async fn protected(current: CurrentUser) -> HttpResponse {
        HttpResponse::Ok().body(current.user_id())
    }

    #[actix_web::test]
    async fn test_optional_mode_without_cookie_is_anonymous() {
        let state = test_state(Arc::new(MemoryUserStore::new()));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(AuthMiddleware::optional())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_required_mode_redirects_to_login() {
        let state = test_state(Arc::new(MemoryUserStore::new()));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(AuthMiddleware::optional())
                .service(
                    web::resource("/protected")
                        .wrap(AuthMiddleware::required())
                        .route(web::get().to(protected)),
                ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_valid_session_cookie_is_restored() {
        let users = Arc::new(MemoryUserStore::new());
        let alice = users
            .create(User::new_local("alice".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let state = test_state(users);
        let token = state.sessions.establish(&alice).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(AuthMiddleware::optional())
                .route("/whoami", web::get().to(whoami))
                .service(
                    web::resource("/protected")
                        .wrap(AuthMiddleware::required())
                        .route(web::get().to(protected)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE_NAME, token.clone()))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "alice");

        let req = test::TestRequest::get()
            .uri("/protected")
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE_NAME, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
