//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::state::AppState;
use crate::domain::models::auth::{AuthMode, SessionState};
use crate::services::auth::SESSION_COOKIE_NAME;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            // 바깥 미들웨어가 이미 복원했다면 재사용
            let existing = req.extensions().get::<SessionState>().cloned();
            let state = match existing {
                Some(state) => state,
                None => {
                    let state = resolve_session(&req).await;
                    req.extensions_mut().insert(state.clone());
                    state
                }
            };

            match (&mode, &state) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, SessionState::Anonymous) => {
                    log::debug!("인증 필요: {} → /login", req.path());
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, "/login"))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                (_, SessionState::Authenticated(current)) => {
                    log::debug!("세션 인증: 사용자 ID {}", current.user_id());
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, SessionState::Anonymous) => {},
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 세션 쿠키를 세션 상태로 복원
async fn resolve_session(req: &ServiceRequest) -> SessionState {
    let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) else {
        return SessionState::Anonymous;
    };

    let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
        log::error!("AppState가 등록되지 않아 세션을 복원할 수 없습니다");
        return SessionState::Anonymous;
    };

    app_state.sessions.resolve(cookie.value()).await
}
