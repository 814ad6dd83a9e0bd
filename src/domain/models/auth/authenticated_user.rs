use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;

/// 세션에서 복원된 사용자 정보
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 저장소에서 로드한 전체 사용자 레코드
    pub user: User,

    /// 현재 세션 ID
    pub session_id: String,
}

impl CurrentUser {
    /// 사용자 ID (hex 문자열)
    pub fn user_id(&self) -> String {
        self.user.id_string().unwrap_or_default()
    }
}

/// 요청 단위 세션 상태
///
/// 세션 미들웨어가 요청마다 한 번 결정하여 Request Extensions에 저장합니다.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(CurrentUser),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Authenticated(current) => Some(current),
            SessionState::Anonymous => None,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어가 세션을 복원하지 못했으면 `NotAuthenticated`로 실패하며,
/// 이는 `/login` 리다이렉트로 변환됩니다.
impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let current = req
            .extensions()
            .get::<SessionState>()
            .and_then(SessionState::current_user)
            .cloned();

        ready(current.ok_or_else(|| AppError::NotAuthenticated.into()))
    }
}

/// 세션 상태 추출자 (미들웨어가 없으면 Anonymous)
impl FromRequest for SessionState {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let state = req.extensions().get::<SessionState>().cloned().unwrap_or_default();
        ready(Ok(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn alice() -> CurrentUser {
        let mut user = User::new_local("alice".to_string(), "hash".to_string());
        user.id = Some(mongodb::bson::oid::ObjectId::new());
        CurrentUser { user, session_id: "sid-1".to_string() }
    }

    #[actix_web::test]
    async fn test_session_state_defaults_to_anonymous() {
        let req = TestRequest::default().to_http_request();
        let state = SessionState::extract(&req).await.unwrap();

        assert!(!state.is_authenticated());
    }

    #[actix_web::test]
    async fn test_current_user_extracted_from_extensions() {
        let req = TestRequest::default().to_http_request();
        let current = alice();
        req.extensions_mut().insert(SessionState::Authenticated(current.clone()));

        let extracted = CurrentUser::extract(&req).await.unwrap();
        assert_eq!(extracted.user_id(), current.user_id());
        assert_eq!(extracted.session_id, "sid-1");
    }

    #[actix_web::test]
    async fn test_current_user_missing_is_error() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(SessionState::Anonymous);

        assert!(CurrentUser::extract(&req).await.is_err());
    }
}
