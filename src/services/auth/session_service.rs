//! 세션 관리 서비스
//!
//! 인증된 사용자를 서명된 세션 토큰(HS256 JWT)으로 직렬화하고,
//! 이후 요청에서 토큰을 다시 전체 사용자 레코드로 복원합니다.
//!
//! 토큰이 유효하려면 다음 조건을 모두 만족해야 합니다.
//!
//! 1. 서명과 만료 시간 검증 통과
//! 2. `sid`에 해당하는 세션 레코드가 저장소에 존재하고 `sub`와 일치
//! 3. `sub`에 해당하는 사용자가 존재
//!
//! 하나라도 실패하면 요청은 `Anonymous`로 처리됩니다.

use std::sync::Arc;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::SessionConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::{CurrentUser, SessionState};
use crate::domain::models::session::{SessionClaims, SessionRecord};
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserStore;

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "secrets_session";

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
    cookie_secure: bool,
}

impl SessionManager {
    pub fn new(
        config: &SessionConfig,
        store: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            store,
            users,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_seconds: config.ttl_seconds(),
            cookie_secure: config.cookie_secure,
        }
    }

    /// 새 세션을 만들고 서명된 토큰을 반환합니다.
    pub async fn establish(&self, user: &User) -> AppResult<String> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let record = SessionRecord::issue(user_id, user.auth_provider, self.ttl_seconds);
        self.store.save(&record).await?;

        let token = encode(&Header::new(Algorithm::HS256), &record.claims(), &self.encoding_key)
            .context("세션 토큰 생성 실패")?;

        log::info!("세션 생성: 사용자 {} (sid: {})", record.user_id, record.session_id);
        Ok(token)
    }

    /// 토큰을 세션 상태로 복원합니다. 실패는 모두 `Anonymous`입니다.
    pub async fn resolve(&self, token: &str) -> SessionState {
        match self.try_resolve(token).await {
            Ok(Some(current)) => SessionState::Authenticated(current),
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                e.log("세션 복원 실패");
                SessionState::Anonymous
            }
        }
    }

    async fn try_resolve(&self, token: &str) -> AppResult<Option<CurrentUser>> {
        let Some(claims) = self.verify_token(token) else {
            return Ok(None);
        };

        let record = match self.store.find(&claims.sid).await? {
            Some(record) if record.user_id == claims.sub => record,
            Some(_) => {
                log::warn!("세션 레코드와 토큰의 사용자가 다릅니다 (sid: {})", claims.sid);
                return Ok(None);
            }
            None => {
                log::debug!("세션 레코드 없음 (sid: {})", claims.sid);
                return Ok(None);
            }
        };

        let Some(user) = self.users.find_by_id(&record.user_id).await? else {
            log::warn!("세션 사용자가 더 이상 존재하지 않습니다: {}", record.user_id);
            return Ok(None);
        };

        Ok(Some(CurrentUser {
            user,
            session_id: record.session_id,
        }))
    }

    /// 세션 레코드를 삭제합니다. 검증되지 않는 토큰은 무시합니다.
    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        let Some(claims) = self.verify_token(token) else {
            return Ok(());
        };

        self.store.delete(&claims.sid).await?;
        log::info!("세션 종료: 사용자 {} (sid: {})", claims.sub, claims.sid);
        Ok(())
    }

    fn verify_token(&self, token: &str) -> Option<SessionClaims> {
        let validation = Validation::new(Algorithm::HS256);

        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(token_data) => Some(token_data.claims),
            Err(e) => {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        log::debug!("세션 토큰 만료");
                    }
                    _ => log::warn!("세션 토큰 검증 실패: {}", e),
                }
                None
            }
        }
    }

    /// 세션 토큰을 담은 쿠키
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.cookie_secure)
            .max_age(Duration::seconds(self.ttl_seconds))
            .finish()
    }

    /// 세션 쿠키를 즉시 만료시키는 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.cookie_secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}
