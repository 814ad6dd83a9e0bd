//! # Authentication Configuration
//!
//! 세션, Google OAuth, 시크릿 공개 범위 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 세션
//! export SESSION_SECRET="your-super-secret-key"   # 운영 환경 필수
//! export SESSION_TTL_HOURS="24"
//! export SESSION_BACKEND="redis"                  # redis | memory
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Google OAuth (둘 다 설정되어야 활성화)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/secrets"
//!
//! # /secrets 공개 범위
//! export SECRETS_VISIBILITY="private"             # private | public
//! ```

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use super::{parse_or, EnvLookup, Environment};

const DEV_SESSION_SECRET: &str = "dev-session-secret-change-me";

/// 세션 유효 시간 상한 (1년)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// 사용자를 최초로 등록시킨 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthProvider {
    Local,
    Google,
}

/// 세션 레코드 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    /// Redis (운영 환경 기본값)
    Redis { url: String },
    /// 프로세스 메모리 (단일 인스턴스 개발용)
    Memory,
}

/// 세션 설정
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 세션 토큰 서명 키 (HS256)
    pub secret: String,
    /// 세션 유효 시간 (시간)
    pub ttl_hours: i64,
    /// 세션 쿠키에 `Secure` 속성을 붙일지 여부
    pub cookie_secure: bool,
    pub backend: SessionBackend,
}

impl SessionConfig {
    /// 운영 환경에서 `SESSION_SECRET`이 없으면 에러를 반환합니다.
    /// 그 외 환경에서는 경고 후 개발용 기본값을 사용합니다.
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> AppResult<Self> {
        let secret = match lookup("SESSION_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if env.is_production() => {
                return Err(AppError::ConfigurationError(
                    "SESSION_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
                DEV_SESSION_SECRET.to_string()
            }
        };

        let ttl_hours = parse_or(lookup, "SESSION_TTL_HOURS", 24i64).clamp(1, MAX_SESSION_TTL_HOURS);
        let cookie_secure = parse_or(lookup, "SESSION_COOKIE_SECURE", env.is_production());

        let backend = match lookup("SESSION_BACKEND")
            .unwrap_or_else(|| "redis".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => SessionBackend::Memory,
            "redis" => SessionBackend::Redis {
                url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            },
            other => {
                return Err(AppError::ConfigurationError(format!(
                    "Unsupported SESSION_BACKEND: {}",
                    other
                )));
            }
        };

        Ok(Self {
            secret,
            ttl_hours,
            cookie_secure,
            backend,
        })
    }

    /// 세션 유효 시간 (초). 필드를 직접 설정한 경우에도 상한을 적용합니다.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS) * 3600
    }
}

/// Google OAuth 2.0 설정
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// 콜백 URL (Google Console에 등록된 값과 일치해야 함)
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    /// OAuth state 쿠키 유효 시간 (분)
    pub state_timeout_minutes: i64,
}

impl GoogleOAuthConfig {
    /// `GOOGLE_CLIENT_ID`와 `GOOGLE_CLIENT_SECRET`이 모두 있어야 `Some`을 반환합니다.
    pub fn from_lookup(lookup: &EnvLookup) -> Option<Self> {
        let client_id = lookup("GOOGLE_CLIENT_ID").filter(|v| !v.is_empty());
        let client_secret = lookup("GOOGLE_CLIENT_SECRET").filter(|v| !v.is_empty());

        let (client_id, client_secret) = match (client_id, client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                log::warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET not set, Google OAuth disabled");
                return None;
            }
        };

        Some(Self {
            client_id,
            client_secret,
            redirect_uri: lookup("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|| "http://localhost:3000/auth/google/secrets".to_string()),
            auth_uri: lookup("GOOGLE_AUTH_URI")
                .unwrap_or_else(|| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_uri: lookup("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
            state_timeout_minutes: parse_or(lookup, "OAUTH_STATE_TIMEOUT_MINUTES", 10),
        })
    }
}

/// `/secrets` 페이지의 접근 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsVisibility {
    /// 로그인한 사용자에게만 고정 페이지를 보여줌
    Private,
    /// 누구에게나 모든 사용자의 시크릿 목록을 보여줌
    Public,
}

impl SecretsVisibility {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "private" => Ok(SecretsVisibility::Private),
            "public" => Ok(SecretsVisibility::Public),
            _ => Err(format!("Unsupported secrets visibility: {}", s)),
        }
    }
}
