//! # Configuration Module
//!
//! 서비스의 모든 설정을 하나의 [`AppConfig`] 구조체로 모아 시작 시점에 한 번만 로드합니다.
//! 로드된 설정은 `AppState`를 통해 각 서비스에 명시적으로 주입되며,
//! 모듈 전역 상수나 런타임 환경 변수 조회에 의존하지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 비밀번호, Rate Limiting 설정
//! - [`auth_config`] - 세션, Google OAuth, 시크릿 공개 범위 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use secrets_auth_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! 테스트에서는 환경 변수를 건드리지 않도록 `from_lookup`에 클로저를 전달합니다:
//!
//! ```rust,ignore
//! let config = AppConfig::from_lookup(&|key| match key {
//!     "ENVIRONMENT" => Some("test".to_string()),
//!     "SESSION_BACKEND" => Some("memory".to_string()),
//!     _ => None,
//! })?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;
use crate::core::errors::{AppError, AppResult};

/// 설정 키로 값을 조회하는 함수 타입
pub type EnvLookup = dyn Fn(&str) -> Option<String>;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub password: PasswordConfig,
    pub session: SessionConfig,
    /// `None`이면 Google OAuth 라우트는 `/login`으로 리다이렉트합니다.
    pub google: Option<GoogleOAuthConfig>,
    pub secrets_visibility: SecretsVisibility,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 설정을 로드합니다.
    pub fn from_lookup(lookup: &EnvLookup) -> AppResult<Self> {
        let environment = Environment::from_lookup(lookup);

        let secrets_visibility = match lookup("SECRETS_VISIBILITY") {
            Some(value) => SecretsVisibility::from_str(&value).map_err(AppError::ConfigurationError)?,
            None => SecretsVisibility::Private,
        };

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            password: PasswordConfig::from_lookup(lookup, environment),
            session: SessionConfig::from_lookup(lookup, environment)?,
            google: GoogleOAuthConfig::from_lookup(lookup),
            secrets_visibility,
            rate_limit: RateLimitConfig::from_lookup(lookup),
        })
    }
}

/// 값을 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn parse_or<T>(lookup: &EnvLookup, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_from_lookup() {
        let config = AppConfig::from_lookup(&|key| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "SESSION_BACKEND" => Some("memory".to_string()),
            "SECRETS_VISIBILITY" => Some("public".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.password.bcrypt_cost, 4);
        assert_eq!(config.secrets_visibility, SecretsVisibility::Public);
        assert_eq!(config.database.database_name, "userDB");
        assert!(config.google.is_none());
    }

    #[test]
    fn test_invalid_visibility_is_configuration_error() {
        let result = AppConfig::from_lookup(&|key| match key {
            "ENVIRONMENT" => Some("dev".to_string()),
            "SECRETS_VISIBILITY" => Some("everyone".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
