//! # Data & Server Configuration
//!
//! 실행 환경, 서버 바인딩, 데이터베이스, 비밀번호 해싱, Rate Limiting 설정을 관리합니다.
//! 모든 설정은 [`super::AppConfig`] 생성 시점에 한 번만 읽혀 주입됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! export BCRYPT_COST="12"               # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

use super::{parse_or, EnvLookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값으로 실행 환경을 결정합니다. 값이 없으면 Production입니다.
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 환경을 파싱합니다. 알 수 없는 값은 Production으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 유효 범위(4-15)에 있으면 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&env));

        Self { bcrypt_cost }
    }

    /// 환경별 기본 bcrypt cost
    ///
    /// 개발/테스트 환경은 빠른 반복을 위해 최소 cost를 사용합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 3000),
            workers: parse_or(lookup, "WORKERS", 4),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub mongodb_uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self {
            mongodb_uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "userDB".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}
