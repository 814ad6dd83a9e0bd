//! 세션 모델
//!
//! 클라이언트가 보관하는 서명된 세션 토큰의 클레임과,
//! 서버 측 세션 저장소에 보관되는 세션 레코드를 정의합니다.
//! 토큰 서명이 유효하더라도 레코드가 없으면 세션은 무효입니다.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::AuthProvider;

/// 세션 토큰(JWT) 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 사용자 ID
    pub sub: String,
    /// 세션 ID
    pub sid: String,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 발급 시간 (unix seconds)
    pub iat: i64,
    /// 만료 시간 (unix seconds)
    pub exp: i64,
}

/// 서버 측 세션 레코드
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub session_id: String,
    pub user_id: String,
    pub auth_provider: AuthProvider,
    pub created_at: i64,
    pub expires_at: i64,
}

impl SessionRecord {
    /// 새 세션 ID를 발급하여 레코드를 생성합니다.
    pub fn issue(user_id: String, auth_provider: AuthProvider, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            auth_provider,
            created_at: now,
            expires_at: now + ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    /// 남은 유효 시간 (초)
    pub fn remaining_seconds(&self) -> i64 {
        (self.expires_at - Utc::now().timestamp()).max(0)
    }

    /// 레코드에 대응하는 토큰 클레임
    pub fn claims(&self) -> SessionClaims {
        SessionClaims {
            sub: self.user_id.clone(),
            sid: self.session_id.clone(),
            auth_provider: self.auth_provider,
            iat: self.created_at,
            exp: self.expires_at,
        }
    }
}
