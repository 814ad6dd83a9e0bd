//! Google OAuth 응답 DTO 모듈
//!
//! Authorization Code를 Access Token으로 교환할 때 Google이 반환하는 데이터입니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    /// 부여된 권한 범위
    pub scope: Option<String>,
    /// OpenID Connect ID 토큰
    pub id_token: Option<String>,
}
