//! Google 사용자 프로필 모델
//!
//! Google userinfo 엔드포인트(v2) 응답을 역직렬화한 뒤,
//! 도메인에서 사용하는 [`GoogleProfile`]로 변환합니다.

use serde::{Deserialize, Serialize};

/// Google userinfo 응답
///
/// 요청 scope에 따라 `email`, `name` 등은 누락될 수 있으므로 `id`만 필수입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub picture: Option<String>,
    pub verified_email: Option<bool>,
}

/// find-or-create에 사용되는 Google 프로필
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleProfile {
    /// Google 계정 고유 ID (`sub`)
    pub google_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for GoogleProfile {
    fn from(info: GoogleUserInfo) -> Self {
        // 검증되지 않은 이메일은 프로필에 저장하지 않음
        let email = match info.verified_email {
            Some(false) => None,
            _ => info.email,
        };

        Self {
            google_id: info.id,
            name: info.name.or(info.given_name),
            email,
            picture: info.picture,
        }
    }
}
