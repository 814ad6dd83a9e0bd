//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(사용자명/비밀번호)과 Google OAuth 인증을 모두 지원하며,
//! 사용자가 제출한 시크릿 목록을 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::google_user::GoogleProfile;

/// 사용자 엔티티
///
/// 시스템의 유일한 영속 엔티티입니다. 사용자는 `username`(로컬) 또는
/// `google_id`(OAuth) 중 정확히 하나로 식별되며, 이는 최초 로그인 시점에 결정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 로그인 사용자명 (unique, 로컬 사용자만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시 (솔트 포함, 로컬 사용자만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 계정 고유 ID (unique, OAuth 사용자만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// 표시 이름 (Google 프로필)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// 이메일 (Google 프로필)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 프로필 이미지 URL (Google 프로필)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 제출된 시크릿 (제출 순서 유지, 추가만 가능)
    #[serde(default)]
    pub secrets: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (사용자명/비밀번호)
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            display_name: None,
            email: None,
            profile_image_url: None,
            auth_provider: AuthProvider::Local,
            secrets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Google OAuth 사용자 생성
    ///
    /// 비밀번호 해시 없이 생성되므로 로컬 로그인은 불가능합니다.
    pub fn new_google(google_id: String, profile: &GoogleProfile) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: None,
            password_hash: None,
            google_id: Some(google_id),
            display_name: profile.name.clone(),
            email: profile.email.clone(),
            profile_image_url: profile.picture.clone(),
            auth_provider: AuthProvider::Google,
            secrets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local) && self.password_hash.is_some()
    }

    /// 화면에 표시할 이름
    pub fn label(&self) -> &str {
        self.username
            .as_deref()
            .or(self.display_name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("anonymous")
    }
}
