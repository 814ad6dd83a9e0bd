//! 자격 증명 서비스
//!
//! 로컬 회원가입/로그인과 Google 신원의 사용자 매핑을 담당합니다.
//! 모든 로그인 실패는 원인과 관계없이 [`AppError::InvalidCredentials`]로 통합됩니다.

use std::sync::Arc;
use actix_web::web;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::Credentials;
use crate::domain::models::oauth::google_user::GoogleProfile;
use crate::repositories::users::UserStore;
use crate::utils::string_utils::validate_required_string;
use super::GoogleIdentityProvider;

const DUMMY_PASSWORD: &str = "timing-equalizer";

/// bcrypt가 실제로 사용하는 비밀번호 최대 길이 (NUL 종단 1바이트 제외)
pub const MAX_PASSWORD_BYTES: usize = 71;

pub struct CredentialService {
    users: Arc<dyn UserStore>,
    google: Option<Arc<dyn GoogleIdentityProvider>>,
    bcrypt_cost: u32,
    /// 존재하지 않는 사용자 로그인 시 검증에 사용하는 해시
    dummy_hash: String,
}

impl CredentialService {
    /// `bcrypt_cost`로 더미 해시를 한 번 생성합니다.
    pub fn new(
        users: Arc<dyn UserStore>,
        google: Option<Arc<dyn GoogleIdentityProvider>>,
        bcrypt_cost: u32,
    ) -> AppResult<Self> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, bcrypt_cost)
            .context("더미 해시 생성 실패")?;

        Ok(Self {
            users,
            google,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// Google OAuth가 설정되어 있으면 제공자를 반환합니다.
    pub fn google_provider(&self) -> Option<&Arc<dyn GoogleIdentityProvider>> {
        self.google.as_ref()
    }

    /// 로컬 사용자 등록
    ///
    /// 사용자명 앞뒤 공백은 제거됩니다. 이미 존재하는 사용자명이면
    /// `DuplicateUser`를 반환하며 기존 계정은 변경되지 않습니다.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let username = validate_required_string(username, "username")?;
        if password.is_empty() {
            return Err(AppError::ValidationError("password is required".to_string()));
        }
        // 초과분이 잘려 서로 다른 비밀번호가 같은 해시로 검증되지 않도록 거부
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let start_time = std::time::Instant::now();
        let password = password.to_string();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .context("bcrypt 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = self.users
            .create(User::new_local(username.clone(), password_hash))
            .await?;

        log::info!("새 로컬 사용자 등록: {} ({})", username, user.id_string().unwrap_or_default());
        Ok(user)
    }

    /// 로컬 로그인
    ///
    /// 존재하지 않는 사용자, 틀린 비밀번호, 비밀번호가 없는 OAuth 계정 모두
    /// `InvalidCredentials`를 반환합니다.
    pub async fn authenticate_local(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.users.find_by_username(username.trim()).await?;

        let stored_hash = user
            .as_ref()
            .filter(|user| user.can_authenticate_with_password())
            .and_then(|user| user.password_hash.clone());

        let (hash, known) = match stored_hash {
            Some(hash) => (hash, true),
            None => (self.dummy_hash.clone(), false),
        };

        let password = password.to_string();
        let is_valid = match web::block(move || bcrypt::non_truncating_verify(password, &hash))
            .await
            .context("bcrypt 작업 실패")?
        {
            Ok(is_valid) => is_valid,
            // 저장 가능한 길이를 넘는 비밀번호는 어떤 계정과도 일치하지 않음
            Err(bcrypt::BcryptError::Truncation(_)) => false,
            Err(e) => return Err(AppError::InternalError(format!("비밀번호 검증 실패: {}", e))),
        };

        match user {
            Some(user) if known && is_valid => {
                log::info!("로컬 로그인 성공: {}", user.label());
                Ok(user)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    /// Google ID로 사용자를 찾거나 생성합니다.
    pub async fn find_or_create_by_google_id(
        &self,
        google_id: &str,
        profile: &GoogleProfile,
    ) -> AppResult<User> {
        let profile = GoogleProfile {
            google_id: google_id.to_string(),
            ..profile.clone()
        };

        let user = self.users.find_or_create_by_google_id(&profile).await?;
        log::info!("Google 사용자 로그인: {} ({})", google_id, user.id_string().unwrap_or_default());
        Ok(user)
    }

    /// 자격 증명 종류에 따라 인증을 분배합니다.
    pub async fn authenticate(&self, credentials: Credentials) -> AppResult<User> {
        log::debug!("인증 시도: {:?}", credentials);

        match credentials {
            Credentials::Local { username, password } => {
                self.authenticate_local(&username, &password).await
            }
            Credentials::Google { code } => {
                let provider = self.google.as_ref().ok_or_else(|| {
                    AppError::ExternalServiceError("Google OAuth is not configured".to_string())
                })?;
                let profile = provider.fetch_profile(&code).await?;
                self.find_or_create_by_google_id(&profile.google_id, &profile).await
            }
        }
    }
}
