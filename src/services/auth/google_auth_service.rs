//! Google OAuth 2.0 인증 서비스 구현
//!
//! Authorization Code 플로우의 서버측 절차를 담당합니다.
//!
//! ```text
//! 1. GET /auth/google          → 동의 화면 URL로 리다이렉트 (state 포함)
//! 2. Google 동의 화면           → GET /auth/google/secrets?code=...&state=...
//! 3. code → access_token 교환   (POST token_uri)
//! 4. access_token → 프로필 조회 (GET userinfo_uri)
//! ```
//!
//! 네트워크 호출은 [`GoogleIdentityProvider`] trait 뒤에 있으므로
//! 테스트에서는 스텁 구현으로 대체할 수 있습니다.

use async_trait::async_trait;
use crate::config::GoogleOAuthConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::GoogleTokenResponse;
use crate::domain::models::oauth::google_user::{GoogleProfile, GoogleUserInfo};

/// Google 신원 제공자
#[async_trait]
pub trait GoogleIdentityProvider: Send + Sync {
    /// 동의 화면 URL을 생성합니다.
    fn authorization_url(&self, state: &str) -> String;

    /// Authorization Code를 교환하여 사용자 프로필을 가져옵니다.
    async fn fetch_profile(&self, code: &str) -> AppResult<GoogleProfile>;
}

/// reqwest 기반 Google OAuth 클라이언트
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// Client Secret은 서버에서만 사용되며 브라우저로 전달되지 않습니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("code", auth_code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self.http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl GoogleIdentityProvider for GoogleAuthService {
    fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", "openid email profile"),
            ("response_type", "code"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    async fn fetch_profile(&self, code: &str) -> AppResult<GoogleProfile> {
        let token = self.exchange_code_for_token(code).await?;
        log::debug!("Google 토큰 교환 성공 (type: {})", token.token_type);

        let user_info = self.get_user_info(&token.access_token).await?;
        log::info!("Google 프로필 조회 성공: {}", user_info.id);

        Ok(GoogleProfile::from(user_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GoogleOAuthConfig {
        GoogleOAuthConfig {
            client_id: "client-123".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/secrets".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_uri: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            state_timeout_minutes: 10,
        }
    }

    #[test]
    fn test_authorization_url_contains_encoded_params() {
        let service = GoogleAuthService::new(config());
        let url = service.authorization_url("state-xyz");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fsecrets"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=state-xyz"));
        assert!(!url.contains("shh"));
    }
}
