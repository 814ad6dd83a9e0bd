//! 인증 요청관련 DTO
//!
//! 로그인/회원가입 HTML 폼과 Google OAuth 콜백 쿼리를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 폼 (`POST /login`)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 100, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, max = 72, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 폼 (`POST /register`)
///
/// 비밀번호 강도 규칙은 두지 않습니다. 빈 값과 과도한 길이만 거부합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 100, message = "사용자명은 1-100자 사이여야 합니다"))]
    pub username: String,

    #[validate(length(min = 1, max = 72, message = "비밀번호는 1-72자 사이여야 합니다"))]
    pub password: String,
}

/// Google OAuth 콜백 쿼리 파라미터 (`GET /auth/google/secrets`)
///
/// 사용자가 동의를 거부하면 Google은 `code` 없이 `error`만 전달합니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
