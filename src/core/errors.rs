//! # Application Error Handling System
//!
//! 시크릿 공유 서비스의 통합 에러 처리 시스템입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)은 `AppError`를 반환하며,
//! 라우트 경계에서 로그를 남긴 뒤 리다이렉트 또는 일반화된 에러 페이지로 변환됩니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 사용자 열거 방지
//! - 로그인 실패는 원인과 관계없이 `InvalidCredentials` 하나로 통합
//! - 응답 본문에는 진단 정보를 절대 포함하지 않음
//! - 상세 원인은 서버 로그에만 기록
//!
//! ### 2. 라우트 경계 변환
//! - 인증 관련 에러는 폼 페이지로의 리다이렉트로 변환
//! - 인프라 에러는 일반화된 에러 페이지로 변환
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP 응답 | 사용 시나리오 |
//! |----------|-----------|---------------|
//! | `DuplicateUser` | 302 → `/register` | 이미 존재하는 사용자명으로 가입 |
//! | `InvalidCredentials` | 302 → `/login` | 로그인 실패 |
//! | `NotAuthenticated` | 302 → `/login` | 세션 없이 보호된 라우트 접근 |
//! | `ValidationError` | 400 Bad Request | 폼 입력값 검증 실패 |
//! | `ExternalServiceError` | 502 Bad Gateway | Google OAuth 통신 실패 |
//! | `StoreUnavailable` | 500 Internal Server Error | MongoDB / Redis 오류 |
//! | `ConfigurationError` | 500 Internal Server Error | 설정 누락 |
//! | `InternalError` | 500 Internal Server Error | 해싱, 토큰 서명 실패 등 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_user(store: &dyn UserStore, id: &str) -> AppResult<User> {
//!     store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or(AppError::NotAuthenticated)
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 처리되지 않은 에러도 안전한 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 사용 중인 사용자명으로 가입을 시도함
    #[error("Duplicate user")]
    DuplicateUser,

    /// 로그인 실패
    ///
    /// 존재하지 않는 사용자, 틀린 비밀번호, 비밀번호가 없는 OAuth 계정 모두
    /// 동일한 변형으로 표현됩니다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 세션 없이 인증이 필요한 라우트에 접근함
    #[error("Not authenticated")]
    NotAuthenticated,

    /// 저장소(MongoDB, Redis) 연결 또는 쿼리 실패
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;
    /// ```
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 폼 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스(Google OAuth) 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정값 누락 또는 형식 오류
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인증 실패 계열 에러인지 확인
    ///
    /// 인증 실패는 정상적인 사용자 행동의 결과이므로 `warn` 레벨로,
    /// 나머지는 `error` 레벨로 로깅할 때 사용합니다.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateUser | AppError::InvalidCredentials | AppError::NotAuthenticated
        )
    }

    /// 에러를 서버 로그에 기록합니다.
    pub fn log(&self, context: &str) {
        if self.is_auth_failure() || matches!(self, AppError::ValidationError(_)) {
            log::warn!("{}: {}", context, self);
        } else {
            log::error!("{}: {}", context, self);
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUser | AppError::InvalidCredentials | AppError::NotAuthenticated => {
                StatusCode::FOUND
            }
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인증 계열 에러는 해당 폼으로 리다이렉트하고, 나머지는 진단 정보 없는
    /// 일반 텍스트 응답을 반환합니다.
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::DuplicateUser => redirect_to("/register"),
            AppError::InvalidCredentials | AppError::NotAuthenticated => redirect_to("/login"),
            _ => HttpResponse::build(self.status_code())
                .content_type("text/plain; charset=utf-8")
                .body(
                    self.status_code()
                        .canonical_reason()
                        .unwrap_or("Error")
                        .to_string(),
                ),
        }
    }
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 컨텍스트 정보와 함께 에러를 `StoreUnavailable`로 변환합니다.
    fn store_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn store_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StoreUnavailable(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    fn location(response: &HttpResponse) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_duplicate_user_redirects_to_register() {
        let response = AppError::DuplicateUser.error_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), Some("/register"));
    }

    #[test]
    fn test_auth_failures_redirect_to_login() {
        for error in [AppError::InvalidCredentials, AppError::NotAuthenticated] {
            let response = error.error_response();
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(location(&response), Some("/login"));
        }
    }

    #[test]
    fn test_validation_error_response() {
        let response = AppError::ValidationError("secret is empty".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_hides_details() {
        let error = AppError::StoreUnavailable("connection refused 10.0.0.5:27017".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(location(&response).is_none());
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(AppError::DuplicateUser.is_auth_failure());
        assert!(AppError::InvalidCredentials.is_auth_failure());
        assert!(!AppError::StoreUnavailable("down".to_string()).is_auth_failure());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }

        let result: Result<(), &str> = Err("timeout");
        assert!(matches!(
            result.store_context("users.find_one"),
            Err(AppError::StoreUnavailable(_))
        ));
    }
}
