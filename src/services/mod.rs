//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받으며, `AppState`가 소유합니다.
//!
//! # Features
//!
//! - 로컬 회원가입/로그인, Google OAuth find-or-create
//! - 서명된 세션 토큰 발급, 복원, 폐기
//! - 시크릿 제출과 공개 목록 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::CredentialService;
//!
//! let credentials = CredentialService::new(users.clone(), google, config.password.bcrypt_cost)?;
//! let user = credentials.authenticate_local("alice", "pw1").await?;
//! ```

pub mod users;
pub mod auth;
