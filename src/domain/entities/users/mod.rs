//! Users Entity Module
//!
//! 로컬 인증과 Google OAuth 인증을 모두 지원하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("alice".to_string(), hashed_password);
//!
//! // Google 사용자 생성
//! let oauth_user = User::new_google(profile.google_id.clone(), &profile);
//! ```

pub mod user;
