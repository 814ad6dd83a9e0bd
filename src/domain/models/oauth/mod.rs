//! # OAuth Domain Models
//!
//! Google OAuth 2.0 Authorization Code 플로우에서 얻는 사용자 프로필 모델입니다.

pub mod google_user;
