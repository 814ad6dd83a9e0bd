//! 시크릿 공유 인증 서비스
//!
//! 사용자가 로컬 계정(사용자명/비밀번호) 또는 Google OAuth 2.0으로 로그인하고,
//! 익명 시크릿을 제출/조회하는 서버 렌더링 웹 애플리케이션입니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 해시 기반 회원가입/로그인
//! - **OAuth 2.0**: Google 소셜 로그인 (find-or-create)
//! - **세션**: 서명된 쿠키 + 서버측 세션 레코드 (Redis 또는 메모리)
//! - **MongoDB**: 사용자와 시크릿 영구 저장
//! - **명시적 DI**: 시작 시점에 조립되는 `AppState`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← HTML 페이지 / 폼 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 자격 증명, 세션, 시크릿
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_auth_service::config::AppConfig;
//! use secrets_auth_service::core::state::AppState;
//!
//! let state = AppState::from_config(AppConfig::from_env()?).await?;
//! let user = state.credentials.register("alice", "pw1").await?;
//! let token = state.sessions.establish(&user).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod middlewares;
