//! # Domain Models
//!
//! 영속 엔티티가 아닌 도메인 모델들입니다.
//!
//! - [`auth`] - 요청별 세션 상태, 인증 모드, 자격 증명
//! - [`oauth`] - Google 사용자 프로필
//! - [`session`] - 세션 토큰 클레임과 서버측 세션 레코드

pub mod auth;
pub mod oauth;
pub mod session;
