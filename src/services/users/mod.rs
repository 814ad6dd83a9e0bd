//! 사용자 시크릿 서비스 모듈
//!
//! 시크릿 제출과 공개 목록 조회를 담당합니다.

pub mod user_service;

pub use user_service::*;
