//! 사용자 관련 DTO 모듈

pub mod request;
pub mod response;
