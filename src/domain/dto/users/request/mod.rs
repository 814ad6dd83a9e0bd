//! 요청 DTO
//!
//! 모든 폼 구조체는 `validator::Validate`를 구현하며,
//! 핸들러에서 서비스 호출 전에 검증됩니다.

pub mod auth_request;
pub mod secret_request;

pub use auth_request::*;
pub use secret_request::*;
