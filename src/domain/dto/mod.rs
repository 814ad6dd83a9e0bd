//! # Data Transfer Objects
//!
//! HTML 폼 요청, OAuth 콜백 쿼리, 외부 API 응답, 화면 표시용 응답 구조체를 정의합니다.

pub mod users;
