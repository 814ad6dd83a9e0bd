//! # Domain Layer
//!
//! 비즈니스 도메인을 표현하는 타입들을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 1:1 매핑되는 영속 엔티티 (User)
//! ├── models/       ← 세션, 인증 상태, OAuth 프로필 등 도메인 모델
//! └── dto/          ← HTML 폼 / OAuth 응답 등 데이터 전송 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;
