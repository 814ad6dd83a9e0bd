//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 영속 엔티티를 정의합니다.
//! 현재 유일한 엔티티는 `users` 컬렉션의 [`users::user::User`]입니다.

pub mod users;
