//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 키-값 저장소와 JSON 기반 객체 직렬화를 제공합니다.
//! 세션 레코드 저장소가 이 클라이언트를 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::connect("redis://localhost:6379").await?;
//! cache.set_with_expiry("session:abc", &record, 3600).await?;
//!
//! let record: Option<SessionRecord> = cache.get("session:abc").await?;
//! cache.del("session:abc").await?;
//! ```

pub mod redis;
