//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 trait으로 추상화되어 있으며, 운영 환경 구현(MongoDB, Redis)과
//! 테스트/개발용 메모리 구현을 함께 제공합니다.
//! 구현체는 시작 시점에 선택되어 `AppState`를 통해 서비스에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserStore, MongoUserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
//! let user = store.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
