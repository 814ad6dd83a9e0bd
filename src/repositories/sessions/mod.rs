//! 세션 레코드 저장소
//!
//! 세션 토큰이 유효하려면 서명 검증과 함께 이 저장소에 레코드가 존재해야 합니다.
//! 로그아웃은 레코드를 삭제하여 같은 토큰의 재사용을 막습니다.
//!
//! - [`RedisSessionStore`](session_repo::RedisSessionStore) - `session:{sid}` 키, TTL 자동 만료
//! - [`MemorySessionStore`](memory_session_repo::MemorySessionStore) - 프로세스 메모리

pub mod session_repo;
pub mod memory_session_repo;

pub use session_repo::RedisSessionStore;
pub use memory_session_repo::MemorySessionStore;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::models::session::SessionRecord;

/// 세션 레코드 저장소
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 레코드를 남은 유효 시간만큼의 TTL로 저장합니다.
    async fn save(&self, record: &SessionRecord) -> AppResult<()>;

    /// 세션 ID로 조회합니다. 만료된 레코드는 `None`입니다.
    async fn find(&self, session_id: &str) -> AppResult<Option<SessionRecord>>;

    /// 레코드를 삭제합니다. 없는 세션 ID도 성공으로 처리합니다.
    async fn delete(&self, session_id: &str) -> AppResult<()>;
}
