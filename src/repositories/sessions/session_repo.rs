use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::models::session::SessionRecord;
use super::SessionStore;

/// Redis 기반 세션 저장소
///
/// 키 패턴은 `session:{session_id}`이며, Redis TTL이 세션 만료를 처리합니다.
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(session_id: &str) -> String {
        format!("session:{}", session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, record: &SessionRecord) -> AppResult<()> {
        // SETEX는 0초 TTL을 거부함
        let ttl = record.remaining_seconds().max(1) as u64;

        self.redis
            .set_with_expiry(&Self::key(&record.session_id), record, ttl)
            .await
            .store_context("세션 저장 실패")?;

        log::debug!("세션 저장 완료 - sid: {}, ttl: {}초", record.session_id, ttl);
        Ok(())
    }

    async fn find(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        let record: Option<SessionRecord> = self.redis
            .get(&Self::key(session_id))
            .await
            .store_context("세션 조회 실패")?;

        Ok(record.filter(|record| !record.is_expired()))
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        self.redis
            .del(&Self::key(session_id))
            .await
            .store_context("세션 삭제 실패")
    }
}
