use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::session::SessionRecord;
use super::SessionStore;

/// 메모리 기반 세션 저장소
///
/// 단일 인스턴스 개발 환경과 테스트용입니다. 만료된 레코드는 조회 시점과
/// 새 세션 저장 시점에 제거됩니다.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::StoreUnavailable("memory session store poisoned".to_string())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, record: &SessionRecord) -> AppResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        sessions.retain(|_, existing| !existing.is_expired());
        sessions.insert(record.session_id.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;

        match sessions.get(session_id) {
            Some(record) if record.is_expired() => {
                sessions.remove(session_id);
                Ok(None)
            }
            Some(record) => Ok(Some(record.clone())),
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        sessions.remove(session_id);
        Ok(())
    }
}
