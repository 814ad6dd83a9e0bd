//! 메모리 기반 사용자 저장소
//!
//! 테스트와 외부 의존성 없는 로컬 실행을 위한 [`UserStore`] 구현입니다.
//! 삽입 순서를 유지하며, 유니크 제약은 MongoDB 인덱스와 동일하게 동작합니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::google_user::GoogleProfile;
use super::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::StoreUnavailable("memory user store poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::StoreUnavailable("memory user store poisoned".to_string()))
    }

    fn find_by<P>(&self, predicate: P) -> AppResult<Option<User>>
    where
        P: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().find(|user| predicate(user)).cloned())
    }
}

fn conflicts(existing: &User, candidate: &User) -> bool {
    let same_username = candidate.username.is_some() && existing.username == candidate.username;
    let same_google_id = candidate.google_id.is_some() && existing.google_id == candidate.google_id;
    same_username || same_google_id
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.find_by(|user| user.id == Some(object_id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_by(|user| user.username.as_deref() == Some(username))
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        self.find_by(|user| user.google_id.as_deref() == Some(google_id))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if users.iter().any(|existing| conflicts(existing, &user)) {
            return Err(AppError::DuplicateUser);
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_or_create_by_google_id(&self, profile: &GoogleProfile) -> AppResult<User> {
        // 조회와 생성을 하나의 쓰기 락 안에서 수행
        let mut users = self.write()?;

        if let Some(existing) = users
            .iter()
            .find(|user| user.google_id.as_deref() == Some(profile.google_id.as_str()))
        {
            return Ok(existing.clone());
        }

        let mut user = User::new_google(profile.google_id.clone(), profile);
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn append_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let mut users = self.write()?;
        match users.iter_mut().find(|user| user.id == Some(object_id)) {
            Some(user) => {
                user.secrets.push(secret.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        Ok(self
            .read()?
            .iter()
            .filter(|user| !user.secrets.is_empty())
            .cloned()
            .collect())
    }
}
