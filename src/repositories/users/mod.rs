//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] trait과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserStore`](user_repo::MongoUserStore) - MongoDB `users` 컬렉션
//! - [`MemoryUserStore`](memory_user_repo::MemoryUserStore) - 프로세스 메모리
//!
//! 모든 메서드는 단일 문서 수준에서 원자적이며, 여러 문서에 걸친 트랜잭션은 없습니다.

pub mod user_repo;
pub mod memory_user_repo;

pub use user_repo::MongoUserStore;
pub use memory_user_repo::MemoryUserStore;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::google_user::GoogleProfile;

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID(hex 문자열)로 사용자 조회. 형식이 잘못된 ID는 `None`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// `username` 또는 `google_id`가 이미 존재하면 `DuplicateUser`를 반환하며,
    /// 기존 레코드는 변경되지 않습니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// `google_id`로 사용자를 찾고, 없으면 프로필로 생성합니다.
    ///
    /// 같은 `google_id`로 여러 번 호출해도 항상 같은 사용자를 반환합니다.
    async fn find_or_create_by_google_id(&self, profile: &GoogleProfile) -> AppResult<User>;

    /// 사용자의 시크릿 목록 끝에 시크릿을 추가합니다.
    ///
    /// 사용자가 존재하지 않으면 `Ok(false)`를 반환합니다.
    async fn append_secret(&self, id: &str, secret: &str) -> AppResult<bool>;

    /// 시크릿이 하나 이상 있는 사용자를 생성 순서대로 반환합니다.
    async fn find_with_secrets(&self) -> AppResult<Vec<User>>;
}
