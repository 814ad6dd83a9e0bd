//! 사용자 시크릿 서비스 구현

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::SecretEntry;
use crate::repositories::users::UserStore;
use crate::utils::string_utils::validate_required_string;

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 사용자의 시크릿 목록 끝에 시크릿을 추가합니다.
    ///
    /// 앞뒤 공백을 제거한 뒤 비어 있으면 `ValidationError`,
    /// 사용자가 사라졌으면 `NotAuthenticated`를 반환합니다.
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> AppResult<()> {
        let secret = validate_required_string(secret, "secret")?;

        if !self.users.append_secret(user_id, &secret).await? {
            return Err(AppError::NotAuthenticated);
        }

        log::info!("시크릿 제출: 사용자 {}", user_id);
        Ok(())
    }

    /// 시크릿이 있는 모든 사용자의 목록
    pub async fn list_secrets(&self) -> AppResult<Vec<SecretEntry>> {
        let users = self.users.find_with_secrets().await?;
        Ok(users.into_iter().map(SecretEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::MemoryUserStore;

    async fn setup() -> (UserService, String, String) {
        let store = Arc::new(MemoryUserStore::new());
        let alice = store
            .create(User::new_local("alice".to_string(), "h".to_string()))
            .await
            .unwrap();
        let bob = store
            .create(User::new_local("bob".to_string(), "h".to_string()))
            .await
            .unwrap();
        (
            UserService::new(store),
            alice.id_string().unwrap(),
            bob.id_string().unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_submit_secret_appends_in_order() {
        let (service, alice, bob) = setup().await;

        service.submit_secret(&alice, "first").await.unwrap();
        service.submit_secret(&alice, "  second  ").await.unwrap();

        let entries = service.list_secrets().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].owner_id, alice);
        assert_eq!(entries[0].secrets, vec!["first".to_string(), "second".to_string()]);
        assert!(entries.iter().all(|entry| entry.owner_id != bob));
    }

    #[actix_web::test]
    async fn test_empty_secret_is_rejected() {
        let (service, alice, _) = setup().await;

        let result = service.submit_secret(&alice, "   ").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(service.list_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_authenticated() {
        let (service, _, _) = setup().await;
        let missing = mongodb::bson::oid::ObjectId::new().to_hex();

        let result = service.submit_secret(&missing, "hello").await;
        assert!(matches!(result, Err(AppError::NotAuthenticated)));
    }
}
