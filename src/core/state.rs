//! 애플리케이션 상태
//!
//! 시작 시점에 설정을 읽어 저장소 구현을 선택하고, 서비스들을 조립합니다.
//! 모든 워커는 `web::Data<AppState>`를 통해 같은 인스턴스를 공유합니다.

use std::sync::Arc;
use log::info;
use crate::caching::redis::RedisClient;
use crate::config::{AppConfig, SessionBackend};
use crate::core::errors::{AppResult, ErrorContext};
use crate::db::Database;
use crate::repositories::sessions::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::repositories::users::{MongoUserStore, UserStore};
use crate::services::auth::{CredentialService, GoogleAuthService, GoogleIdentityProvider, SessionManager};
use crate::services::users::UserService;

/// 핸들러와 미들웨어가 공유하는 애플리케이션 상태
pub struct AppState {
    pub config: AppConfig,
    pub credentials: CredentialService,
    pub sessions: SessionManager,
    pub users: UserService,
}

impl AppState {
    /// 운영 구성: MongoDB 사용자 저장소와 설정된 세션 저장소를 연결합니다.
    ///
    /// 인덱스 생성까지 완료된 뒤에 반환하므로, 서버는 저장소가 준비된 상태에서만 시작됩니다.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        info!("📡 데이터베이스 연결 중...");
        let database = Database::connect(&config.database).await?;
        let user_store = MongoUserStore::new(&database);
        user_store.ensure_indexes().await?;

        let session_store: Arc<dyn SessionStore> = match &config.session.backend {
            SessionBackend::Redis { url } => {
                let redis = RedisClient::connect(url)
                    .await
                    .store_context("Redis 연결 실패")?;
                Arc::new(RedisSessionStore::new(redis))
            }
            SessionBackend::Memory => {
                log::warn!("메모리 세션 저장소 사용 중 (단일 인스턴스 전용)");
                Arc::new(MemorySessionStore::new())
            }
        };

        let google: Option<Arc<dyn GoogleIdentityProvider>> = config
            .google
            .clone()
            .map(|google| Arc::new(GoogleAuthService::new(google)) as Arc<dyn GoogleIdentityProvider>);

        Self::with_stores(config, Arc::new(user_store), session_store, google)
    }

    /// 주어진 저장소와 Google 제공자로 서비스를 조립합니다.
    pub fn with_stores(
        config: AppConfig,
        user_store: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        google: Option<Arc<dyn GoogleIdentityProvider>>,
    ) -> AppResult<Self> {
        let credentials = CredentialService::new(
            user_store.clone(),
            google,
            config.password.bcrypt_cost,
        )?;
        let sessions = SessionManager::new(&config.session, session_store, user_store.clone());
        let users = UserService::new(user_store);

        Ok(Self {
            config,
            credentials,
            sessions,
            users,
        })
    }
}
