//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]로 주입받으며, 연결 풀은 드라이버가 관리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! let store = MongoUserStore::new(&database);
//! store.ensure_indexes().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 내부적으로 `Arc`를 사용하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화하고 `ping`으로 연결 상태를 검증합니다.
    /// 연결 실패는 `StoreUnavailable`로 반환됩니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .store_context("MongoDB URI 파싱 실패")?;

        // 애플리케이션 이름 설정 (서버측 모니터링용)
        client_options.app_name = Some("secrets_auth_service".to_string());

        let client = Client::with_options(client_options)
            .store_context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .store_context("MongoDB ping 실패")?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users_collection = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
