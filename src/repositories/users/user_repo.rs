//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 필드 | 속성 |
//! |------|------|------|
//! | `username_unique` | `username` | UNIQUE, SPARSE |
//! | `google_id_unique` | `google_id` | UNIQUE, SPARSE |
//! | `created_at_desc` | `created_at` (내림차순) | - |
//!
//! 사용자명 중복은 사전 조회가 아닌 유니크 인덱스 위반(E11000)으로 감지하므로
//! 동시 가입 요청에서도 한 명만 성공합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::google_user::GoogleProfile;
use super::UserStore;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 저장소
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 사용자 컬렉션에 필요한 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시점에 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, google_id_index, created_at_index])
            .await
            .store_context("users 인덱스 생성 실패")?;

        log::info!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

/// 유니크 인덱스 위반 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            log::debug!("유효하지 않은 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .store_context("users.find_one(_id)")
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .store_context("users.find_one(username)")
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "google_id": google_id })
            .await
            .store_context("users.find_one(google_id)")
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::DuplicateUser
            } else {
                AppError::StoreUnavailable(format!("users.insert_one: {}", e))
            }
        })?;

        user.id = result.inserted_id.as_object_id();
        if user.id.is_none() {
            return Err(AppError::InternalError("inserted_id is not an ObjectId".to_string()));
        }

        Ok(user)
    }

    /// 단일 upsert(`$setOnInsert`)로 조회와 생성을 원자적으로 처리합니다.
    async fn find_or_create_by_google_id(&self, profile: &GoogleProfile) -> AppResult<User> {
        let candidate = User::new_google(profile.google_id.clone(), profile);
        let mut on_insert = mongodb::bson::to_document(&candidate)
            .context("User 직렬화 실패")?;
        // 필터의 google_id가 삽입 시 그대로 사용됨
        on_insert.remove("google_id");

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection
            .find_one_and_update(
                doc! { "google_id": &profile.google_id },
                doc! { "$setOnInsert": on_insert },
            )
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::InternalError(
                "upsert가 문서를 반환하지 않았습니다".to_string(),
            )),
            // 동시 upsert가 경합하면 한쪽이 E11000으로 실패하므로 기존 문서를 다시 조회
            Err(e) if is_duplicate_key(&e) => self
                .find_by_google_id(&profile.google_id)
                .await?
                .ok_or_else(|| AppError::StoreUnavailable(format!("users.upsert: {}", e))),
            Err(e) => Err(AppError::StoreUnavailable(format!("users.upsert: {}", e))),
        }
    }

    async fn append_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$push": { "secrets": secret },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .await
            .store_context("users.update_one($push secrets)")?;

        Ok(result.matched_count > 0)
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! { "secrets.0": { "$exists": true } })
            .sort(doc! { "created_at": 1 })
            .await
            .store_context("users.find(secrets)")?;

        cursor
            .try_collect()
            .await
            .store_context("users cursor")
    }
}
