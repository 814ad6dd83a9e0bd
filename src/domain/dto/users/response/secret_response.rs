//! 시크릿 목록 응답 DTO
use serde::Serialize;
use crate::domain::entities::users::user::User;

/// 공개 시크릿 페이지에 표시되는 사용자별 시크릿 묶음
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SecretEntry {
    /// 시크릿을 제출한 사용자 ID
    pub owner_id: String,
    /// 제출 순서대로 정렬된 시크릿
    pub secrets: Vec<String>,
}

impl From<User> for SecretEntry {
    fn from(user: User) -> Self {
        Self {
            owner_id: user.id_string().unwrap_or_default(),
            secrets: user.secrets,
        }
    }
}
