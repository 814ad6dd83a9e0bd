//! 시크릿 제출 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 시크릿 제출 폼 (`POST /submit`)
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[validate(length(min = 1, max = 1000, message = "시크릿은 1-1000자 사이여야 합니다"))]
    pub secret: String,
}
