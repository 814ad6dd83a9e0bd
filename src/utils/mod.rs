//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, HTML 이스케이프
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{escape_html, validate_required_string};
//!
//! let username = validate_required_string("  alice  ", "username")?;
//! let safe = escape_html("<script>");
//! ```

pub mod string_utils;
