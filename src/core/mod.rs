//! # Core Module
//!
//! 서비스 전반에서 공유되는 핵심 구성 요소입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (리다이렉트 또는 일반화된 응답)
//! - **자동 변환**: `ErrorContext`로 외부 라이브러리 에러를 변환
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 설정과 서비스 인스턴스를 소유하는 컨테이너
//! - **명시적 주입**: `web::Data<AppState>`로 핸들러와 미들웨어에 전달
//! - **저장소 선택**: 설정에 따라 MongoDB/Redis 또는 메모리 저장소를 연결
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::state::AppState;
//!
//! let state = web::Data::new(AppState::from_config(config).await?);
//!
//! App::new()
//!     .app_data(state.clone())
//!     .configure(|cfg| configure_all_routes(cfg, visibility));
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
