//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 인증 미들웨어 (AuthMiddleware)
//! - 세션 쿠키에서 토큰 추출 및 복원
//! - 복원된 [`SessionState`](crate::domain::models::auth::SessionState)를 request extension에 저장
//! - 선택적/강제 인증 모드 지원 (강제 모드는 `/login`으로 리다이렉트)
//!
//! # 사용 방법
//!
//! ## 글로벌 미들웨어 등록
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthMiddleware::optional()) // 모든 요청에서 세션 복원
//!     .configure(|cfg| configure_all_routes(cfg, visibility))
//! ```
//!
//! ## 특정 리소스에만 적용
//! ```rust,ignore
//! cfg.service(
//!     web::resource("/submit")
//!         .wrap(AuthMiddleware::required())
//!         .route(web::get().to(handlers::secrets::submit_page))
//! );
//! ```
//!
//! 두 미들웨어가 겹치면 바깥쪽에서 복원한 세션 상태를 재사용하므로
//! 요청당 세션 복원은 한 번만 수행됩니다.

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
