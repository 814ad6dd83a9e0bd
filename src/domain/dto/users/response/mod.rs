//! 응답 DTO

pub mod google_oauth_response;
pub mod secret_response;

pub use google_oauth_response::*;
pub use secret_response::*;
