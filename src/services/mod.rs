//! 서비스 계층 모듈
//!
//! 게이트웨이 위에서 동작하는 타입 기반 API를 도메인별로 제공합니다.
//! 모든 서비스는 `Arc<AuthGateway>`를 주입받아 같은 세션을 공유합니다.
//!
//! # Features
//!
//! - 로그인/로그아웃 및 세션 상태 확인 ([`auth`])
//! - 도서, 이용자, 대출 REST API ([`library`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, library::BookService};
//!
//! let gateway = Arc::new(AuthGateway::with_defaults(settings, Session::from_config())?);
//! AuthService::new(gateway.clone()).login("admin", "admin123").await?;
//!
//! if let Outcome::Success(page) = BookService::new(gateway).list_books(None, None).await? {
//!     println!("{} books", page.count);
//! }
//! ```

pub mod auth;
pub mod library;
