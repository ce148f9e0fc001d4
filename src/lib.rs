//! 도서관 관리 API 클라이언트
//!
//! 도서관 관리 REST API(도서, 이용자, 대출)를 위한 Rust 클라이언트입니다.
//! 핵심은 인증 요청 게이트웨이로, 모든 보호된 호출에 Bearer 토큰을 붙이고
//! 401 응답 시 토큰을 한 번 갱신한 뒤 한 번만 재시도하며, 갱신에 실패하면
//! 세션을 비우고 로그인 화면으로 보냅니다.
//!
//! # Features
//!
//! - **인증 게이트웨이**: Bearer 헤더 주입, 401 자동 갱신, 단일 재시도, 로그인 리다이렉트
//! - **세션 저장소**: 메모리 또는 JSON 파일 기반 토큰 저장 ([`session`])
//! - **갱신 직렬화**: 동시 401에 대해 갱신 호출을 하나로 합치는 선택 모드
//! - **타입 API**: 도서, 이용자, 대출 엔드포인트와 일괄 업로드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, BookService, LibraryUserService, LoanService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │   AuthGateway   │ ──▶ │ LoginNavigator  │ ← 갱신 실패 시 로그인 화면
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ├──────────────▶ Session (SessionStore: 메모리 / 파일)
//!          ▼
//! ┌─────────────────┐
//! │  HttpTransport  │ ← reqwest
//! └─────────────────┘
//!          │
//!          ▼
//!   도서관 REST API (/api/…)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use library_client::config::GatewaySettings;
//! use library_client::gateway::{AuthGateway, Outcome};
//! use library_client::services::{auth::AuthService, library::LoanService};
//! use library_client::session::Session;
//!
//! let gateway = Arc::new(AuthGateway::with_defaults(
//!     GatewaySettings::from_env()?,
//!     Session::from_config(),
//! )?);
//!
//! AuthService::new(gateway.clone()).login("admin", "admin123").await?;
//!
//! match LoanService::new(gateway).list_overdue_loans().await? {
//!     Outcome::Success(loans) => println!("{} overdue", loans.len()),
//!     Outcome::Redirected => println!("로그인이 필요합니다"),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod services;
pub mod session;
pub mod transport;
pub mod utils;
