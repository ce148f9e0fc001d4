//! # Domain Layer Module
//!
//! 클라이언트가 주고받는 데이터 구조를 모아 둔 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 세션 토큰 등 클라이언트 내부 모델
//! └── DTOs    - REST API 요청/응답 계약 (도서, 이용자, 대출, 토큰)
//!      │
//!      ▼
//! Services (AuthService, BookService, LibraryUserService, LoanService)
//!      │
//!      ▼
//! Gateway → Transport
//! ```
//!
//! DTO는 서버 직렬화 형식을 그대로 따를 뿐이며, 도서 재고나 반납 기한 같은
//! 업무 규칙은 서버가 담당하므로 여기서 계산하지 않습니다.

pub mod models;
pub mod dto;

pub use models::*;
pub use dto::*;
