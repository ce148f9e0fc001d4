//! # Data Transfer Objects
//!
//! 도서관 REST API의 요청/응답 형식을 정의합니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|------------|
//! | [`tokens`] | `/auth/token/`, `/auth/token/refresh/` |
//! | [`books`] | `/books/…` |
//! | [`users`] | `/users/…` |
//! | [`loans`] | `/loans/…` |
//! | [`page`] | 목록 응답의 페이지 래퍼 |
//! | [`upload`] | `bulk_upload` 결과와 파일 형식 |

pub mod tokens;
pub mod books;
pub mod users;
pub mod loans;
pub mod page;
pub mod upload;

pub use tokens::*;
pub use books::*;
pub use users::*;
pub use loans::*;
pub use page::*;
pub use upload::*;
