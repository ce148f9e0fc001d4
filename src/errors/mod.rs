//! 클라이언트 전역 에러 모듈
//!
//! [`errors`] 모듈의 `ClientError`와 `ClientResult`를 재노출합니다.

pub mod errors;

pub use errors::*;
