//! 클라이언트 내부 모델
//!
//! - [`token`] - 토큰 쌍, 저장소 키, 인증 헤더 생성

pub mod token;

pub use token::*;
