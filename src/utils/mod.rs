//! 공통 유틸리티 함수 모듈
//!
//! 클라이언트 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - URL 조합, 쿼리 생성, 토큰 마스킹
//! - [`display_terminal`] - 데모 바이너리용 터미널 출력 함수들

pub mod string_utils;
pub mod display_terminal;
