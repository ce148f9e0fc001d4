//! 인증 서비스 모듈
//!
//! 사용자명/비밀번호로 토큰 쌍을 발급받아 세션에 저장하고, 로그아웃 시 비웁니다.
//! 로그인 요청은 게이트웨이를 거치지 않으므로 401을 받아도 토큰 갱신을 시도하지 않습니다.

pub mod auth_service;

pub use auth_service::*;
