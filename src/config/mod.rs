//! # Configuration Module
//!
//! 도서관 API 클라이언트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하고,
//! 게이트웨이에 주입할 [`GatewaySettings`] 값으로 모아 줍니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 세션 저장소 관련 설정
//! - [`api_config`] - API 엔드포인트, 타임아웃, 토큰 갱신 모드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use library_client::config::{ApiConfig, GatewaySettings};
//!
//! // 개별 값 조회
//! let base_url = ApiConfig::base_url();
//!
//! // 게이트웨이 주입용 설정 묶음
//! let settings = GatewaySettings::from_env()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # API 설정
//! export LIBRARY_API_BASE_URL="http://localhost:8000/api"
//! export LIBRARY_TOKEN_PATH="/auth/token/"
//! export LIBRARY_TOKEN_REFRESH_PATH="/auth/token/refresh/"
//! export LIBRARY_LOGIN_PAGE="/login"
//! export LIBRARY_REQUEST_TIMEOUT_SECS="30"
//! export LIBRARY_REFRESH_MODE="independent"   # independent, coalesced
//!
//! # 세션 저장소
//! export LIBRARY_SESSION_FILE=".library_session.json"
//!
//! # 환경 설정
//! export ENVIRONMENT="development"  # development, test, staging, production
//! ```

pub mod data_config;
pub mod api_config;

pub use data_config::*;
pub use api_config::*;
