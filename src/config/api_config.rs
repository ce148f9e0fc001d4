//! # API Configuration Module
//!
//! 도서관 REST API 엔드포인트, 요청 타임아웃, 토큰 갱신 방식 등
//! 게이트웨이 동작에 필요한 설정을 관리하는 모듈입니다.
//!
//! ## 엔드포인트 구성
//!
//! | 용도 | 기본 경로 | 환경 변수 |
//! |------|-----------|-----------|
//! | API 기본 URL | `http://localhost:8000/api` | `LIBRARY_API_BASE_URL` |
//! | 로그인 (토큰 발급) | `/auth/token/` | `LIBRARY_TOKEN_PATH` |
//! | 토큰 갱신 | `/auth/token/refresh/` | `LIBRARY_TOKEN_REFRESH_PATH` |
//! | 로그인 화면 | `/login` | `LIBRARY_LOGIN_PAGE` |
//!
//! 로그인 화면 경로는 API가 아니라 프론트엔드 경로이므로 기본 URL과 결합하지 않고
//! 그대로 내비게이터에 전달됩니다.

use std::env;

use crate::errors::{ClientError, ClientResult};

/// 401 응답 시 토큰 갱신을 조율하는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// 각 요청이 독립적으로 갱신을 수행합니다. 동시 갱신 시 마지막 쓰기가 이깁니다.
    #[default]
    Independent,
    /// 갱신을 하나로 직렬화하고, 다른 작업이 이미 갱신한 경우 네트워크 호출을 생략합니다.
    Coalesced,
}

impl RefreshMode {
    /// 문자열에서 RefreshMode를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 모드 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(RefreshMode)` - 지원하는 모드
    /// * `Err(String)` - 알 수 없는 모드 이름
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "independent" => Ok(RefreshMode::Independent),
            "coalesced" => Ok(RefreshMode::Coalesced),
            _ => Err(format!("Unsupported refresh mode: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshMode::Independent => "independent",
            RefreshMode::Coalesced => "coalesced",
        }
    }
}

/// API 엔드포인트 설정
pub struct ApiConfig;

impl ApiConfig {
    /// API 기본 URL을 반환합니다. 끝의 `/`는 제거됩니다.
    ///
    /// # 기본값
    ///
    /// `http://localhost:8000/api`
    pub fn base_url() -> String {
        env::var("LIBRARY_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 로그인(토큰 발급) 엔드포인트 경로
    pub fn token_path() -> String {
        env::var("LIBRARY_TOKEN_PATH").unwrap_or_else(|_| "/auth/token/".to_string())
    }

    /// 토큰 갱신 엔드포인트 경로
    pub fn refresh_path() -> String {
        env::var("LIBRARY_TOKEN_REFRESH_PATH")
            .unwrap_or_else(|_| "/auth/token/refresh/".to_string())
    }

    /// 갱신 실패 시 이동할 로그인 화면 경로
    pub fn login_page() -> String {
        env::var("LIBRARY_LOGIN_PAGE").unwrap_or_else(|_| "/login".to_string())
    }

    /// HTTP 요청 타임아웃 (초)
    ///
    /// # Errors
    ///
    /// 숫자가 아닌 값이 설정된 경우 `ClientError::ConfigError`
    pub fn request_timeout_secs() -> ClientResult<u64> {
        match env::var("LIBRARY_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ClientError::ConfigError(format!(
                    "LIBRARY_REQUEST_TIMEOUT_SECS 파싱 실패 ({}): {}",
                    raw, e
                ))
            }),
            Err(_) => Ok(30),
        }
    }

    /// 토큰 갱신 조율 방식
    ///
    /// # Errors
    ///
    /// 지원하지 않는 모드 이름인 경우 `ClientError::ConfigError`
    pub fn refresh_mode() -> ClientResult<RefreshMode> {
        match env::var("LIBRARY_REFRESH_MODE") {
            Ok(raw) => RefreshMode::from_str(&raw).map_err(ClientError::ConfigError),
            Err(_) => Ok(RefreshMode::default()),
        }
    }
}

/// 게이트웨이와 서비스에 주입되는 설정 묶음
///
/// 환경 변수에서 한 번 읽어 값으로 전달하므로, 테스트에서는
/// 환경 변수 없이 직접 구성할 수 있습니다.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// API 기본 URL (끝 `/` 없음)
    pub base_url: String,
    /// 토큰 발급 경로
    pub token_path: String,
    /// 토큰 갱신 경로
    pub refresh_path: String,
    /// 로그인 화면 경로
    pub login_page: String,
    /// 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
    /// 갱신 조율 방식
    pub refresh_mode: RefreshMode,
    /// User-Agent 헤더 값
    pub user_agent: String,
}

impl GatewaySettings {
    /// 환경 변수에서 설정을 읽어 옵니다.
    pub fn from_env() -> ClientResult<Self> {
        Ok(Self {
            base_url: ApiConfig::base_url(),
            token_path: ApiConfig::token_path(),
            refresh_path: ApiConfig::refresh_path(),
            login_page: ApiConfig::login_page(),
            request_timeout_secs: ApiConfig::request_timeout_secs()?,
            refresh_mode: ApiConfig::refresh_mode()?,
            user_agent: default_user_agent(),
        })
    }

    /// 지정한 기본 URL과 기본 경로들로 설정을 만듭니다.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// 갱신 조율 방식을 바꾼 설정을 반환합니다.
    pub fn refresh_mode(mut self, mode: RefreshMode) -> Self {
        self.refresh_mode = mode;
        self
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            token_path: "/auth/token/".to_string(),
            refresh_path: "/auth/token/refresh/".to_string(),
            login_page: "/login".to_string(),
            request_timeout_secs: 30,
            refresh_mode: RefreshMode::Independent,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("library-client/{}", env!("CARGO_PKG_VERSION"))
}
