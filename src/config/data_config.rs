//! 실행 환경 및 세션 저장소 설정 관리 모듈
//!
//! 실행 환경 감지와 토큰 세션 저장 위치 관련 설정을 관리합니다.

use std::env;
use std::path::PathBuf;

/// 클라이언트 실행 환경
///
/// 세션 저장소 선택에만 영향을 줍니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    /// 세션을 파일에 남기지 않는 환경
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 실행 환경을 결정합니다. 없으면 `Production`
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| Self::from_str(&name))
            .unwrap_or(Environment::Production)
    }

    /// 환경 이름을 해석합니다.
    ///
    /// 대소문자를 구분하지 않고 `dev`, `testing`, `stage` 같은 줄임/변형 이름도 받으며,
    /// 인식하지 못한 이름은 `Production`으로 취급합니다.
    pub fn from_str(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// 토큰을 파일에 영구 저장해야 하는지 반환합니다.
    pub fn persists_session(&self) -> bool {
        !matches!(self, Environment::Test)
    }
}

/// 토큰 세션 저장소 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 파일 경로를 반환합니다.
    ///
    /// # Returns
    ///
    /// 세션 파일 경로. 기본값: `.library_session.json`
    ///
    /// # Environment Variables
    ///
    /// - `LIBRARY_SESSION_FILE`: 커스텀 경로
    pub fn store_path() -> PathBuf {
        env::var("LIBRARY_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".library_session.json"))
    }

    /// 현재 환경에서 파일 기반 세션 저장소를 사용할지 여부
    pub fn use_file_store() -> bool {
        Environment::current().persists_session()
    }
}
