//! 클라이언트 전역에서 사용하는 에러 시스템
//!
//! 도서관 API 클라이언트를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 401 응답은 에러가 아닙니다. 게이트웨이가 토큰 갱신/재시도/리다이렉트로
//! 경계 안에서 해결하며, 갱신 실패는 `Outcome::Redirected`로 표현됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{ClientError, ClientResult};
//!
//! fn upload_type(path: &Path) -> ClientResult<UploadFileType> {
//!     UploadFileType::from_path(path)
//!         .ok_or_else(|| ClientError::ValidationError("지원하지 않는 파일 형식".to_string()))
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// 클라이언트 전역 에러 타입
///
/// 게이트웨이, 세션 저장소, 타입 API 호출에서 발생할 수 있는
/// 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum ClientError {
    /// 네트워크 수준 실패 (연결 거부, 타임아웃 등). 재시도하지 않고 그대로 전파됩니다.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 최종 응답이 2xx가 아닌 경우 (400/403/404/500 …)
    #[error("API error ({status}): {body}")]
    ApiError { status: StatusCode, body: String },

    /// 로그인 거부
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 로컬 입력값 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 토큰 저장소 읽기/쓰기 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 잘못된 설정값
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 업로드 파일 등 로컬 파일 입출력 실패
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    /// 응답 상태 코드와 본문으로 `ApiError`를 생성합니다.
    pub fn api(status: StatusCode, body: impl Into<String>) -> Self {
        ClientError::ApiError {
            status,
            body: body.into(),
        }
    }

    /// 네트워크 수준 실패인지 확인합니다.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::TransportError(_))
    }

    /// `ApiError`인 경우 상태 코드를 반환합니다.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::TransportError(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::SerializationError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        ClientError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ClientResult<T> = Result<T, ClientError>;

/// 외부 라이브러리 에러를 ClientError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 저장소 에러로 변환합니다.
    fn context(self, msg: &str) -> ClientResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> ClientResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> ClientResult<T> {
        self.map_err(|e| ClientError::StorageError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ClientResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClientError::StorageError(format!("{}: {}", f(), e)))
    }
}
