//! HTTP 전송 계층
//!
//! 게이트웨이가 만든 [`PendingRequest`]를 실제 네트워크로 보내고
//! [`ApiResponse`]로 돌려주는 경계입니다. 재시도 시 같은 요청을 다시 보내야 하므로
//! 요청 본문은 모두 메모리에 보관되는 재전송 가능한 형태만 허용합니다.
//!
//! - [`reqwest_client::ReqwestTransport`] - `reqwest` 기반 구현
//! - `mock::ScriptedTransport` - 단위 테스트용 스크립트 전송 (테스트 빌드 전용)

pub mod reqwest_client;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{ClientError, ClientResult};

pub use reqwest_client::ReqwestTransport;

/// multipart 본문의 한 파트
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    /// 일반 텍스트 필드
    Text { name: String, value: String },
    /// 파일 필드 (내용은 미리 읽어 둡니다)
    File {
        name: String,
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

impl MultipartField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        MultipartField::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }
}

/// 재전송 가능한 요청 본문
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    Multipart(Vec<MultipartField>),
}

/// 전송 대기 중인 요청
///
/// 한 번의 게이트웨이 호출 동안만 존재하며, 재시도 때는 인증 헤더만 다시 계산됩니다.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub method: Method,
    /// 절대 URL
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl PendingRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// 서버 응답
///
/// 본문은 전부 읽은 상태로 보관되므로 여러 번 해석할 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 본문을 UTF-8 문자열로 반환합니다. 잘못된 바이트는 대체 문자로 바뀝니다.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// 본문을 JSON으로 역직렬화합니다.
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ClientError::SerializationError(format!(
                "응답 본문 해석 실패 ({}): {}",
                self.status, e
            ))
        })
    }

    /// 2xx가 아니면 `ClientError::ApiError`로 변환합니다.
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::api(self.status, self.text()))
        }
    }
}

/// HTTP 요청 전송 인터페이스
///
/// 네트워크 수준 실패만 `Err(ClientError::TransportError)`로 반환하며,
/// 상태 코드와 무관하게 응답을 받았다면 `Ok`입니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &PendingRequest) -> ClientResult<ApiResponse>;
}
