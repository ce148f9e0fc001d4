//! `reqwest` 기반 HTTP 전송

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use super::{ApiResponse, HttpTransport, MultipartField, PendingRequest, RequestBody};
use crate::config::GatewaySettings;
use crate::errors::{ClientError, ClientResult};

/// `reqwest::Client`를 감싼 전송 구현체
///
/// 연결 풀을 공유하므로 하나의 인스턴스를 `Arc`로 나누어 사용합니다.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// 설정의 타임아웃과 User-Agent로 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ClientError::ConfigError` - TLS 백엔드 초기화 등 클라이언트 생성 실패
    pub fn new(settings: &GatewaySettings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client })
    }

    fn multipart_form(fields: &[MultipartField]) -> ClientResult<Form> {
        let mut form = Form::new();
        for field in fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name.clone(), value.clone()),
                MultipartField::File {
                    name,
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes.clone())
                        .file_name(file_name.clone())
                        .mime_str(mime_type)
                        .map_err(|e| {
                            ClientError::ValidationError(format!(
                                "잘못된 MIME 타입 ({}): {}",
                                mime_type, e
                            ))
                        })?;
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &PendingRequest) -> ClientResult<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());

        builder = match &request.body {
            Some(RequestBody::Json(value)) => builder.json(value),
            Some(RequestBody::Form(pairs)) => builder.form(pairs),
            Some(RequestBody::Multipart(fields)) => builder.multipart(Self::multipart_form(fields)?),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        log::debug!("{} {} → {}", request.method, request.url, status);

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
