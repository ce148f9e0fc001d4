//! 단위 테스트용 스크립트 전송
//!
//! 요청마다 응답 함수를 호출해 결과를 정하고, 보낸 요청을 모두 기록합니다.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

use super::{ApiResponse, HttpTransport, PendingRequest};
use crate::errors::ClientResult;

type Responder = dyn Fn(&PendingRequest) -> ClientResult<ApiResponse> + Send + Sync;

pub struct ScriptedTransport {
    responder: Box<Responder>,
    delay: Option<Duration>,
    sent: Mutex<Vec<PendingRequest>>,
}

impl ScriptedTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&PendingRequest) -> ClientResult<ApiResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// 응답을 돌려주기 전에 기다릴 시간. 동시 요청이 모두 전송된 뒤 응답받도록 할 때 씁니다.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<PendingRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// URL이 `suffix`로 끝나는 요청 수
    pub fn count(&self, suffix: &str) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .count()
    }

    /// URL이 `suffix`로 끝나는 요청들의 Authorization 헤더
    pub fn authorizations(&self, suffix: &str) -> Vec<Option<String>> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .map(bearer)
            .collect()
    }
}

/// 요청의 Authorization 헤더 값
pub fn bearer(request: &PendingRequest) -> Option<String> {
    request
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// JSON 본문 응답
pub fn json_reply(status: StatusCode, body: serde_json::Value) -> ClientResult<ApiResponse> {
    Ok(ApiResponse::new(status, body.to_string()))
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &PendingRequest) -> ClientResult<ApiResponse> {
        self.sent.lock().unwrap().push(request.clone());
        let reply = (self.responder)(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        reply
    }
}
