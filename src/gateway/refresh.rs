//! 토큰 갱신 프로토콜
//!
//! 1. 저장된 리프레시 토큰이 없으면 네트워크 호출 없이 실패합니다.
//! 2. `{"refresh": <token>}`을 갱신 엔드포인트로 `POST` 합니다.
//! 3. 2xx 응답에 `access`가 있으면 액세스 토큰을 덮어쓰고, `refresh`도 있으면
//!    리프레시 토큰까지 교체합니다.
//! 4. 그 외(2xx가 아닌 응답, 네트워크 실패, `access` 없는 응답)는 모두 갱신 실패입니다.
//!
//! 갱신 자체는 재시도하지 않습니다.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use tokio::sync::Mutex;

use crate::config::RefreshMode;
use crate::domain::dto::{RefreshRequest, TokenRefreshResponse};
use crate::errors::{ClientError, ClientResult};
use crate::session::Session;
use crate::transport::{HttpTransport, PendingRequest, RequestBody};
use crate::utils::string_utils::mask_token;

/// 갱신 시도 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 서버에서 새 액세스 토큰을 받아 저장함
    Refreshed,
    /// 다른 작업이 이미 갱신한 토큰을 재사용함 (`RefreshMode::Coalesced`)
    Reused,
    /// 갱신 실패
    Failed(RefreshFailure),
}

/// 갱신 실패 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshFailure {
    /// 저장된 리프레시 토큰 없음
    MissingRefreshToken,
    /// 서버가 2xx가 아닌 상태로 응답함
    Rejected(StatusCode),
    /// 2xx 응답이지만 `access`를 해석할 수 없음
    MalformedResponse(String),
    /// 네트워크 수준 실패
    Transport(String),
}

impl fmt::Display for RefreshFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshFailure::MissingRefreshToken => write!(f, "리프레시 토큰 없음"),
            RefreshFailure::Rejected(status) => write!(f, "갱신 거부 ({})", status),
            RefreshFailure::MalformedResponse(reason) => write!(f, "잘못된 갱신 응답: {}", reason),
            RefreshFailure::Transport(reason) => write!(f, "갱신 요청 전송 실패: {}", reason),
        }
    }
}

/// 401 응답 이후 토큰 갱신을 수행합니다.
pub struct TokenRefresher {
    refresh_url: String,
    mode: RefreshMode,
    session: Session,
    transport: Arc<dyn HttpTransport>,
    lock: Mutex<()>,
}

impl TokenRefresher {
    pub fn new(
        refresh_url: impl Into<String>,
        mode: RefreshMode,
        session: Session,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            refresh_url: refresh_url.into(),
            mode,
            session,
            transport,
            lock: Mutex::new(()),
        }
    }

    /// 401을 받은 요청을 위해 갱신을 시도합니다.
    ///
    /// # Arguments
    ///
    /// * `observed_epoch` - 실패한 요청의 인증 헤더를 만든 직후의 세션 에폭
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshOutcome)` - 갱신 성공/재사용/실패
    ///
    /// # Errors
    ///
    /// * `ClientError::StorageError` - 토큰 저장소 읽기/쓰기 실패
    pub async fn refresh(&self, observed_epoch: u64) -> ClientResult<RefreshOutcome> {
        match self.mode {
            RefreshMode::Independent => self.refresh_now().await,
            RefreshMode::Coalesced => {
                let _guard = self.lock.lock().await;

                if self.session.epoch() != observed_epoch
                    && self.session.access_token().await?.is_some()
                {
                    log::debug!("다른 요청이 이미 토큰을 갱신했습니다. 갱신 호출 생략");
                    return Ok(RefreshOutcome::Reused);
                }

                self.refresh_now().await
            }
        }
    }

    async fn refresh_now(&self) -> ClientResult<RefreshOutcome> {
        let Some(refresh_token) = self.session.refresh_token().await? else {
            log::info!("리프레시 토큰이 없어 갱신을 건너뜁니다");
            return Ok(RefreshOutcome::Failed(RefreshFailure::MissingRefreshToken));
        };

        log::debug!("🔄 액세스 토큰 갱신 요청 (refresh={})", mask_token(&refresh_token));

        let body = serde_json::to_value(RefreshRequest {
            refresh: refresh_token,
        })?;
        let request =
            PendingRequest::new(Method::POST, &self.refresh_url).with_body(RequestBody::Json(body));

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(ClientError::TransportError(reason)) => {
                return Ok(RefreshOutcome::Failed(RefreshFailure::Transport(reason)));
            }
            Err(e) => return Err(e),
        };

        if !response.is_success() {
            return Ok(RefreshOutcome::Failed(RefreshFailure::Rejected(
                response.status,
            )));
        }

        let tokens = match response.json::<TokenRefreshResponse>() {
            Ok(tokens) => tokens,
            Err(e) => {
                return Ok(RefreshOutcome::Failed(RefreshFailure::MalformedResponse(
                    e.to_string(),
                )));
            }
        };

        let Some(access) = tokens.access else {
            return Ok(RefreshOutcome::Failed(RefreshFailure::MalformedResponse(
                "access 필드 없음".to_string(),
            )));
        };

        self.session
            .store_refreshed(&access, tokens.refresh.as_deref())
            .await?;

        log::info!(
            "✅ 액세스 토큰 갱신 완료 (access={}, 리프레시 교체: {})",
            mask_token(&access),
            tokens.refresh.is_some()
        );

        Ok(RefreshOutcome::Refreshed)
    }
}
