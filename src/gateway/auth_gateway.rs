//! 인증 요청 게이트웨이 구현

use std::sync::Arc;

use reqwest::header::HeaderMap;

use super::navigator::{LogNavigator, LoginNavigator};
use super::options::RequestOptions;
use super::refresh::{RefreshOutcome, TokenRefresher};
use super::state::{GatewayEvent, GatewayState, StateTrace};
use super::Outcome;
use crate::config::GatewaySettings;
use crate::domain::models::auth_headers;
use crate::errors::ClientResult;
use crate::session::Session;
use crate::transport::{ApiResponse, HttpTransport, PendingRequest, ReqwestTransport};
use crate::utils::string_utils::join_url;

/// 인증 요청 게이트웨이
///
/// 세션, 전송 계층, 내비게이터를 주입받아 사용하며 내부에 전역 상태가 없습니다.
/// 여러 작업에서 `Arc<AuthGateway>`로 공유해 동시에 호출할 수 있습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let settings = GatewaySettings::from_env()?;
/// let gateway = AuthGateway::with_defaults(settings, Session::from_config())?;
///
/// match gateway.request("/books/", RequestOptions::get()).await? {
///     Outcome::Success(response) => println!("{}", response.status),
///     Outcome::Redirected => println!("다시 로그인하세요"),
/// }
/// ```
pub struct AuthGateway {
    settings: GatewaySettings,
    session: Session,
    transport: Arc<dyn HttpTransport>,
    navigator: Arc<dyn LoginNavigator>,
    refresher: TokenRefresher,
}

impl AuthGateway {
    pub fn new(
        settings: GatewaySettings,
        session: Session,
        transport: Arc<dyn HttpTransport>,
        navigator: Arc<dyn LoginNavigator>,
    ) -> Self {
        let refresher = TokenRefresher::new(
            join_url(&settings.base_url, &settings.refresh_path),
            settings.refresh_mode,
            session.clone(),
            transport.clone(),
        );

        Self {
            settings,
            session,
            transport,
            navigator,
            refresher,
        }
    }

    /// `reqwest` 전송과 로그 내비게이터로 게이트웨이를 생성합니다.
    pub fn with_defaults(settings: GatewaySettings, session: Session) -> ClientResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&settings)?);
        Ok(Self::new(settings, session, transport, Arc::new(LogNavigator)))
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }

    /// 상대 경로를 API 기본 URL 기준의 절대 URL로 바꿉니다.
    pub fn url(&self, target: &str) -> String {
        join_url(&self.settings.base_url, target)
    }

    /// 인증된 요청을 보냅니다.
    ///
    /// # Arguments
    ///
    /// * `target` - 상대 경로(기본 URL 기준) 또는 절대 URL
    /// * `options` - 메서드, 헤더, 본문
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Success(response))` - 최종 응답. 재시도한 경우 재시도 응답이며 상태 코드는 그대로입니다.
    /// * `Ok(Outcome::Redirected)` - 갱신 실패로 토큰을 지우고 로그인 화면으로 보냄
    ///
    /// # Errors
    ///
    /// * `ClientError::TransportError` - 원 요청 또는 재시도의 네트워크 실패 (갱신하지 않음)
    /// * `ClientError::StorageError` - 토큰 저장소 실패
    pub async fn request(
        &self,
        target: &str,
        options: RequestOptions,
    ) -> ClientResult<Outcome<ApiResponse>> {
        let RequestOptions {
            method,
            headers: caller_headers,
            body,
        } = options;

        let mut trace = StateTrace::new();
        let mut pending = PendingRequest {
            method,
            url: self.url(target),
            headers: HeaderMap::new(),
            body,
        };

        let (headers, epoch) = self.prepare_headers(&caller_headers).await?;
        pending.headers = headers;

        trace.apply(GatewayEvent::Dispatched);
        let response = self.transport.send(&pending).await?;

        if trace.apply(GatewayEvent::Responded(response.status)) == GatewayState::Success {
            return Ok(Outcome::Success(response));
        }

        log::info!("🔑 401 응답: {} {} - 토큰 갱신 시도", pending.method, pending.url);
        trace.apply(GatewayEvent::RefreshStarted);

        let refreshed = self.refresher.refresh(epoch).await?;
        let event = match &refreshed {
            RefreshOutcome::Refreshed | RefreshOutcome::Reused => GatewayEvent::Refreshed,
            RefreshOutcome::Failed(reason) => {
                log::warn!("❌ 토큰 갱신 실패: {}", reason);
                GatewayEvent::RefreshRejected
            }
        };

        if trace.apply(event) != GatewayState::RefreshedRetry {
            self.session.clear().await?;
            self.navigator.redirect_to_login(&self.settings.login_page);
            return Ok(Outcome::Redirected);
        }

        let (headers, _) = self.prepare_headers(&caller_headers).await?;
        pending.headers = headers;

        let retried = self.transport.send(&pending).await?;
        trace.apply(GatewayEvent::Responded(retried.status));
        log::debug!(
            "재시도 완료: {} {} → {} ({}회 전송)",
            pending.method,
            pending.url,
            retried.status,
            trace.dispatches()
        );
        Ok(Outcome::Success(retried))
    }

    /// 인증 헤더 위에 호출자 헤더를 덮어쓴 헤더와, 그 시점의 세션 에폭을 반환합니다.
    ///
    /// 토큰을 읽은 뒤에 에폭을 읽으므로, 그 사이 갱신이 끼어들면 에폭이 더 최신이 되어
    /// 불필요한 갱신이 한 번 더 일어날 수는 있어도 갱신을 잘못 건너뛰지는 않습니다.
    async fn prepare_headers(&self, caller_headers: &HeaderMap) -> ClientResult<(HeaderMap, u64)> {
        let access = self.session.access_token().await?;
        let epoch = self.session.epoch();

        let mut headers = auth_headers(access.as_deref())?;
        headers.extend(caller_headers.clone());

        Ok((headers, epoch))
    }
}
