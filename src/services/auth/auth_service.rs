//! 로그인/로그아웃 서비스 구현

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use validator::Validate;

use crate::domain::dto::{LoginRequest, TokenObtainResponse};
use crate::domain::models::TokenPair;
use crate::errors::{ClientError, ClientResult};
use crate::gateway::AuthGateway;
use crate::transport::{PendingRequest, RequestBody};
use crate::utils::string_utils::mask_token;

/// 인증 서비스
pub struct AuthService {
    gateway: Arc<AuthGateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }

    /// 사용자명과 비밀번호로 로그인합니다.
    ///
    /// 성공하면 발급받은 토큰 쌍을 세션에 저장하고 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `username` - 사용자명
    /// * `password` - 비밀번호
    ///
    /// # Errors
    ///
    /// * `ClientError::ValidationError` - 빈 사용자명 또는 비밀번호
    /// * `ClientError::AuthenticationError` - 서버가 자격 증명을 거부함 (400, 401)
    /// * `ClientError::ApiError` - 그 밖의 2xx가 아닌 응답 (서버 오류 등)
    /// * `ClientError::TransportError` - 네트워크 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth = AuthService::new(gateway.clone());
    /// auth.login("admin", "admin123").await?;
    /// assert!(auth.is_authenticated().await?);
    /// ```
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenPair> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        credentials.validate()?;

        let url = self.gateway.url(&self.gateway.settings().token_path);
        let request = PendingRequest::new(Method::POST, url)
            .with_body(RequestBody::Json(serde_json::to_value(&credentials)?));

        let response = self.gateway.transport().send(&request).await?;

        match response.status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                log::warn!("로그인 거부: {} ({})", credentials.username, response.status);
                return Err(ClientError::AuthenticationError(format!(
                    "로그인 실패 ({}): {}",
                    response.status,
                    response.text()
                )));
            }
            status if !status.is_success() => {
                log::error!("로그인 요청 처리 실패: {}", status);
                return Err(ClientError::api(status, response.text()));
            }
            _ => {}
        }

        let tokens: TokenPair = response.json::<TokenObtainResponse>()?.into();
        self.gateway.session().store_pair(&tokens).await?;

        log::info!(
            "✅ 로그인 성공: {} (access={})",
            credentials.username,
            mask_token(&tokens.access)
        );

        Ok(tokens)
    }

    /// 저장된 토큰을 모두 삭제합니다.
    pub async fn logout(&self) -> ClientResult<()> {
        self.gateway.session().clear().await?;
        log::info!("👋 로그아웃: 세션 토큰 삭제");
        Ok(())
    }

    /// 액세스 토큰이 저장되어 있는지 확인합니다.
    pub async fn is_authenticated(&self) -> ClientResult<bool> {
        self.gateway.session().is_authenticated().await
    }
}
