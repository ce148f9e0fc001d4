//! # 인증 요청 게이트웨이
//!
//! 모든 보호된 API 호출이 지나가는 단일 진입점입니다.
//!
//! - 저장된 액세스 토큰으로 `Authorization: Bearer` 헤더를 붙입니다.
//! - 401 응답을 받으면 토큰을 한 번 갱신하고 같은 요청을 한 번만 재시도합니다.
//! - 갱신에 실패하면 토큰을 지우고 로그인 화면으로 보낸 뒤 [`Outcome::Redirected`]를 반환합니다.
//!
//! 401 이외의 상태 코드는 손대지 않고 그대로 돌려주며, 네트워크 실패는
//! `ClientError::TransportError`로 전파됩니다.
//!
//! ## 구성 요소
//!
//! - [`auth_gateway`] - 요청 파이프라인
//! - [`refresh`] - 갱신 프로토콜과 갱신 직렬화
//! - [`state`] - 호출 단위 상태 머신
//! - [`navigator`] - 로그인 화면 이동 훅
//! - [`options`] - 요청 옵션 빌더

pub mod auth_gateway;
pub mod navigator;
pub mod options;
pub mod refresh;
pub mod state;

pub use auth_gateway::AuthGateway;
pub use navigator::{LogNavigator, LoginNavigator, RecordingNavigator};
pub use options::RequestOptions;
pub use refresh::{RefreshFailure, RefreshOutcome, TokenRefresher};
pub use state::{GatewayEvent, GatewayState, StateTrace};

use crate::errors::ClientResult;

/// 게이트웨이 호출 결과
///
/// 갱신 실패로 로그인 화면으로 보낸 경우는 에러가 아니라 `Redirected`로 구분됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 최종 응답 (상태 코드와 무관)
    Success(T),
    /// 세션이 만료되어 로그인 화면으로 이동함
    Redirected,
}

impl<T> Outcome<T> {
    pub fn is_redirected(&self) -> bool {
        matches!(self, Outcome::Redirected)
    }

    /// 성공 값을 꺼냅니다. 리다이렉트면 `None`
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Redirected => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Redirected => Outcome::Redirected,
        }
    }

    /// 실패할 수 있는 변환을 적용합니다. 리다이렉트는 그대로 전달됩니다.
    pub fn try_map<U, F>(self, f: F) -> ClientResult<Outcome<U>>
    where
        F: FnOnce(T) -> ClientResult<U>,
    {
        match self {
            Outcome::Success(value) => Ok(Outcome::Success(f(value)?)),
            Outcome::Redirected => Ok(Outcome::Redirected),
        }
    }
}
