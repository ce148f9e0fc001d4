//! 게이트웨이 요청 상태 머신
//!
//! ```text
//! Initial → Requesting → Success
//!                     └→ Unauthorized → Refreshing → RefreshedRetry → Success
//!                                                 └→ RefreshFailed
//! ```
//!
//! 다음 상태는 [`GatewayState::on`]이 현재 상태와 이벤트만으로 결정합니다.
//! 한 번의 호출에서 같은 상태를 두 번 지나지 않으므로 네트워크 요청은 최대 두 번
//! (원 요청과 재시도 1회)입니다.

use std::fmt;

use reqwest::StatusCode;

/// 게이트웨이 호출 한 번의 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayState {
    Initial,
    Requesting,
    Unauthorized,
    Refreshing,
    RefreshedRetry,
    RefreshFailed,
    Success,
}

/// 상태 전이를 일으키는 사건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEvent {
    /// 인증 헤더를 붙여 원 요청을 보냄
    Dispatched,
    /// 원 요청 또는 재시도 요청의 응답 수신
    Responded(StatusCode),
    /// 토큰 갱신 시작
    RefreshStarted,
    /// 갱신 성공 (새 토큰 저장 또는 다른 요청이 갱신한 토큰 재사용)
    Refreshed,
    /// 갱신 실패
    RefreshRejected,
}

impl GatewayState {
    /// 전이 함수. 허용되지 않는 (상태, 이벤트) 조합이면 `None`
    ///
    /// 401 응답만 갱신 경로로 들어가며, 재시도 응답은 상태 코드와 관계없이 `Success`입니다.
    pub fn on(self, event: GatewayEvent) -> Option<GatewayState> {
        use GatewayEvent as E;
        use GatewayState::*;

        match (self, event) {
            (Initial, E::Dispatched) => Some(Requesting),
            (Requesting, E::Responded(status)) if status == StatusCode::UNAUTHORIZED => {
                Some(Unauthorized)
            }
            (Requesting, E::Responded(_)) => Some(Success),
            (Unauthorized, E::RefreshStarted) => Some(Refreshing),
            (Refreshing, E::Refreshed) => Some(RefreshedRetry),
            (Refreshing, E::RefreshRejected) => Some(RefreshFailed),
            (RefreshedRetry, E::Responded(_)) => Some(Success),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GatewayState::Initial => "initial",
            GatewayState::Requesting => "requesting",
            GatewayState::Unauthorized => "unauthorized",
            GatewayState::Refreshing => "refreshing",
            GatewayState::RefreshedRetry => "refreshed_retry",
            GatewayState::RefreshFailed => "refresh_failed",
            GatewayState::Success => "success",
        };
        f.write_str(name)
    }
}

/// 호출 한 번 동안의 상태 추적기
#[derive(Debug, Clone)]
pub struct StateTrace {
    current: GatewayState,
    dispatches: usize,
}

impl StateTrace {
    pub fn new() -> Self {
        Self {
            current: GatewayState::Initial,
            dispatches: 0,
        }
    }

    pub fn current(&self) -> GatewayState {
        self.current
    }

    /// 이벤트를 적용하고 새 상태를 반환합니다.
    ///
    /// 허용되지 않는 이벤트는 디버그 빌드에서 패닉이며, 릴리스 빌드에서는 상태를 바꾸지 않습니다.
    pub fn apply(&mut self, event: GatewayEvent) -> GatewayState {
        let Some(next) = self.current.on(event) else {
            debug_assert!(false, "invalid gateway event {:?} in state {}", event, self.current);
            log::error!("잘못된 게이트웨이 이벤트 {:?} (상태: {})", event, self.current);
            return self.current;
        };

        log::trace!("gateway state {} → {}", self.current, next);
        if matches!(next, GatewayState::Requesting | GatewayState::RefreshedRetry) {
            self.dispatches += 1;
        }
        self.current = next;
        next
    }

    /// 지금까지 네트워크로 보낸 요청 수
    pub fn dispatches(&self) -> usize {
        self.dispatches
    }
}

impl Default for StateTrace {
    fn default() -> Self {
        Self::new()
    }
}
