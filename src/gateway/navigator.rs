//! 로그인 화면 이동 훅
//!
//! 토큰 갱신에 실패하면 게이트웨이가 저장소를 비운 뒤 로그인 화면 경로로
//! 내비게이터를 호출합니다. 실제 화면 전환은 호출하는 UI 계층의 몫입니다.

use std::sync::Mutex;

/// 로그인 화면으로 이동시키는 부수 효과
pub trait LoginNavigator: Send + Sync {
    fn redirect_to_login(&self, login_path: &str);
}

/// 이동 요청을 로그로만 남기는 기본 내비게이터
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl LoginNavigator for LogNavigator {
    fn redirect_to_login(&self, login_path: &str) {
        log::warn!("🔐 세션이 만료되었습니다. 로그인 화면으로 이동: {}", login_path);
    }
}

/// 이동 요청 경로를 기록하는 내비게이터
///
/// CLI처럼 화면이 없는 호출자가 리다이렉트 여부를 나중에 확인할 때 사용합니다.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 기록된 이동 경로
    pub fn redirects(&self) -> Vec<String> {
        self.redirects
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl LoginNavigator for RecordingNavigator {
    fn redirect_to_login(&self, login_path: &str) {
        if let Ok(mut redirects) = self.redirects.lock() {
            redirects.push(login_path.to_string());
        }
    }
}
