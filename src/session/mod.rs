//! 토큰 세션 저장소 모듈
//!
//! 액세스/리프레시 토큰 두 값만 보관하는 저장소 추상화입니다.
//! 게이트웨이와 서비스는 전역 상태 대신 [`Session`] 값을 주입받아 사용합니다.
//!
//! # 구현체
//!
//! - [`memory::MemorySessionStore`] - 프로세스 메모리 (테스트 환경 기본값)
//! - [`file::FileSessionStore`] - JSON 파일 (재시작 후에도 로그인 유지)
//!
//! # 에폭(epoch)
//!
//! 저장소는 변경될 때마다 증가하는 카운터를 가집니다. 갱신 직렬화 모드에서
//! 다른 작업이 이미 토큰을 갱신했는지 판단하는 데 사용됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! let session = Session::in_memory();
//! session.store_pair(&TokenPair::new("A1", "R1")).await?;
//!
//! assert!(session.is_authenticated().await?);
//! session.clear().await?;
//! ```

pub mod memory;
pub mod file;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::SessionConfig;
use crate::domain::models::{TokenKey, TokenPair};
use crate::errors::ClientResult;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// 키/값 토큰 저장소
///
/// 동시 쓰기는 조율하지 않으며 마지막 쓰기가 이깁니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 저장된 값을 조회합니다. 없으면 `None`
    async fn get(&self, key: TokenKey) -> ClientResult<Option<String>>;

    /// 값을 저장(덮어쓰기)합니다.
    async fn set(&self, key: TokenKey, value: &str) -> ClientResult<()>;

    /// 값을 삭제합니다. 없는 키의 삭제는 성공으로 처리합니다.
    async fn remove(&self, key: TokenKey) -> ClientResult<()>;

    /// 현재 변경 카운터
    fn epoch(&self) -> u64;
}

/// 토큰 세션 핸들
///
/// 복제 비용이 작으며 모든 복제본이 같은 저장소를 공유합니다.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// 메모리 저장소를 사용하는 세션
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// 실행 환경 설정에 맞는 저장소로 세션을 만듭니다.
    ///
    /// 테스트 환경이면 메모리 저장소, 그 외에는 `LIBRARY_SESSION_FILE` 파일 저장소를 사용합니다.
    pub fn from_config() -> Self {
        if SessionConfig::use_file_store() {
            let path = SessionConfig::store_path();
            log::info!("💾 파일 세션 저장소 사용: {}", path.display());
            Self::new(Arc::new(FileSessionStore::new(path)))
        } else {
            log::info!("🧪 메모리 세션 저장소 사용");
            Self::in_memory()
        }
    }

    pub async fn access_token(&self) -> ClientResult<Option<String>> {
        self.store.get(TokenKey::AccessToken).await
    }

    pub async fn refresh_token(&self) -> ClientResult<Option<String>> {
        self.store.get(TokenKey::RefreshToken).await
    }

    /// 로그인 결과로 받은 토큰 쌍을 저장합니다.
    pub async fn store_pair(&self, pair: &TokenPair) -> ClientResult<()> {
        self.store.set(TokenKey::AccessToken, &pair.access).await?;
        self.store.set(TokenKey::RefreshToken, &pair.refresh).await
    }

    /// 갱신 결과를 저장합니다.
    ///
    /// 액세스 토큰은 항상 덮어쓰고, 리프레시 토큰은 응답에 포함된 경우에만 교체합니다.
    pub async fn store_refreshed(&self, access: &str, refresh: Option<&str>) -> ClientResult<()> {
        self.store.set(TokenKey::AccessToken, access).await?;
        if let Some(refresh) = refresh {
            self.store.set(TokenKey::RefreshToken, refresh).await?;
        }
        Ok(())
    }

    /// 두 토큰을 모두 삭제합니다.
    pub async fn clear(&self) -> ClientResult<()> {
        for key in TokenKey::ALL {
            self.store.remove(key).await?;
        }
        Ok(())
    }

    /// 액세스 토큰이 저장되어 있는지 확인합니다.
    ///
    /// 토큰의 유효성은 확인하지 않습니다.
    pub async fn is_authenticated(&self) -> ClientResult<bool> {
        Ok(self.access_token().await?.is_some())
    }

    pub fn epoch(&self) -> u64 {
        self.store.epoch()
    }
}
