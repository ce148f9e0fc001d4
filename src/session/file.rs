//! JSON 파일 기반 토큰 저장소
//!
//! 파일 형식:
//!
//! ```json
//! { "access_token": "...", "refresh_token": "..." }
//! ```
//!
//! 파일이 없으면 빈 세션으로 보고, 내용이 손상된 경우에도 빈 세션으로 처리한 뒤
//! 파일을 삭제합니다. 두 토큰이 모두 지워지면 파일도 삭제됩니다.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::SessionStore;
use crate::domain::models::TokenKey;
use crate::errors::{ClientResult, ErrorContext};

/// 파일 내용. 키 이름은 [`TokenKey::as_str`]
type SessionFile = BTreeMap<String, String>;

/// 파일 토큰 저장소
///
/// 읽기-수정-쓰기 구간은 내부 뮤텍스로 직렬화됩니다.
pub struct FileSessionStore {
    path: PathBuf,
    io_lock: Mutex<()>,
    epoch: AtomicU64,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ClientResult<SessionFile> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionFile::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("세션 파일 읽기 실패 ({})", self.path.display()));
            }
        };

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(mut file) => {
                file.retain(|key, _| TokenKey::ALL.iter().any(|k| k.as_str() == key));
                Ok(file)
            }
            Err(e) => {
                log::warn!(
                    "⚠️ 손상된 세션 파일을 삭제합니다 ({}): {}",
                    self.path.display(),
                    e
                );
                if let Err(e) = fs::remove_file(&self.path).await {
                    log::error!("세션 파일 삭제 실패: {}", e);
                }
                Ok(SessionFile::new())
            }
        }
    }

    async fn save(&self, file: &SessionFile) -> ClientResult<()> {
        if file.is_empty() {
            return match fs::remove_file(&self.path).await {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e)
                    .with_context(|| format!("세션 파일 삭제 실패 ({})", self.path.display())),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context("세션 디렉터리 생성 실패")?;
        }

        let json = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("세션 파일 쓰기 실패 ({})", self.path.display()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: TokenKey) -> ClientResult<Option<String>> {
        let _guard = self.io_lock.lock().await;
        let mut file = self.load().await?;
        Ok(file.remove(key.as_str()))
    }

    async fn set(&self, key: TokenKey, value: &str) -> ClientResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut file = self.load().await?;
        file.insert(key.as_str().to_string(), value.to_string());
        self.save(&file).await?;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: TokenKey) -> ClientResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut file = self.load().await?;
        if file.remove(key.as_str()).is_some() {
            self.save(&file).await?;
            self.epoch.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn temp_session_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "library_client_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std_fs::remove_dir_all(&dir);
        dir.join("session.json")
    }

    #[tokio::test]
    async fn test_values_survive_new_store_instance() {
        let path = temp_session_path("persist");

        let store = FileSessionStore::new(&path);
        store.set(TokenKey::AccessToken, "A1").await.unwrap();
        store.set(TokenKey::RefreshToken, "R1").await.unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            reopened.get(TokenKey::AccessToken).await.unwrap().as_deref(),
            Some("A1")
        );
        assert_eq!(
            reopened.get(TokenKey::RefreshToken).await.unwrap().as_deref(),
            Some("R1")
        );

        let raw: serde_json::Value =
            serde_json::from_str(&std_fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["access_token"], "A1");
        assert_eq!(raw["refresh_token"], "R1");
    }

    #[tokio::test]
    async fn test_clearing_both_keys_removes_file() {
        let path = temp_session_path("clear");
        let store = FileSessionStore::new(&path);
        store.set(TokenKey::AccessToken, "A1").await.unwrap();
        store.set(TokenKey::RefreshToken, "R1").await.unwrap();

        store.remove(TokenKey::AccessToken).await.unwrap();
        assert!(path.exists());

        store.remove(TokenKey::RefreshToken).await.unwrap();
        assert!(!path.exists());
        assert_eq!(store.epoch(), 4);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_treated_as_empty() {
        let path = temp_session_path("corrupt");
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::new(&path);

        assert_eq!(store.get(TokenKey::AccessToken).await.unwrap(), None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let path = temp_session_path("missing");
        let store = FileSessionStore::new(&path);

        assert_eq!(store.get(TokenKey::RefreshToken).await.unwrap(), None);
        store.remove(TokenKey::RefreshToken).await.unwrap();
        assert_eq!(store.epoch(), 0);
    }

    #[tokio::test]
    async fn test_keys_are_written_under_token_key_names() {
        let path = temp_session_path("keys");
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(&path, r#"{"refresh_token":"R0","theme":"dark"}"#).unwrap();

        let store = FileSessionStore::new(&path);
        store.set(TokenKey::AccessToken, "A1").await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std_fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "access_token": "A1",
                "refresh_token": "R0"
            })
        );
    }
}
