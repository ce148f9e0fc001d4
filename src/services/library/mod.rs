//! 도서관 REST API 서비스
//!
//! | 서비스 | 엔드포인트 |
//! |--------|------------|
//! | [`BookService`] | `/books/`, `/books/available/`, `/books/bulk_upload/`, `/books/{id}/upload_cover/` |
//! | [`LibraryUserService`] | `/users/`, `/users/active/`, `/users/bulk_upload/` |
//! | [`LoanService`] | `/loans/`, `/loans/active/`, `/loans/overdue/`, `/loans/{id}/return_loan/` |
//!
//! 모든 호출은 게이트웨이를 거칩니다. 최종 응답이 2xx가 아니면 서버 본문을 담은
//! `ClientError::ApiError`를, 세션이 만료되어 로그인 화면으로 보낸 경우 `Outcome::Redirected`를 반환합니다.

pub mod book_service;
pub mod user_service;
pub mod loan_service;

pub use book_service::BookService;
pub use loan_service::LoanService;
pub use user_service::LibraryUserService;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::dto::UploadFileType;
use crate::errors::{ClientError, ClientResult};
use crate::gateway::{AuthGateway, Outcome, RequestOptions};
use crate::transport::MultipartField;
use crate::utils::string_utils::build_query;

/// 요청을 보내고 2xx 응답 본문을 `T`로 해석합니다.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    gateway: &AuthGateway,
    target: &str,
    options: RequestOptions,
) -> ClientResult<Outcome<T>> {
    gateway
        .request(target, options)
        .await?
        .try_map(|response| response.error_for_status()?.json())
}

/// 본문이 없는 응답(`204 No Content` 등)을 기대하는 요청
pub(crate) async fn fetch_empty(
    gateway: &AuthGateway,
    target: &str,
    options: RequestOptions,
) -> ClientResult<Outcome<()>> {
    gateway
        .request(target, options)
        .await?
        .try_map(|response| response.error_for_status().map(|_| ()))
}

/// 목록 조회용 `?page=&search=` 쿼리
pub(crate) fn list_query(search: Option<&str>, page: Option<u32>) -> String {
    build_query(&[
        ("page", page.map(|p| p.to_string())),
        ("search", search.map(str::to_string)),
    ])
}

/// 로컬 파일을 읽어 multipart 파일 파트를 만듭니다.
pub(crate) fn file_field(name: &str, path: &Path, mime_type: &str) -> ClientResult<MultipartField> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    Ok(MultipartField::File {
        name: name.to_string(),
        file_name,
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// 일괄 업로드 본문 (`file`, `file_type`)
///
/// # Errors
///
/// * `ClientError::ValidationError` - `.txt`, `.xlsx`, `.xls` 이외의 확장자
/// * `ClientError::IoError` - 파일 읽기 실패
pub(crate) fn bulk_upload_fields(path: &Path) -> ClientResult<Vec<MultipartField>> {
    let file_type = UploadFileType::from_path(path).ok_or_else(|| {
        ClientError::ValidationError(format!(
            "지원하지 않는 업로드 파일 형식입니다 (.txt, .xlsx, .xls): {}",
            path.display()
        ))
    })?;

    Ok(vec![
        file_field("file", path, file_type.mime_type())?,
        MultipartField::text("file_type", file_type.as_str()),
    ])
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::config::GatewaySettings;
    use crate::domain::models::TokenPair;
    use crate::gateway::{AuthGateway, RecordingNavigator};
    use crate::session::Session;
    use crate::transport::mock::ScriptedTransport;

    /// 로그인된 세션과 스크립트 전송으로 게이트웨이를 만듭니다.
    pub async fn logged_in_gateway(
        transport: ScriptedTransport,
    ) -> (Arc<AuthGateway>, Arc<ScriptedTransport>) {
        let session = Session::in_memory();
        session.store_pair(&TokenPair::new("A1", "R1")).await.unwrap();

        let transport = Arc::new(transport);
        let gateway = AuthGateway::new(
            GatewaySettings::with_base_url("http://api.test/api"),
            session,
            transport.clone(),
            Arc::new(RecordingNavigator::new()),
        );
        (Arc::new(gateway), transport)
    }

    /// 임시 디렉터리에 업로드용 파일을 만듭니다.
    pub fn temp_file(name: &str, content: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("library_client_upload_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() {
        assert_eq!(list_query(None, None), "");
        assert_eq!(list_query(Some("Machado de Assis"), Some(2)), "?page=2&search=Machado%20de%20Assis");
    }

    #[test]
    fn test_bulk_upload_fields() {
        let path = test_support::temp_file("books.txt", b"title|author|isbn\n");

        let fields = bulk_upload_fields(&path).unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name(), "file");
        match &fields[0] {
            MultipartField::File { file_name, bytes, mime_type, .. } => {
                assert_eq!(file_name, "books.txt");
                assert_eq!(bytes, b"title|author|isbn\n");
                assert_eq!(mime_type, "text/plain");
            }
            other => panic!("Expected file part, got {:?}", other),
        }
        assert_eq!(fields[1], MultipartField::text("file_type", "txt"));
    }

    #[test]
    fn test_bulk_upload_rejects_unknown_extension() {
        let path = test_support::temp_file("books.csv", b"a,b\n");

        assert!(matches!(
            bulk_upload_fields(&path),
            Err(ClientError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_upload_file_is_io_error() {
        let path = std::env::temp_dir().join("library_client_missing_upload.xlsx");

        assert!(matches!(
            bulk_upload_fields(&path),
            Err(ClientError::IoError(_))
        ));
    }
}
