//! 도서 API 서비스

use std::path::Path;
use std::sync::Arc;

use super::{bulk_upload_fields, fetch_empty, fetch_json, file_field, list_query};
use crate::domain::dto::{Book, BookPatch, BookSummary, BulkUploadResult, NewBook, Page};
use crate::errors::ClientResult;
use crate::gateway::{AuthGateway, Outcome, RequestOptions};

/// 도서 API
pub struct BookService {
    gateway: Arc<AuthGateway>,
}

impl BookService {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }

    /// 도서 목록 (`GET /books/?page=&search=`)
    ///
    /// `search`는 제목, 저자, ISBN, 분류를 대상으로 서버에서 검색됩니다.
    pub async fn list_books(
        &self,
        search: Option<&str>,
        page: Option<u32>,
    ) -> ClientResult<Outcome<Page<BookSummary>>> {
        let target = format!("/books/{}", list_query(search, page));
        fetch_json(&self.gateway, &target, RequestOptions::get()).await
    }

    pub async fn get_book(&self, id: u64) -> ClientResult<Outcome<Book>> {
        fetch_json(&self.gateway, &format!("/books/{}/", id), RequestOptions::get()).await
    }

    /// 도서 등록
    ///
    /// 도서 엔드포인트는 multipart/폼 본문만 받으므로 JSON이 아닌 폼으로 보냅니다.
    pub async fn create_book(&self, book: &NewBook) -> ClientResult<Outcome<Book>> {
        fetch_json(&self.gateway, "/books/", RequestOptions::post().form_of(book)?).await
    }

    /// 전체 수정 (`PUT`)
    pub async fn update_book(&self, id: u64, book: &NewBook) -> ClientResult<Outcome<Book>> {
        let target = format!("/books/{}/", id);
        fetch_json(&self.gateway, &target, RequestOptions::put().form_of(book)?).await
    }

    /// 부분 수정 (`PATCH`)
    pub async fn partial_update_book(
        &self,
        id: u64,
        patch: &BookPatch,
    ) -> ClientResult<Outcome<Book>> {
        let target = format!("/books/{}/", id);
        fetch_json(&self.gateway, &target, RequestOptions::patch().form_of(patch)?).await
    }

    pub async fn delete_book(&self, id: u64) -> ClientResult<Outcome<()>> {
        fetch_empty(&self.gateway, &format!("/books/{}/", id), RequestOptions::delete()).await
    }

    /// 대출 가능한 재고가 있는 도서 (페이지 없음)
    pub async fn list_available_books(&self) -> ClientResult<Outcome<Vec<BookSummary>>> {
        fetch_json(&self.gateway, "/books/available/", RequestOptions::get()).await
    }

    /// TXT/Excel 파일로 도서를 일괄 등록합니다.
    ///
    /// 파일 형식은 확장자로 판단하며, 내용 검증은 서버가 수행합니다.
    /// 서버가 일부라도 거부하면 400 응답 본문(`BulkUploadResult` 형식)을 담은 `ApiError`가 반환됩니다.
    pub async fn bulk_upload_books(&self, path: &Path) -> ClientResult<Outcome<BulkUploadResult>> {
        let options = RequestOptions::post().multipart(bulk_upload_fields(path)?);
        fetch_json(&self.gateway, "/books/bulk_upload/", options).await
    }

    /// 표지 이미지를 업로드합니다 (`cover_image` 파트).
    pub async fn upload_book_cover(&self, id: u64, path: &Path) -> ClientResult<Outcome<Book>> {
        let field = file_field("cover_image", path, image_mime_type(path))?;
        let target = format!("/books/{}/upload_cover/", id);
        fetch_json(&self.gateway, &target, RequestOptions::post().multipart(vec![field])).await
    }
}

fn image_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
