//! 도서관 이용자 API 서비스

use std::path::Path;
use std::sync::Arc;

use super::{bulk_upload_fields, fetch_empty, fetch_json, list_query};
use crate::domain::dto::{BulkUploadResult, LibraryUser, LibraryUserSummary, NewLibraryUser, Page};
use crate::errors::ClientResult;
use crate::gateway::{AuthGateway, Outcome, RequestOptions};

/// 이용자 API
pub struct LibraryUserService {
    gateway: Arc<AuthGateway>,
}

impl LibraryUserService {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }

    /// 이용자 목록 (`GET /users/?page=&search=`)
    pub async fn list_users(
        &self,
        search: Option<&str>,
        page: Option<u32>,
    ) -> ClientResult<Outcome<Page<LibraryUserSummary>>> {
        let target = format!("/users/{}", list_query(search, page));
        fetch_json(&self.gateway, &target, RequestOptions::get()).await
    }

    pub async fn get_user(&self, id: u64) -> ClientResult<Outcome<LibraryUser>> {
        fetch_json(&self.gateway, &format!("/users/{}/", id), RequestOptions::get()).await
    }

    pub async fn create_user(&self, user: &NewLibraryUser) -> ClientResult<Outcome<LibraryUser>> {
        fetch_json(&self.gateway, "/users/", RequestOptions::post().json(user)?).await
    }

    pub async fn update_user(
        &self,
        id: u64,
        user: &NewLibraryUser,
    ) -> ClientResult<Outcome<LibraryUser>> {
        let target = format!("/users/{}/", id);
        fetch_json(&self.gateway, &target, RequestOptions::put().json(user)?).await
    }

    pub async fn delete_user(&self, id: u64) -> ClientResult<Outcome<()>> {
        fetch_empty(&self.gateway, &format!("/users/{}/", id), RequestOptions::delete()).await
    }

    /// 대출 가능한 활성 이용자 (페이지 없음)
    pub async fn list_active_users(&self) -> ClientResult<Outcome<Vec<LibraryUserSummary>>> {
        fetch_json(&self.gateway, "/users/active/", RequestOptions::get()).await
    }

    /// TXT/Excel 파일로 이용자를 일괄 등록합니다.
    pub async fn bulk_upload_users(&self, path: &Path) -> ClientResult<Outcome<BulkUploadResult>> {
        let options = RequestOptions::post().multipart(bulk_upload_fields(path)?);
        fetch_json(&self.gateway, "/users/bulk_upload/", options).await
    }
}
