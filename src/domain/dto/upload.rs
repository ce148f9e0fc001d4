//! 일괄 업로드(bulk upload) DTO
//!
//! 파일 내용의 파싱과 검증은 서버가 담당하며, 클라이언트는 확장자로
//! `file_type` 필드 값만 결정합니다.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// 업로드 파일 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFileType {
    Txt,
    Excel,
}

impl UploadFileType {
    /// 파일 확장자로 형식을 판단합니다.
    ///
    /// `.txt` → `Txt`, `.xlsx`/`.xls` → `Excel`, 그 외는 `None` (대소문자 무관)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" => Some(UploadFileType::Txt),
            "xlsx" | "xls" => Some(UploadFileType::Excel),
            _ => None,
        }
    }

    /// multipart `file_type` 필드 값
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFileType::Txt => "txt",
            UploadFileType::Excel => "excel",
        }
    }

    /// 파일 파트의 Content-Type
    pub fn mime_type(&self) -> &'static str {
        match self {
            UploadFileType::Txt => "text/plain",
            UploadFileType::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// 일괄 업로드 결과
///
/// 성공(201)과 실패(400) 모두 같은 형식으로 응답합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUploadResult {
    pub message: String,
    pub created: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}
