//! 도서 DTO
//!
//! `BookSerializer`(상세/생성/수정)와 `BookListSerializer`(목록) 형식을 따릅니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 도서 상세 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub publisher: String,
    pub publication_year: Option<u32>,
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    pub available_quantity: u32,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 도서 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub category: String,
    pub available_quantity: u32,
    pub is_available: bool,
    pub cover_image: Option<String>,
}

/// 도서 생성/전체 수정 요청
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u32,
}

/// 도서 부분 수정 요청 (`PATCH`)
///
/// 값이 있는 필드만 전송됩니다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
}
