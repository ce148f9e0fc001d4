//! 도서관 이용자 DTO
//!
//! `LibraryUserSerializer`와 `LibraryUserListSerializer` 형식을 따릅니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 이용자 상세 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryUser {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub registration_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 이용자 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryUserSummary {
    pub id: u64,
    pub full_name: String,
    pub registration_number: String,
    pub email: String,
    pub is_active: bool,
    pub can_borrow: bool,
}

/// 이용자 생성/전체 수정 요청
#[derive(Debug, Clone, Serialize)]
pub struct NewLibraryUser {
    pub full_name: String,
    pub email: String,
    pub registration_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
