//! 세션 토큰 모델과 인증 헤더
//!
//! 토큰은 불투명한 문자열로만 다룹니다. 클라이언트는 JWT 클레임을 해석하거나
//! 검증하지 않으며, 만료 여부는 서버의 401 응답으로만 판단합니다.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult};

/// 액세스/리프레시 토큰 쌍
///
/// 로그인 성공 시 저장되고, 갱신 성공 시 덮어써지며,
/// 로그아웃이나 복구 불가능한 갱신 실패 시 삭제됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// 세션 저장소의 키
///
/// 저장소에는 이 두 키 외의 값은 보관하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    AccessToken,
    RefreshToken,
}

impl TokenKey {
    /// 모든 키
    pub const ALL: [TokenKey; 2] = [TokenKey::AccessToken, TokenKey::RefreshToken];

    /// 저장소에 기록되는 키 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKey::AccessToken => "access_token",
            TokenKey::RefreshToken => "refresh_token",
        }
    }
}

/// 저장된 액세스 토큰으로 인증 헤더를 만듭니다.
///
/// 토큰이 있으면 `Authorization: Bearer <access>` 하나를, 없으면 빈 맵을 반환합니다.
/// 요청마다 새로 계산하며 캐시하지 않습니다.
///
/// # Errors
///
/// * `ClientError::ValidationError` - 토큰에 헤더로 쓸 수 없는 문자가 있는 경우
pub fn auth_headers(access_token: Option<&str>) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    if let Some(token) = access_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            ClientError::ValidationError(format!("액세스 토큰을 헤더로 변환할 수 없습니다: {}", e))
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
