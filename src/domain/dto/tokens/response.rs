use serde::Deserialize;

use crate::domain::models::TokenPair;

/// 로그인 응답 DTO (`{access, refresh}`)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenObtainResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenObtainResponse> for TokenPair {
    fn from(response: TokenObtainResponse) -> Self {
        TokenPair::new(response.access, response.refresh)
    }
}

/// 토큰 갱신 응답 DTO (`{access, refresh?}`)
///
/// 리프레시 토큰 교체(rotation)는 응답마다 선택적이므로 `refresh`가 없을 수 있습니다.
/// `access`가 빠진 응답은 갱신 실패로 취급하기 위해 역시 `Option`으로 받습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}
