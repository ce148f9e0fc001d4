use serde::Serialize;
use validator::Validate;

/// 로그인(토큰 발급) 요청 DTO
///
/// `POST /auth/token/` 본문으로 전송됩니다.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명은 필수입니다"))]
    pub username: String,
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 토큰 갱신 요청 DTO
///
/// `POST /auth/token/refresh/` 본문으로 전송됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}
