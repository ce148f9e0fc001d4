//! # 문자열 유틸리티
//!
//! URL 조합, 쿼리 문자열 생성, 로그용 토큰 마스킹 등
//! 클라이언트 전역에서 사용하는 문자열 처리 함수들입니다.

/// 요청 대상 URL을 절대 URL로 변환합니다.
///
/// `http://` 또는 `https://`로 시작하는 값은 그대로 사용하고,
/// 그 외에는 기본 URL 뒤에 `/` 하나로 이어 붙입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(join_url("http://h/api", "/books/"), "http://h/api/books/");
/// assert_eq!(join_url("http://h/api/", "books/"), "http://h/api/books/");
/// assert_eq!(join_url("http://h/api", "https://other/x"), "https://other/x");
/// ```
pub fn join_url(base_url: &str, target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        return target.to_string();
    }

    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}

/// 키/값 쌍으로 URL 쿼리 문자열을 만듭니다.
///
/// 값이 `None`인 항목은 건너뛰며, 키와 값은 퍼센트 인코딩됩니다.
/// 남는 항목이 없으면 빈 문자열을, 있으면 `?`로 시작하는 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// let query = build_query(&[("page", Some("2".to_string())), ("search", Some("Dom Casmurro".to_string()))]);
/// assert_eq!(query, "?page=2&search=Dom%20Casmurro");
/// ```
pub fn build_query(params: &[(&str, Option<String>)]) -> String {
    let pairs = params
        .iter()
        .filter_map(|(k, v)| {
            v.as_ref()
                .map(|v| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        })
        .collect::<Vec<_>>();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// 로그 출력용으로 토큰을 가립니다.
///
/// 앞 6자만 남기고 나머지는 `…`으로 대체합니다. 6자 이하의 토큰은 전부 가립니다.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    if token.chars().count() <= 6 {
        "******".to_string()
    } else {
        format!("{}…", visible)
    }
}
