//! 게이트웨이 요청 옵션

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::errors::{ClientError, ClientResult};
use crate::transport::{MultipartField, RequestBody};

/// 호출자가 지정하는 요청 옵션
///
/// 기본 메서드는 `GET`입니다. 여기서 지정한 헤더는 게이트웨이가 붙이는
/// 인증 헤더보다 우선합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let options = RequestOptions::post().json(&NewLoan::new(1, 2, None))?;
/// let outcome = gateway.request("/loans/", options).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// 헤더를 추가합니다. 같은 이름이 있으면 교체됩니다.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// 값을 JSON 본문으로 직렬화합니다.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ClientResult<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// URL 인코딩 폼 본문
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(pairs));
        self
    }

    /// 구조체를 URL 인코딩 폼 본문으로 직렬화합니다.
    ///
    /// 최상위 필드만 사용하며 `null` 필드는 보내지 않습니다. 문자열은 그대로, 숫자와
    /// 불리언은 문자열 표현으로 보냅니다.
    ///
    /// # Errors
    ///
    /// * `ClientError::SerializationError` - 객체가 아니거나 중첩 값이 있는 경우
    pub fn form_of<T: Serialize + ?Sized>(self, body: &T) -> ClientResult<Self> {
        let serde_json::Value::Object(map) = serde_json::to_value(body)? else {
            return Err(ClientError::SerializationError(
                "폼 본문은 객체여야 합니다".to_string(),
            ));
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(text) => text,
                serde_json::Value::Number(number) => number.to_string(),
                serde_json::Value::Bool(flag) => flag.to_string(),
                nested => {
                    return Err(ClientError::SerializationError(format!(
                        "폼 필드 '{}'에 중첩 값을 보낼 수 없습니다: {}",
                        key, nested
                    )));
                }
            };
            pairs.push((key, value));
        }

        Ok(self.form(pairs))
    }

    /// multipart 본문
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = Some(RequestBody::Multipart(fields));
        self
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::ACCEPT_LANGUAGE;

    #[test]
    fn test_default_is_get_without_body() {
        let options = RequestOptions::default();

        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_json_body_and_header() {
        let options = RequestOptions::patch()
            .header(ACCEPT_LANGUAGE, HeaderValue::from_static("pt-BR"))
            .json(&serde_json::json!({ "quantity": 3 }))
            .unwrap();

        assert_eq!(options.method, Method::PATCH);
        assert_eq!(options.headers.get(ACCEPT_LANGUAGE).unwrap(), "pt-BR");
        assert_eq!(
            options.body,
            Some(RequestBody::Json(serde_json::json!({ "quantity": 3 })))
        );
    }

    #[derive(Serialize)]
    struct Draft {
        title: &'static str,
        quantity: u32,
        on_shelf: bool,
        publisher: Option<&'static str>,
    }

    #[test]
    fn test_form_of_flattens_scalars_and_skips_null() {
        let options = RequestOptions::post()
            .form_of(&Draft {
                title: "Dom Casmurro",
                quantity: 2,
                on_shelf: true,
                publisher: None,
            })
            .unwrap();

        let mut pairs = match options.body {
            Some(RequestBody::Form(pairs)) => pairs,
            other => panic!("Expected form body, got {:?}", other),
        };
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("on_shelf".to_string(), "true".to_string()),
                ("quantity".to_string(), "2".to_string()),
                ("title".to_string(), "Dom Casmurro".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_of_rejects_non_object() {
        assert!(matches!(
            RequestOptions::post().form_of(&vec![1, 2]),
            Err(ClientError::SerializationError(_))
        ));
        assert!(matches!(
            RequestOptions::post().form_of(&serde_json::json!({ "tags": ["a"] })),
            Err(ClientError::SerializationError(_))
        ));
    }
}
