use serde::{Deserialize, Serialize};

/// 페이지 번호 기반 목록 응답 (`{count, next, previous, results}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// 다음 페이지가 있는지 확인합니다.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
