//! 대출 DTO
//!
//! 목록/상세는 `LoanDetailSerializer`(도서·이용자 중첩), 생성 응답은
//! `LoanSerializer`(도서·이용자 ID) 형식입니다. 반납 기한과 연체 일수는
//! 서버가 계산한 값을 그대로 받습니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::books::BookSummary;
use super::users::LibraryUserSummary;

/// 대출 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
    Overdue,
    Renewed,
}

/// 대출 생성 응답 (도서/이용자는 ID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: u64,
    pub book: u64,
    pub user: u64,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: LoanStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 대출 상세/목록 항목 (도서/이용자 중첩)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDetail {
    pub id: u64,
    pub book: BookSummary,
    pub user: LibraryUserSummary,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: LoanStatus,
    #[serde(default)]
    pub notes: String,
    pub is_overdue: bool,
    pub days_overdue: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 대출 생성 요청
#[derive(Debug, Clone, Serialize)]
pub struct NewLoan {
    pub book: u64,
    pub user: u64,
    pub loan_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewLoan {
    /// 대출일을 지정하지 않으면 오늘(UTC) 날짜를 사용합니다.
    pub fn new(book: u64, user: u64, loan_date: Option<NaiveDate>) -> Self {
        Self {
            book,
            user,
            loan_date: loan_date.unwrap_or_else(|| Utc::now().date_naive()),
            due_date: None,
            notes: None,
        }
    }
}

/// 반납 처리 응답 (`POST /loans/{id}/return_loan/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnLoanResponse {
    pub message: String,
    pub loan: LoanDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loan_wire_format() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let body = serde_json::to_value(NewLoan::new(1, 2, Some(date))).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "book": 1, "user": 2, "loan_date": "2025-05-10" })
        );
    }

    #[test]
    fn test_new_loan_defaults_to_today() {
        let loan = NewLoan::new(1, 2, None);

        assert_eq!(loan.loan_date, Utc::now().date_naive());
    }

    #[test]
    fn test_loan_status_lowercase() {
        let status: LoanStatus = serde_json::from_str(r#""overdue""#).unwrap();

        assert_eq!(status, LoanStatus::Overdue);
        assert_eq!(serde_json::to_string(&LoanStatus::Returned).unwrap(), r#""returned""#);
    }
}
