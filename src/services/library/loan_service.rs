//! 대출 API 서비스

use std::sync::Arc;

use chrono::NaiveDate;

use super::{fetch_json, list_query};
use crate::domain::dto::{Loan, LoanDetail, NewLoan, Page, ReturnLoanResponse};
use crate::errors::ClientResult;
use crate::gateway::{AuthGateway, Outcome, RequestOptions};

/// 대출 API
///
/// 반납 기한 계산과 재고 증감은 서버가 처리합니다.
pub struct LoanService {
    gateway: Arc<AuthGateway>,
}

impl LoanService {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }

    /// 대출 목록 (`GET /loans/?page=`)
    pub async fn list_loans(&self, page: Option<u32>) -> ClientResult<Outcome<Page<LoanDetail>>> {
        let target = format!("/loans/{}", list_query(None, page));
        fetch_json(&self.gateway, &target, RequestOptions::get()).await
    }

    pub async fn get_loan(&self, id: u64) -> ClientResult<Outcome<LoanDetail>> {
        fetch_json(&self.gateway, &format!("/loans/{}/", id), RequestOptions::get()).await
    }

    /// 대출을 등록합니다.
    ///
    /// # Arguments
    ///
    /// * `book_id` - 도서 ID
    /// * `user_id` - 이용자 ID
    /// * `loan_date` - 대출일. `None`이면 오늘
    pub async fn create_loan(
        &self,
        book_id: u64,
        user_id: u64,
        loan_date: Option<NaiveDate>,
    ) -> ClientResult<Outcome<Loan>> {
        let body = NewLoan::new(book_id, user_id, loan_date);
        fetch_json(&self.gateway, "/loans/", RequestOptions::post().json(&body)?).await
    }

    /// 반납되지 않은 대출 (페이지 없음)
    pub async fn list_active_loans(&self) -> ClientResult<Outcome<Vec<LoanDetail>>> {
        fetch_json(&self.gateway, "/loans/active/", RequestOptions::get()).await
    }

    /// 반납 기한이 지난 대출 (페이지 없음)
    pub async fn list_overdue_loans(&self) -> ClientResult<Outcome<Vec<LoanDetail>>> {
        fetch_json(&self.gateway, "/loans/overdue/", RequestOptions::get()).await
    }

    /// 반납 처리합니다. 이미 반납된 대출이면 서버가 400으로 응답합니다.
    pub async fn return_loan(&self, id: u64) -> ClientResult<Outcome<ReturnLoanResponse>> {
        let target = format!("/loans/{}/return_loan/", id);
        fetch_json(&self.gateway, &target, RequestOptions::post()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::LoanStatus;
    use crate::services::library::test_support::logged_in_gateway;
    use crate::transport::RequestBody;
    use crate::transport::mock::{ScriptedTransport, json_reply};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    fn loan_detail_json(status: &str) -> serde_json::Value {
        let overdue = status == "overdue";
        let days_overdue = if overdue { 3 } else { 0 };
        json!({
            "id": 11,
            "book": {
                "id": 1, "title": "Dom Casmurro", "author": "Machado de Assis",
                "isbn": "9788535908770", "category": "Romance",
                "available_quantity": 1, "is_available": true, "cover_image": null
            },
            "user": {
                "id": 5, "full_name": "Capitu", "registration_number": "REG001",
                "email": "capitu@example.com", "is_active": true, "can_borrow": true
            },
            "loan_date": "2025-05-01",
            "due_date": "2025-05-15",
            "return_date": null,
            "status": status,
            "notes": "",
            "is_overdue": overdue,
            "days_overdue": days_overdue,
            "created_at": "2025-05-01T09:00:00Z",
            "updated_at": "2025-05-01T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_create_loan_sends_ids_and_date() {
        let (gateway, transport) = logged_in_gateway(ScriptedTransport::new(|_| {
            json_reply(
                StatusCode::CREATED,
                json!({
                    "id": 11, "book": 1, "user": 5,
                    "loan_date": "2025-05-01", "due_date": "2025-05-15", "return_date": null,
                    "status": "active", "notes": "",
                    "created_at": "2025-05-01T09:00:00Z", "updated_at": "2025-05-01T09:00:00Z"
                }),
            )
        }))
        .await;

        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let loan = LoanService::new(gateway)
            .create_loan(1, 5, Some(date))
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.due_date, NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(
            transport.requests()[0].body,
            Some(RequestBody::Json(json!({ "book": 1, "user": 5, "loan_date": "2025-05-01" })))
        );
    }

    #[tokio::test]
    async fn test_list_overdue_loans() {
        let (gateway, transport) = logged_in_gateway(ScriptedTransport::new(|_| {
            json_reply(StatusCode::OK, json!([loan_detail_json("overdue")]))
        }))
        .await;

        let loans = LoanService::new(gateway)
            .list_overdue_loans()
            .await
            .unwrap()
            .success()
            .unwrap();

        assert!(loans[0].is_overdue);
        assert_eq!(loans[0].days_overdue, 3);
        assert_eq!(loans[0].book.title, "Dom Casmurro");
        assert_eq!(transport.requests()[0].url, "http://api.test/api/loans/overdue/");
    }

    #[tokio::test]
    async fn test_return_loan() {
        let (gateway, transport) = logged_in_gateway(ScriptedTransport::new(|_| {
            let mut loan = loan_detail_json("returned");
            loan["return_date"] = json!("2025-05-10");
            json_reply(
                StatusCode::OK,
                json!({ "message": "Loan marked as returned successfully", "loan": loan }),
            )
        }))
        .await;

        let returned = LoanService::new(gateway)
            .return_loan(11)
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(returned.loan.status, LoanStatus::Returned);
        assert_eq!(
            returned.loan.return_date,
            NaiveDate::from_ymd_opt(2025, 5, 10)
        );
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, "http://api.test/api/loans/11/return_loan/");
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_already_returned_is_api_error() {
        let (gateway, _) = logged_in_gateway(ScriptedTransport::new(|_| {
            json_reply(
                StatusCode::BAD_REQUEST,
                json!({ "message": "This loan has already been returned" }),
            )
        }))
        .await;

        let result = LoanService::new(gateway).return_loan(11).await;

        assert_eq!(
            result.err().and_then(|e| e.status()),
            Some(StatusCode::BAD_REQUEST)
        );
    }

    #[tokio::test]
    async fn test_expired_session_redirects_typed_call() {
        let (gateway, _) = logged_in_gateway(ScriptedTransport::new(|request| {
            if request.url.ends_with("/auth/token/refresh/") {
                json_reply(StatusCode::UNAUTHORIZED, json!({ "detail": "Token is blacklisted" }))
            } else {
                json_reply(StatusCode::UNAUTHORIZED, json!({ "detail": "Given token not valid" }))
            }
        }))
        .await;

        let outcome = LoanService::new(gateway.clone()).list_active_loans().await.unwrap();

        assert!(outcome.is_redirected());
        assert!(!gateway.session().is_authenticated().await.unwrap());
    }
}
