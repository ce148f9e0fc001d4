//! 통합 테스트용 도서관 API 스텁 서버
//!
//! `127.0.0.1`의 임의 포트에 actix-web 서버를 띄우고, 토큰 발급/갱신과
//! 도서 목록 엔드포인트만 흉내 냅니다.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;

use library_client::config::{GatewaySettings, RefreshMode};
use library_client::gateway::{AuthGateway, RecordingNavigator};
use library_client::session::Session;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "admin123";

/// 스텁 서버 상태
pub struct StubState {
    /// 현재 유효한 액세스 토큰
    valid_access: Mutex<String>,
    /// 현재 유효한 리프레시 토큰
    valid_refresh: Mutex<String>,
    /// 갱신 시 리프레시 토큰도 교체할지 여부
    rotate_refresh: AtomicBool,
    issued: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub book_calls: AtomicUsize,
    pub book_authorizations: Mutex<Vec<Option<String>>>,
    /// 보호된 엔드포인트 응답 지연 (ms)
    delay_ms: AtomicUsize,
}

impl StubState {
    fn new() -> Self {
        Self {
            valid_access: Mutex::new("A1".to_string()),
            valid_refresh: Mutex::new("R1".to_string()),
            rotate_refresh: AtomicBool::new(false),
            issued: AtomicUsize::new(1),
            refresh_calls: AtomicUsize::new(0),
            book_calls: AtomicUsize::new(0),
            book_authorizations: Mutex::new(Vec::new()),
            delay_ms: AtomicUsize::new(0),
        }
    }

    /// 현재 액세스 토큰을 만료시킵니다. 리프레시 토큰은 계속 유효합니다.
    pub fn expire_access(&self) {
        *self.valid_access.lock().unwrap() = "expired".to_string();
    }

    /// 리프레시 토큰까지 폐기합니다.
    pub fn revoke_refresh(&self) {
        self.expire_access();
        *self.valid_refresh.lock().unwrap() = "revoked".to_string();
    }

    pub fn rotate_refresh_tokens(&self) {
        self.rotate_refresh.store(true, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn book_calls(&self) -> usize {
        self.book_calls.load(Ordering::SeqCst)
    }

    fn next_access(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let access = format!("A{}", n);
        *self.valid_access.lock().unwrap() = access.clone();
        access
    }

    fn is_authorized(&self, req: &HttpRequest) -> bool {
        let expected = format!("Bearer {}", self.valid_access.lock().unwrap());
        authorization(req).as_deref() == Some(expected.as_str())
    }
}

fn authorization(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn token_not_valid() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "detail": "Given token not valid for any token type",
        "code": "token_not_valid"
    }))
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct RefreshBody {
    refresh: String,
}

async fn obtain_token(state: web::Data<StubState>, body: web::Json<Credentials>) -> HttpResponse {
    if body.username != USERNAME || body.password != PASSWORD {
        return HttpResponse::Unauthorized().json(json!({
            "detail": "No active account found with the given credentials"
        }));
    }

    let refresh = state.valid_refresh.lock().unwrap().clone();
    HttpResponse::Ok().json(json!({ "access": state.next_access(), "refresh": refresh }))
}

async fn refresh_token(state: web::Data<StubState>, body: web::Json<RefreshBody>) -> HttpResponse {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    delay(&state).await;

    if body.refresh != *state.valid_refresh.lock().unwrap() {
        return token_not_valid();
    }

    let access = state.next_access();
    if state.rotate_refresh.load(Ordering::SeqCst) {
        let refresh = format!("R-{}", access);
        *state.valid_refresh.lock().unwrap() = refresh.clone();
        HttpResponse::Ok().json(json!({ "access": access, "refresh": refresh }))
    } else {
        HttpResponse::Ok().json(json!({ "access": access }))
    }
}

async fn list_books(state: web::Data<StubState>, req: HttpRequest) -> HttpResponse {
    state.book_calls.fetch_add(1, Ordering::SeqCst);
    state.book_authorizations.lock().unwrap().push(authorization(&req));
    let authorized = state.is_authorized(&req);
    delay(&state).await;

    if !authorized {
        return token_not_valid();
    }

    HttpResponse::Ok().json(json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": 1,
            "title": "Dom Casmurro",
            "author": "Machado de Assis",
            "isbn": "9788535908770",
            "category": "Romance",
            "available_quantity": 2,
            "is_available": true,
            "cover_image": null
        }]
    }))
}

async fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().json(json!({
        "detail": "You do not have permission to perform this action."
    }))
}

async fn delay(state: &StubState) {
    let ms = state.delay_ms.load(Ordering::SeqCst) as u64;
    if ms > 0 {
        actix_web::rt::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// 실행 중인 스텁 서버
pub struct StubApi {
    pub base_url: String,
    pub state: web::Data<StubState>,
    handle: ServerHandle,
}

impl StubApi {
    pub async fn start() -> Self {
        let state = web::Data::new(StubState::new());
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/api/auth/token/", web::post().to(obtain_token))
                .route("/api/auth/token/refresh/", web::post().to(refresh_token))
                .route("/api/books/", web::get().to(list_books))
                .route("/api/books/restricted/", web::get().to(forbidden))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{}/api", port),
            state,
            handle,
        }
    }

    pub fn settings(&self, mode: RefreshMode) -> GatewaySettings {
        GatewaySettings::with_base_url(&self.base_url).refresh_mode(mode)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// `reqwest` 전송을 쓰는 게이트웨이와 기록용 내비게이터
pub fn connect(
    settings: GatewaySettings,
    session: Session,
) -> (Arc<AuthGateway>, Arc<RecordingNavigator>) {
    let transport = Arc::new(library_client::transport::ReqwestTransport::new(&settings).unwrap());
    let navigator = Arc::new(RecordingNavigator::new());
    let gateway = AuthGateway::new(settings, session, transport, navigator.clone());
    (Arc::new(gateway), navigator)
}
