//! 도서관 API 클라이언트 데모
//!
//! 환경 설정을 읽어 게이트웨이를 구성한 뒤 로그인, 도서 목록 조회,
//! 대출 현황 조회를 차례로 수행하며 결과를 터미널에 출력합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::info;

use library_client::config::{Environment, GatewaySettings};
use library_client::errors::ClientResult;
use library_client::gateway::{AuthGateway, Outcome};
use library_client::services::auth::AuthService;
use library_client::services::library::{BookService, LoanService};
use library_client::session::Session;
use library_client::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_failed, print_step_start, print_sub_task,
};

#[tokio::main]
async fn main() -> ClientResult<()> {
    load_env_file();
    init_logging();

    let settings = GatewaySettings::from_env()?;
    info!(
        "🚀 도서관 API 클라이언트 시작 ({:?}, {}, 갱신 모드: {})",
        Environment::current(),
        settings.base_url,
        settings.refresh_mode.as_str()
    );

    let gateway = Arc::new(AuthGateway::with_defaults(settings, Session::from_config())?);

    print_boxed_title("LIBRARY API CLIENT");

    run_demo(gateway).await
}

/// 로그인 → 도서 목록 → 대출 현황 순서로 API를 호출합니다
///
/// 세션 파일에 유효한 토큰이 남아 있으면 자격 증명 없이도 조회 단계가 동작합니다.
async fn run_demo(gateway: Arc<AuthGateway>) -> ClientResult<()> {
    let auth = AuthService::new(gateway.clone());

    print_step_start(1, "로그인");
    let has_session = auth.is_authenticated().await?;
    match credentials() {
        Some((username, password)) => match auth.login(&username, &password).await {
            Ok(_) => print_step_complete(1, "로그인", 1),
            Err(e) => {
                print_step_failed(1, "로그인", &e.to_string());
                return Err(e);
            }
        },
        None if has_session => print_sub_task("세션", "저장된 토큰 사용"),
        None => print_step_failed(1, "로그인", "LIBRARY_USERNAME / LIBRARY_PASSWORD 미설정"),
    }

    print_step_start(2, "도서 목록 조회");
    match BookService::new(gateway.clone()).list_books(None, None).await? {
        Outcome::Success(page) => {
            for book in &page.results {
                print_sub_task(&book.title, &book.author);
            }
            print_step_complete(2, "도서 목록 조회", page.results.len());
            info!("전체 도서 수: {}", page.count);
        }
        Outcome::Redirected => {
            print_step_failed(2, "도서 목록 조회", "로그인이 필요합니다");
            return Ok(());
        }
    }

    let loans = LoanService::new(gateway);

    print_step_start(3, "대출 중 목록 조회");
    if let Outcome::Success(active) = loans.list_active_loans().await? {
        for loan in &active {
            print_sub_task(&loan.book.title, &format!("{} (반납 기한 {})", loan.user.full_name, loan.due_date));
        }
        print_step_complete(3, "대출 중 목록 조회", active.len());
    }

    print_step_start(4, "연체 목록 조회");
    if let Outcome::Success(overdue) = loans.list_overdue_loans().await? {
        for loan in &overdue {
            print_sub_task(&loan.book.title, &format!("{}일 연체", loan.days_overdue));
        }
        print_step_complete(4, "연체 목록 조회", overdue.len());
    }

    Ok(())
}

/// 데모 로그인에 사용할 자격 증명
fn credentials() -> Option<(String, String)> {
    let username = std::env::var("LIBRARY_USERNAME").ok()?;
    let password = std::env::var("LIBRARY_PASSWORD").ok()?;
    Some((username, password))
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 표준 에러로 출력합니다
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,library_client=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,library_client=debug"));
}
