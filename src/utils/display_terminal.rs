//! 데모 바이너리용 터미널 출력
//!
//! 각 API 호출 단계를 번호와 함께 보여 주고, 조회 결과를 한 줄씩 나열합니다.

const MIN_BOX_WIDTH: usize = 50;

/// 제목을 이중선 상자 안에 가운데 정렬해 출력합니다
///
/// 상자 폭은 최소 50칸이며, 제목이 길면 제목에 맞춰 늘어납니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                LIBRARY API CLIENT                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let width = MIN_BOX_WIDTH.max(title.chars().count() + 4);
    let line = "═".repeat(width);

    println!("╔{line}╗");
    println!("║{title:^width$}║");
    println!("╚{line}╝");
}

/// 단계 시작 (`→ [2] 도서 목록 조회`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ [{step}] {description}");
}

/// 단계 완료와 처리한 항목 수 (`✓ [2] 도서 목록 조회 - 3건`)
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ [{step}] {description} - {count}건");
}

/// 단계 실패와 사유
pub fn print_step_failed(step: u8, description: &str, reason: &str) {
    println!("✗ [{step}] {description} - {reason}");
}

/// 단계 아래의 결과 한 줄 (`   ├─ Dom Casmurro: Machado de Assis`)
pub fn print_sub_task(name: &str, detail: &str) {
    println!("   ├─ {name}: {detail}");
}
