//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  SODAM Backend                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: 데이터베이스 연결
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: 서비스 등록 완료 (7 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 들여쓰기된 트리 구조로 출력합니다
///
/// ```text
///    ├─ CoreDiagnosisService: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서비스 초기화 완료 후 전체 요약을 출력합니다
pub fn print_final_summary(services: usize, markets: usize) {
    println!();
    print_boxed_title("🎉 SODAM SERVICE REGISTRY INITIALIZED");
    println!("   🔧 Services: {}", services);
    println!("   🗺️ Sample Markets: {}", markets);
    println!();
}
