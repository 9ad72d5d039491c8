//! 기동 과정 터미널 출력
//!
//! 레지스트리 초기화 단계와 서버 기동 정보를 박스/단계 형태로 출력합니다.
//! 로그 레벨과 무관하게 항상 표준 출력으로 나갑니다.

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} registered)", step, description, count);
}

/// 단계 안의 개별 항목 (`  • sequence ... ✓ Created`)
pub fn print_sub_task(name: &str, status: &str) {
    println!("  • {:<24} {}", name, status);
}

pub fn print_final_summary(repositories: usize, services: usize) {
    println!("{}", "─".repeat(BOX_WIDTH + 2));
    println!(
        "🎉 Registry ready: {} repositories, {} services",
        repositories, services
    );
    println!("{}", "─".repeat(BOX_WIDTH + 2));
}

pub fn print_cache_initialized(kind: &str, count: usize) {
    println!("📦 {} name cache initialized: {} entries", kind, count);
}

/// 서버 기동 요약
///
/// `resources`는 등록된 REST 리소스 경로 목록입니다.
pub fn print_server_summary(address: &str, backend: &str, cache_enabled: bool, resources: &[&str]) {
    print_boxed_title("🚀 MERCHANT ORDER BACKEND");
    println!("  • {:<24} http://{}", "address", address);
    println!("  • {:<24} {}", "storage", backend);
    println!(
        "  • {:<24} {}",
        "cache",
        if cache_enabled { "redis" } else { "disabled" }
    );
    println!("  • {:<24} {}", "resources", resources.len());
    for path in resources {
        println!("      /api/{}", path);
    }
}
