//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 저장소 백엔드와 노출된 리소스 경로를 보기 좋게 출력합니다.

/// 박스 내부 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               Make Your Impact API               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

/// 박스 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 리소스 경로 한 줄 (`  ✓ Project          → /api/projects`)
pub fn resource_line(name: &str, route: &str) -> String {
    format!("  ✓ {:<16} → {}", name, route)
}

/// 시작 요약을 출력합니다
///
/// # Arguments
///
/// * `storage` - 저장소 설명 (예: `"MongoDB (VolunteerDB)"`, `"in-memory"`)
/// * `bind_address` - 서버 바인딩 주소
/// * `resources` - `(리소스 이름, 경로)` 목록
pub fn print_startup_summary(storage: &str, bind_address: &str, resources: &[(&str, &str)]) {
    println!();
    print_boxed_title("Make Your Impact API");
    println!("  storage : {}", storage);
    println!("  listen  : http://{}", bind_address);
    println!();

    for (name, route) in resources {
        println!("{}", resource_line(name, route));
    }

    println!();
}
