//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`date_utils`] - chrono ↔ BSON 날짜 변환
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_non_blank;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! require_non_blank(&project.title, "Project", "title")?;
//! print_boxed_title("Make Your Impact API");
//! ```

pub mod date_utils;
pub mod display_terminal;
pub mod string_utils;
