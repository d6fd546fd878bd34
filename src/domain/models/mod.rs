//! # Domain Models Module
//!
//! 엔티티와 DTO가 공유하는 값 객체들입니다.
//!
//! - [`status`] - [`ProjectStatus`], [`UserRole`] 열거형

pub mod status;

pub use status::{ProjectStatus, UserRole};
