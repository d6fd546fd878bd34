//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - MongoDB 연결, 저장소 백엔드, 서버, Rate Limiting 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{MongoConfig, ServerConfig};
//!
//! let mongo = MongoConfig::from_env();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB 설정
//! export MONGO_HOST="cluster0.example.mongodb.net"
//! export MONGO_USE_SRV="true"
//! export MONGO_USE_TLS="true"
//! export MONGO_DATABASE="VolunteerDB"
//!
//! # 데이터베이스 없이 실행
//! export STORAGE_BACKEND="memory"
//! ```

pub mod data_config;

pub use data_config::*;
