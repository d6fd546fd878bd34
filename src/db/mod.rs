//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 프로세스 전체에서 공유되는 단일 클라이언트 핸들을 설정값으로부터 만들고,
//! 리포지토리가 사용하는 문서 저장소 추상화를 제공합니다.
//!
//! # 모듈 구성
//!
//! - [`collections`] - 리소스 타입별 타입 지정 컬렉션 접근자
//! - [`store`] - [`DocumentStore`] trait 및 MongoDB 컬렉션 구현
//! - [`memory`] - 테스트 및 DB 없는 실행을 위한 인메모리 저장소
//!
//! # 연결 옵션
//!
//! 다음 옵션은 설정과 무관하게 항상 켜져 있습니다.
//!
//! - zlib 페이로드 압축
//! - `retryWrites=true`
//! - `w=majority` 쓰기 확인
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::MongoConfig;
//! use crate::db::Database;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = Database::connect(&MongoConfig::from_env()).await?;
//!     let projects = database.projects();
//!     Ok(())
//! }
//! ```

pub mod collections;
pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::DocumentStore;

use std::time::Duration;

use log::info;
use mongodb::{Client, options::{ClientOptions, Credential}};

use crate::config::MongoConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관합니다.
/// `Client`는 내부적으로 연결 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB 연결 핸들을 생성합니다.
    ///
    /// 연결 문자열이 잘못된 경우 즉시 [`AppError::DatabaseError`]를 반환합니다.
    /// 서버에 대한 실제 I/O는 첫 번째 리포지토리 호출 시점에 발생하며,
    /// 재연결은 드라이버가 처리합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&MongoConfig::from_env()).await?;
    /// ```
    pub async fn connect(config: &MongoConfig) -> AppResult<Self> {
        let uri = connection_uri(config);

        let mut client_options = ClientOptions::parse(&uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("잘못된 MongoDB 연결 설정: {}", e)))?;

        apply_options(&mut client_options, config);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let database_name = config.effective_database_name().to_string();

        info!(
            "✅ MongoDB 클라이언트 준비 완료: host={}, database={}",
            config.host, database_name
        );

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 컬렉션 접근자가 호출될 때마다 새로 파생됩니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// 설정값을 MongoDB 연결 문자열로 변환합니다.
///
/// 자격 증명은 연결 문자열에 넣지 않고 [`apply_options`]에서
/// 드라이버의 `Credential`로 전달합니다.
///
/// ```rust,ignore
/// let uri = connection_uri(&config);
/// // mongodb://localhost:27017/?tls=false&compressors=zlib&retryWrites=true&w=majority
/// ```
pub fn connection_uri(config: &MongoConfig) -> String {
    let scheme = if config.use_srv { "mongodb+srv" } else { "mongodb" };

    format!(
        "{}://{}/?tls={}&compressors=zlib&retryWrites=true&w=majority",
        scheme,
        config.host.trim(),
        config.use_tls
    )
}

/// 연결 문자열로 표현하지 않는 옵션들을 적용합니다.
///
/// 0 이하의 풀 크기와 수명은 드라이버 기본값을 그대로 둡니다.
/// Rust 드라이버에는 연결 수명 옵션이 없으므로 최대 유휴 시간으로 대응합니다.
fn apply_options(options: &mut ClientOptions, config: &MongoConfig) {
    options.app_name = Some(config.effective_application_name().to_string());

    if let Some(min) = config.min_pool_size() {
        options.min_pool_size = Some(min);
    }

    if let Some(max) = config.max_pool_size() {
        options.max_pool_size = Some(max);
    }

    if let Some(minutes) = config.max_connection_lifetime_minutes() {
        options.max_idle_time = Some(Duration::from_secs(minutes * 60));
    }

    options.max_connecting = Some(config.max_connecting());

    if !config.user.trim().is_empty() {
        let mut credential = Credential::default();
        credential.username = Some(config.user.clone());
        if !config.password.is_empty() {
            credential.password = Some(config.password.clone());
        }
        options.credential = Some(credential);
    }
}
