//! 데이터 및 서버 설정 관리 모듈
//!
//! MongoDB 연결, 저장소 백엔드, 서버 바인딩, Rate Limiting 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 잘못된 숫자 값은 기본값으로 대체됩니다.

use std::env;
use std::fmt;
use log::error;

/// 애플리케이션 이름이 비어 있을 때 사용하는 기본값
pub const DEFAULT_APPLICATION_NAME: &str = "settings api";

/// 데이터베이스 이름이 비어 있을 때 사용하는 기본값
pub const DEFAULT_DATABASE_NAME: &str = "VolunteerDB";

/// 동시 연결 수립 수가 0 이하일 때 사용하는 기본값
pub const DEFAULT_MAX_CONNECTING: u32 = 2;

/// MongoDB 연결 설정
///
/// 시작 시 한 번만 읽혀 [`Database::connect`](crate::db::Database::connect)에 전달됩니다.
/// 0 이하의 풀 크기/수명 값은 "드라이버 기본값 사용"을 의미합니다.
///
/// # Environment Variables
///
/// ```bash
/// export MONGO_HOST="localhost:27017"
/// export MONGO_USER="volunteer"
/// export MONGO_PASSWORD="secret"
/// export MONGO_USE_TLS="false"
/// export MONGO_USE_SRV="false"
/// export MONGO_APPLICATION_NAME="settings api"
/// export MONGO_MIN_POOL_SIZE="0"
/// export MONGO_MAX_POOL_SIZE="0"
/// export MONGO_MAX_CONNECTION_LIFETIME_MINUTES="0"
/// export MONGO_MAX_CONNECTING="2"
/// export MONGO_DATABASE="VolunteerDB"
/// ```
#[derive(Clone, PartialEq)]
pub struct MongoConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub use_tls: bool,
    pub use_srv: bool,
    pub application_name: String,
    pub min_connection_pool_size: i32,
    pub max_connection_pool_size: i32,
    pub max_connection_lifetime_minutes: i32,
    pub max_connecting_concurrently: i32,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost:27017".to_string(),
            user: String::new(),
            password: String::new(),
            use_tls: false,
            use_srv: false,
            application_name: String::new(),
            min_connection_pool_size: 0,
            max_connection_pool_size: 0,
            max_connection_lifetime_minutes: 0,
            max_connecting_concurrently: 0,
            database: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

// 비밀번호는 로그에 남기지 않습니다.
impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("use_tls", &self.use_tls)
            .field("use_srv", &self.use_srv)
            .field("application_name", &self.application_name)
            .field("min_connection_pool_size", &self.min_connection_pool_size)
            .field("max_connection_pool_size", &self.max_connection_pool_size)
            .field("max_connection_lifetime_minutes", &self.max_connection_lifetime_minutes)
            .field("max_connecting_concurrently", &self.max_connecting_concurrently)
            .field("database", &self.database)
            .finish()
    }
}

impl MongoConfig {
    /// 환경 변수에서 MongoDB 설정을 읽어옵니다.
    ///
    /// 설정되지 않은 변수는 [`MongoConfig::default`]의 값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("MONGO_HOST").unwrap_or(defaults.host),
            user: env::var("MONGO_USER").unwrap_or_default(),
            password: env::var("MONGO_PASSWORD").unwrap_or_default(),
            use_tls: env_bool("MONGO_USE_TLS", false),
            use_srv: env_bool("MONGO_USE_SRV", false),
            application_name: env::var("MONGO_APPLICATION_NAME").unwrap_or_default(),
            min_connection_pool_size: env_i32("MONGO_MIN_POOL_SIZE", 0),
            max_connection_pool_size: env_i32("MONGO_MAX_POOL_SIZE", 0),
            max_connection_lifetime_minutes: env_i32("MONGO_MAX_CONNECTION_LIFETIME_MINUTES", 0),
            max_connecting_concurrently: env_i32("MONGO_MAX_CONNECTING", 0),
            database: env::var("MONGO_DATABASE").unwrap_or(defaults.database),
        }
    }

    /// 실제로 사용할 애플리케이션 이름 (비어 있으면 기본값)
    pub fn effective_application_name(&self) -> &str {
        if self.application_name.trim().is_empty() {
            DEFAULT_APPLICATION_NAME
        } else {
            &self.application_name
        }
    }

    /// 실제로 사용할 데이터베이스 이름 (비어 있으면 기본값)
    pub fn effective_database_name(&self) -> &str {
        if self.database.trim().is_empty() {
            DEFAULT_DATABASE_NAME
        } else {
            &self.database
        }
    }

    /// 최소 풀 크기. 0 이하이면 `None` (드라이버 기본값)
    pub fn min_pool_size(&self) -> Option<u32> {
        positive(self.min_connection_pool_size)
    }

    /// 최대 풀 크기. 0 이하이면 `None` (드라이버 기본값)
    pub fn max_pool_size(&self) -> Option<u32> {
        positive(self.max_connection_pool_size)
    }

    /// 연결 최대 수명(분). 0 이하이면 `None` (드라이버 기본값)
    pub fn max_connection_lifetime_minutes(&self) -> Option<u64> {
        positive(self.max_connection_lifetime_minutes).map(u64::from)
    }

    /// 동시에 수립 가능한 연결 수. 0 이하이면 2
    pub fn max_connecting(&self) -> u32 {
        positive(self.max_connecting_concurrently).unwrap_or(DEFAULT_MAX_CONNECTING)
    }
}

fn positive(value: i32) -> Option<u32> {
    if value > 0 { Some(value as u32) } else { None }
}

/// 문서 저장소 백엔드 종류
///
/// `memory`는 데이터베이스 없이 서비스를 띄울 때(로컬 개발, 데모) 사용합니다.
/// 프로세스가 종료되면 데이터가 사라집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl StorageBackend {
    /// `STORAGE_BACKEND` 환경 변수에서 백엔드를 결정합니다. 기본값은 `Mongo`
    pub fn current() -> Self {
        Self::from_name(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    /// 문자열에서 StorageBackend를 생성합니다. 알 수 없는 값은 `Mongo`
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

fn env_i32(key: &str, default: i32) -> i32 {
    match env::var(key) {
        Ok(raw) => parse_i32(&raw).unwrap_or_else(|| {
            error!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
            error!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_i32(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
