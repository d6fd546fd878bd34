//! Make Your Impact 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정을 읽어 저장소(MongoDB 또는 인메모리)를 준비하고,
//! 프로젝트/사용자/보고서/참여 신청 REST API를 제공합니다.

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use make_your_impact_backend::config::{MongoConfig, RateLimitConfig, ServerConfig, StorageBackend};
use make_your_impact_backend::db::Database;
use make_your_impact_backend::domain::{
    ApiResource, Entity, ProjectEntity, ReportEntity, UserApplicationEntity, UserEntity,
};
use make_your_impact_backend::repositories::Repositories;
use make_your_impact_backend::routes::configure_all_routes;
use make_your_impact_backend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Make Your Impact 백엔드 시작중...");

    // 저장소 초기화
    let (repositories, storage) = initialize_repositories().await?;

    info!("✅ 리포지토리 초기화 완료 ({})", storage);

    // HTTP 서버 시작
    start_http_server(repositories, storage).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(repositories: Repositories, storage: String) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    print_startup_summary(
        &storage,
        &bind_address,
        &[
            (ProjectEntity::DISPLAY_NAME, ProjectEntity::ROUTE),
            (UserEntity::DISPLAY_NAME, UserEntity::ROUTE),
            (UserApplicationEntity::DISPLAY_NAME, UserApplicationEntity::ROUTE),
            (ReportEntity::DISPLAY_NAME, ReportEntity::ROUTE),
        ],
    );

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, &repositories))
    })
        .bind(&bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 리포지토리 연산까지 확인
/// RUST_LOG=info,make_your_impact_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 저장소 백엔드를 선택하고 리포지토리를 생성합니다
///
/// `STORAGE_BACKEND=memory`이면 인메모리 저장소를, 그 외에는 MongoDB를 사용합니다.
/// MongoDB 연결 설정이 잘못된 경우 서버를 시작하지 않습니다.
///
/// # Returns
///
/// * `(Repositories, String)` - 리포지토리 묶음과 저장소 설명
async fn initialize_repositories() -> io::Result<(Repositories, String)> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            info!("💾 인메모리 저장소 사용 (프로세스 종료 시 데이터 삭제)");
            Ok((Repositories::in_memory(), "in-memory".to_string()))
        }
        StorageBackend::Mongo => {
            let config = MongoConfig::from_env();
            info!("📡 MongoDB 클라이언트 구성 중... {:?}", config);

            let database = Database::connect(&config).await.map_err(|e| {
                error!("❌ MongoDB 연결 설정 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let storage = format!("MongoDB ({})", database.database_name());
            Ok((Repositories::from_database(&database), storage))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
