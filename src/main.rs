use std::net::SocketAddr;

use mindmirror_server::{
    create_router, domain::health::init_start_time, global::shutdown::shutdown_signal,
    utils::logging::init_logging, AppConfig, AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드 (로깅보다 먼저 필요한 LOG_DIR 포함)
    let config = AppConfig::from_env()?;

    // 3. 로깅 초기화 (guard는 main 종료 시까지 유지)
    let _log_guard = init_logging(&config.log_dir);
    init_start_time();

    tracing::info!(
        port = config.server_port,
        max_text_length = config.max_text_length,
        seeded = config.recommendation_seed.is_some(),
        "Configuration loaded"
    );

    // 4. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = create_router(AppState::new(config));

    // 5. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
