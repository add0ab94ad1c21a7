pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use std::any::Any;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use state::AppState;

use global::middleware::request_id_middleware;
use utils::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::analysis::handler::analyze_entry,
        domain::dashboard::handler::dashboard_handler,
        domain::dashboard::handler::trends_handler,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::analysis::dto::AnalyzeRequest,
            domain::analysis::dto::HistoryEntry,
            domain::analysis::dto::AnalyzeSuccessResponse,
            domain::analysis::AnalysisResult,
            domain::analysis::EntryEmotions,
            domain::analysis::SentimentLabel,
            domain::analysis::Trend,
            domain::analysis::RiskAnalysis,
            domain::analysis::RiskLevel,
            domain::analysis::burnout::RiskLevelDetail,
            domain::analysis::RecommendationSet,
            domain::dashboard::dto::DashboardEntry,
            domain::dashboard::dto::DashboardRequest,
            domain::dashboard::dto::DashboardData,
            domain::dashboard::dto::TrendPoint,
            domain::dashboard::dto::WeeklyEmotion,
            domain::dashboard::dto::TrendEntry,
            domain::dashboard::dto::DashboardSuccessResponse,
            domain::dashboard::dto::TrendsSuccessResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "서버 상태 API"),
        (name = "Analysis", description = "일기 분석 API"),
        (name = "Dashboard", description = "대시보드 집계 API")
    )
)]
pub struct ApiDoc;

async fn not_found_fallback() -> AppError {
    AppError::not_found("요청한 리소스를 찾을 수 없습니다")
}

/// 핸들러 패닉을 COMMON500 응답으로 변환
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(detail = %detail, "Handler panicked");

    AppError::internal_error("서버 내부 오류가 발생했습니다").into_response()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(domain::health::health_check))
        .route(
            "/api/analysis/analyze",
            post(domain::analysis::handler::analyze_entry),
        )
        .route(
            "/api/analysis/dashboard",
            post(domain::dashboard::dashboard_handler),
        )
        .route("/api/analysis/trends", post(domain::dashboard::trends_handler))
        .fallback(not_found_fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

/// 테스트용 라우터. 추천 선택이 결정적이도록 시드를 고정합니다.
pub fn create_test_router(seed: u64) -> Router {
    let config = AppConfig {
        recommendation_seed: Some(seed),
        ..AppConfig::default()
    };
    create_router(AppState::new(config))
}
