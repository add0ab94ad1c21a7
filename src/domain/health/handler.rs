use axum::Json;

use super::dto::HealthStatus;
use super::service::check_health;

/// 헬스체크 API
///
/// 서버 상태, 버전, 가동 시간을 반환합니다.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "헬스체크 성공", body = HealthStatus)
    )
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(check_health())
}
