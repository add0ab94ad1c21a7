use axum::{extract::rejection::JsonRejection, Json};
use validator::Validate;

use super::dto::{
    DashboardData, DashboardRequest, DashboardSuccessResponse, TrendEntry, TrendsSuccessResponse,
};
use super::service::{build_dashboard, build_trends};
use crate::utils::{
    error::AppError,
    response::{BaseResponse, ErrorResponse},
};

/// 대시보드 집계 API
///
/// 호출자가 보관한 일기 엔트리를 받아 평균, 감정 분포, 최근 7개 추세를 계산합니다.
#[utoipa::path(
    post,
    path = "/api/analysis/dashboard",
    tag = "Dashboard",
    request_body = DashboardRequest,
    responses(
        (status = 200, description = "집계 성공", body = DashboardSuccessResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 에러", body = ErrorResponse)
    )
)]
pub async fn dashboard_handler(
    request: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<DashboardData>>, AppError> {
    let Json(request) = request?;
    request.validate()?;

    let data = build_dashboard(&request.entries);

    tracing::info!(
        total_entries = data.total_entries,
        average_burnout_score = data.average_burnout_score,
        "Dashboard aggregated"
    );

    Ok(Json(BaseResponse::success(data)))
}

/// 추세 API
///
/// 전체 엔트리를 날짜 오름차순으로 정렬해 번아웃/감성 점수 시계열을 반환합니다.
#[utoipa::path(
    post,
    path = "/api/analysis/trends",
    tag = "Dashboard",
    request_body = DashboardRequest,
    responses(
        (status = 200, description = "조회 성공", body = TrendsSuccessResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 에러", body = ErrorResponse)
    )
)]
pub async fn trends_handler(
    request: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<Vec<TrendEntry>>>, AppError> {
    let Json(request) = request?;
    request.validate()?;

    let trends = build_trends(&request.entries);
    tracing::debug!(points = trends.len(), "Trends built");

    Ok(Json(BaseResponse::success(trends)))
}
