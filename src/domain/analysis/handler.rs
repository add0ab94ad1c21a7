use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use super::analyzer::AnalysisResult;
use super::dto::{AnalyzeRequest, AnalyzeSuccessResponse};
use crate::state::AppState;
use crate::utils::{
    error::AppError,
    response::{BaseResponse, ErrorResponse},
};

/// 일기 분석 API
///
/// 일기 내용을 분석해 감정 분포, 감성 점수, 번아웃 위험도, 추천, 요약을 반환합니다.
#[utoipa::path(
    post,
    path = "/api/analysis/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "분석 성공", body = AnalyzeSuccessResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 에러", body = ErrorResponse)
    )
)]
pub async fn analyze_entry(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<AnalysisResult>>, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request?;

    tracing::info!(
        text_length = request.text.chars().count(),
        history_len = request.history.len(),
        "Analysis request received"
    );

    // 입력 검증 (길이 제한은 코어가 아니라 여기서 강제)
    request.validate()?;

    let max_text_length = state.config.max_text_length;
    if request.exceeds_max_length(max_text_length) {
        return Err(AppError::validation_error(format!(
            "일기 내용은 {}자 이하여야 합니다",
            max_text_length
        )));
    }

    let result = state.analysis_service.analyze(&request);

    tracing::info!(
        burnout_score = result.burnout_score,
        risk_level = ?result.risk_analysis.risk_level.level,
        "Analysis completed"
    );

    Ok(Json(BaseResponse::success(result)))
}
