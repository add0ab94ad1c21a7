use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::analysis::{SentimentSample, Trend};

/// 호출자가 보관 중인 과거 일기 엔트리
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntry {
    #[schema(example = "2024-05-01T09:00:00Z")]
    pub date: DateTime<Utc>,

    /// 감정별 점수 (저장 스키마 어휘: stressed, tired, anxious, happy, confused, angry)
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"stressed": 40, "tired": 30}))]
    pub emotions: BTreeMap<String, f64>,

    #[serde(default)]
    #[validate(range(
        min = -100,
        max = 100,
        message = "감성 점수는 -100 이상 100 이하여야 합니다"
    ))]
    #[schema(minimum = -100, maximum = 100)]
    pub sentiment_score: i32,

    #[serde(default)]
    pub burnout_score: f64,
}

impl SentimentSample for DashboardEntry {
    fn sentiment_score(&self) -> i32 {
        self.sentiment_score
    }
}

/// 대시보드/추세 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    /// 집계 대상 엔트리 (순서 무관, 최대 1000개)
    #[serde(default)]
    #[validate(length(max = 1000, message = "엔트리는 최대 1000개까지 집계할 수 있습니다"))]
    #[validate(nested)]
    pub entries: Vec<DashboardEntry>,
}

/// 최근 번아웃/감성 추세의 한 점
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    #[schema(example = "2024-05-01")]
    pub date: String,
    pub burnout_score: f64,
    pub sentiment: i32,
}

/// 최근 엔트리의 감정 분포
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeeklyEmotion {
    #[schema(example = "2024-05-01")]
    pub date: String,
    #[schema(value_type = Object)]
    pub emotions: BTreeMap<String, f64>,
}

/// 대시보드 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[schema(example = 42)]
    pub average_burnout_score: i64,
    #[schema(example = -5)]
    pub average_sentiment: i64,
    pub total_entries: usize,
    /// 감정별 평균 점수 (반올림)
    #[schema(value_type = Object, example = json!({"stressed": 35, "tired": 20}))]
    pub emotion_distribution: BTreeMap<String, i64>,
    /// 최근 7개 엔트리 (오래된 순)
    pub recent_trend: Vec<TrendPoint>,
    /// 최근 7개 엔트리의 감정 (오래된 순)
    pub weekly_data: Vec<WeeklyEmotion>,
    /// 최근 3개 엔트리 기준 감성 추세
    pub sentiment_trend: Trend,
}

/// 전체 기간 추세의 한 점
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendEntry {
    #[schema(example = "2024-05-01")]
    pub date: String,
    pub burnout_score: f64,
    pub sentiment_score: i32,
}

/// 대시보드 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,
    #[schema(example = "COMMON200")]
    pub code: String,
    #[schema(example = "성공입니다.")]
    pub message: String,
    pub result: DashboardData,
}

/// 추세 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendsSuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,
    #[schema(example = "COMMON200")]
    pub code: String,
    #[schema(example = "성공입니다.")]
    pub message: String,
    pub result: Vec<TrendEntry>,
}
