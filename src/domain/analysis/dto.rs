use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::analyzer::AnalysisResult;
use super::burnout::SentimentSample;

/// 일기 분석 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// 분석할 일기 내용 (10자 이상, 최대 길이는 `MAX_TEXT_LENGTH`). null/누락은 빈 문자열로 취급
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 10, message = "일기 내용은 10자 이상이어야 합니다"))]
    #[schema(
        example = "I am stressed and anxious about work, feeling exhausted and tired every day"
    )]
    pub text: String,

    /// 과거 엔트리 (오래된 순). 최근 3개로 추세를 계산
    #[serde(default)]
    #[validate(nested)]
    pub history: Vec<HistoryEntry>,
}

impl AnalyzeRequest {
    /// 설정된 최대 길이를 넘는지 확인합니다. 길이는 문자 수 기준
    pub fn exceeds_max_length(&self, max_text_length: usize) -> bool {
        self.text.chars().count() > max_text_length
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 과거 엔트리 요약
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[validate(range(
        min = -100,
        max = 100,
        message = "감성 점수는 -100 이상 100 이하여야 합니다"
    ))]
    #[schema(example = 20, minimum = -100, maximum = 100)]
    pub sentiment_score: i32,
}

impl SentimentSample for HistoryEntry {
    fn sentiment_score(&self) -> i32 {
        self.sentiment_score
    }
}

/// 일기 분석 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSuccessResponse {
    /// 성공 여부
    #[schema(example = true)]
    pub is_success: bool,

    /// 응답 코드
    #[schema(example = "COMMON200")]
    pub code: String,

    /// 응답 메시지
    #[schema(example = "성공입니다.")]
    pub message: String,

    /// 분석 결과
    pub result: AnalysisResult,
}
