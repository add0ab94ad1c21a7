use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::burnout::{
    analyze_risk, calculate_trend, compute_burnout, RiskAnalysis, SentimentSample, Trend,
};
use super::emotion::{detect_emotions, EmotionScores, EntryEmotions};
use super::keyword::extract_keywords;
use super::recommendation::{build_recommendations, summarize, RecommendationSet};
use super::round_half_up;
use super::sentiment::{score_sentiment, SentimentLabel};

/// 분석 입력 최대 길이 기본값 (문자 수)
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

/// 일기 한 건의 분석 결과
///
/// 호출마다 새로 만들어지며 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 감정별 백분율 (매칭된 감정만 포함)
    #[schema(value_type = Object, example = json!({"anxiety": 33, "stress": 33, "fatigue": 33}))]
    pub emotions: EmotionScores,
    /// 저장 스키마 어휘로 변환한 감정 점수
    pub entry_emotions: EntryEmotions,
    #[schema(example = -40)]
    pub sentiment_score: i32,
    pub sentiment_label: SentimentLabel,
    pub keywords: Vec<String>,
    /// 반올림된 번아웃 점수 (0..=100)
    #[schema(example = 45)]
    pub burnout_score: u32,
    pub trend: Trend,
    pub risk_analysis: RiskAnalysis,
    pub recommendations: RecommendationSet,
    pub psychological_summary: String,
}

/// 분석 파이프라인
///
/// 상태가 없으므로 여러 요청에서 동시에 써도 안전합니다.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    max_text_length: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}

impl Analyzer {
    pub fn new(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    /// 텍스트와 과거 감성 히스토리를 분석합니다. 실패하지 않습니다.
    pub fn analyze<H, R>(&self, text: &str, history: &[H], rng: &mut R) -> AnalysisResult
    where
        H: SentimentSample,
        R: Rng + ?Sized,
    {
        let text = truncate_chars(text, self.max_text_length);

        let emotions = detect_emotions(text);
        let sentiment_score = score_sentiment(text);
        let keywords = extract_keywords(text);

        let burnout = compute_burnout(&emotions, sentiment_score, history);
        let trend = calculate_trend(history);
        let risk_analysis = analyze_risk(&emotions, sentiment_score, burnout);
        let recommendations = build_recommendations(&emotions, burnout, rng);
        let psychological_summary = summarize(&emotions, sentiment_score, &keywords);

        tracing::debug!(
            text_chars = text.chars().count(),
            emotion_count = emotions.len(),
            sentiment_score,
            burnout_score = burnout,
            trend = ?trend,
            "Journal entry analyzed"
        );

        AnalysisResult {
            entry_emotions: EntryEmotions::from(&emotions),
            emotions,
            sentiment_score,
            sentiment_label: SentimentLabel::from_score(sentiment_score),
            keywords,
            burnout_score: round_half_up(burnout) as u32,
            trend,
            risk_analysis,
            recommendations,
            psychological_summary,
        }
    }
}

/// 문자 경계를 지키며 최대 `max_chars` 문자까지 자릅니다.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
