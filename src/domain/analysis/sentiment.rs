use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::round_half_up;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "love",
    "happy",
    "enjoyed",
    "blessed",
    "grateful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "angry",
    "sad",
    "depressed",
    "anxiety",
    "worst",
    "never",
];

/// 감성 점수 구간 라벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SentimentLabel {
    #[serde(rename = "Positive")]
    Positive,
    #[serde(rename = "Neutral-Positive")]
    NeutralPositive,
    #[serde(rename = "Neutral-Negative")]
    NeutralNegative,
    #[serde(rename = "Negative")]
    Negative,
}

impl SentimentLabel {
    pub fn from_score(score: i32) -> Self {
        if score > 20 {
            SentimentLabel::Positive
        } else if score > 0 {
            SentimentLabel::NeutralPositive
        } else if score > -20 {
            SentimentLabel::NeutralNegative
        } else {
            SentimentLabel::Negative
        }
    }
}

/// 긍정/부정 어휘 등장 횟수로 -100..=100 감성 점수를 계산합니다.
///
/// 감정 탐지와 달리 여기서는 등장 횟수를 모두 셉니다.
/// 어휘가 하나도 없으면 0을 반환합니다.
pub fn score_sentiment(text: &str) -> i32 {
    let lowercase = text.to_lowercase();

    let positive = count_occurrences(&lowercase, POSITIVE_WORDS);
    let negative = count_occurrences(&lowercase, NEGATIVE_WORDS);

    let total = positive + negative;
    if total == 0 {
        return 0;
    }

    let ratio = (positive as f64 - negative as f64) / total as f64;
    round_half_up(ratio * 100.0) as i32
}

// str::matches는 겹치지 않는 선형 탐색이라 입력 길이에 비례함
fn count_occurrences(haystack: &str, words: &[&str]) -> usize {
    words.iter().map(|word| haystack.matches(word).count()).sum()
}
