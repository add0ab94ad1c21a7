use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::round_half_up;

/// 감정 카테고리
///
/// 선언 순서가 정규 순서이며, 동점 처리(대표 감정, 추천 정렬)는 모두 이 순서를 따릅니다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Stress,
    Sadness,
    Happiness,
    Anger,
    Fatigue,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Anxiety,
        Emotion::Stress,
        Emotion::Sadness,
        Emotion::Happiness,
        Emotion::Anger,
        Emotion::Fatigue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Stress => "stress",
            Emotion::Sadness => "sadness",
            Emotion::Happiness => "happiness",
            Emotion::Anger => "anger",
            Emotion::Fatigue => "fatigue",
        }
    }

    /// 감정별 탐지 키워드 (부분 문자열로 매칭)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Anxiety => &[
                "anxious",
                "nervous",
                "worried",
                "scared",
                "afraid",
                "panic",
                "stress",
                "tense",
                "apprehensive",
                "uneasy",
            ],
            Emotion::Stress => &[
                "stressed",
                "overwhelmed",
                "pressure",
                "burden",
                "exhausted",
                "drained",
                "frustrated",
                "tense",
                "strain",
            ],
            Emotion::Sadness => &[
                "sad",
                "depressed",
                "lonely",
                "unhappy",
                "blue",
                "miserable",
                "hopeless",
                "grief",
                "tears",
                "gloomy",
            ],
            Emotion::Happiness => &[
                "happy",
                "joyful",
                "excited",
                "glad",
                "delighted",
                "wonderful",
                "amazing",
                "fantastic",
                "blessed",
                "grateful",
            ],
            Emotion::Anger => &[
                "angry",
                "furious",
                "rage",
                "irritated",
                "annoyed",
                "mad",
                "frustrated",
                "resentment",
                "hate",
                "disgusted",
            ],
            Emotion::Fatigue => &[
                "tired",
                "exhausted",
                "fatigued",
                "worn out",
                "burned out",
                "drained",
                "sleepy",
                "energy low",
                "lethargic",
            ],
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 감정별 백분율 점수
///
/// 키워드가 하나도 매칭되지 않은 감정은 0으로 저장하지 않고 아예 빠집니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(BTreeMap<Emotion, u32>);

impl EmotionScores {
    /// 없는 감정은 0
    pub fn get(&self, emotion: Emotion) -> u32 {
        self.0.get(&emotion).copied().unwrap_or(0)
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.0.contains_key(&emotion)
    }

    /// 정규 순서로 순회
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        self.0.iter().map(|(emotion, score)| (*emotion, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 가장 높은 점수의 감정. 동점이면 정규 순서상 앞선 감정
    pub fn dominant(&self) -> Option<(Emotion, u32)> {
        self.iter().fold(None, |best, (emotion, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((emotion, score)),
        })
    }
}

impl FromIterator<(Emotion, u32)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (Emotion, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 텍스트에서 감정 키워드를 찾아 백분율로 정규화합니다.
///
/// 키워드는 감정마다 최대 1회만 집계합니다 (등장 횟수가 아닌 등장 여부).
pub fn detect_emotions(text: &str) -> EmotionScores {
    let lowercase = text.to_lowercase();

    let raw: Vec<(Emotion, u32)> = Emotion::ALL
        .iter()
        .filter_map(|&emotion| {
            let hits = emotion
                .keywords()
                .iter()
                .filter(|keyword| lowercase.contains(*keyword))
                .count() as u32;
            (hits > 0).then_some((emotion, hits))
        })
        .collect();

    let total = raw.iter().map(|(_, hits)| hits).sum::<u32>().max(1);

    raw.into_iter()
        .map(|(emotion, hits)| {
            let percent = round_half_up(f64::from(hits) / f64::from(total) * 100.0);
            (emotion, percent as u32)
        })
        .collect()
}

/// 저장용 엔트리 스키마의 감정 어휘
///
/// 탐지기 어휘(anxiety, stress, ...)와 저장 스키마 어휘(stressed, tired, ...)가 다르므로
/// 저장 경계에서 이 타입으로 변환합니다. sadness는 대응 칸이 없어 버려지고,
/// confused는 탐지 카테고리가 없어 항상 0입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntryEmotions {
    #[serde(default)]
    pub stressed: u32,
    #[serde(default)]
    pub tired: u32,
    #[serde(default)]
    pub anxious: u32,
    #[serde(default)]
    pub happy: u32,
    #[serde(default)]
    pub confused: u32,
    #[serde(default)]
    pub angry: u32,
}

impl From<&EmotionScores> for EntryEmotions {
    fn from(scores: &EmotionScores) -> Self {
        Self {
            stressed: scores.get(Emotion::Stress),
            tired: scores.get(Emotion::Fatigue),
            anxious: scores.get(Emotion::Anxiety),
            happy: scores.get(Emotion::Happiness),
            confused: 0,
            angry: scores.get(Emotion::Anger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_empty_scores_for_empty_text() {
        assert!(detect_emotions("").is_empty());
        assert!(detect_emotions("   \n\t").is_empty());
    }

    #[test]
    fn should_count_each_keyword_once() {
        // Arrange
        let text = "tired tired tired and sad";

        // Act
        let scores = detect_emotions(text);

        // Assert
        assert_eq!(scores.get(Emotion::Fatigue), 50);
        assert_eq!(scores.get(Emotion::Sadness), 50);
    }

    #[test]
    fn should_match_keywords_inside_larger_words() {
        // "madness" 안의 "mad"도 분노로 집계됨
        let scores = detect_emotions("Pure madness today");

        assert_eq!(scores.get(Emotion::Anger), 100);
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn should_be_case_insensitive() {
        let scores = detect_emotions("I am SO HAPPY");

        assert_eq!(scores.get(Emotion::Happiness), 100);
    }

    #[test]
    fn should_omit_emotions_without_hits() {
        let scores = detect_emotions("I feel happy");

        assert!(scores.contains(Emotion::Happiness));
        assert!(!scores.contains(Emotion::Anger));
        assert_eq!(scores.get(Emotion::Anger), 0);
    }

    #[test]
    fn should_sum_to_about_one_hundred() {
        let texts = [
            "I am stressed and anxious about work, feeling exhausted and tired every day",
            "sad lonely angry furious tired happy",
            "worried nervous scared, then glad",
            "drained",
        ];

        for text in texts {
            let scores = detect_emotions(text);
            let total: i64 = scores.iter().map(|(_, score)| i64::from(score)).sum();
            let drift = scores.len() as i64;
            assert!(
                (100 - drift..=100 + drift).contains(&total),
                "total {} out of range for {:?}",
                total,
                text
            );
        }
    }

    #[test]
    fn should_split_shared_keywords_between_categories() {
        // "exhausted"는 stress와 fatigue 둘 다에 속함
        let scores = detect_emotions("exhausted");

        assert_eq!(scores.get(Emotion::Stress), 50);
        assert_eq!(scores.get(Emotion::Fatigue), 50);
    }

    #[test]
    fn should_pick_first_canonical_emotion_on_tie() {
        let scores: EmotionScores = [(Emotion::Fatigue, 50), (Emotion::Stress, 50)]
            .into_iter()
            .collect();

        assert_eq!(scores.dominant(), Some((Emotion::Stress, 50)));
    }

    #[test]
    fn should_have_no_dominant_emotion_when_empty() {
        assert_eq!(EmotionScores::default().dominant(), None);
    }

    #[test]
    fn should_serialize_with_lowercase_keys() {
        let scores: EmotionScores = [(Emotion::Happiness, 100)].into_iter().collect();

        let json = serde_json::to_value(&scores).unwrap();

        assert_eq!(json, serde_json::json!({ "happiness": 100 }));
    }

    #[test]
    fn should_map_to_entry_vocabulary() {
        // Arrange
        let scores: EmotionScores = [
            (Emotion::Anxiety, 20),
            (Emotion::Stress, 30),
            (Emotion::Sadness, 10),
            (Emotion::Fatigue, 40),
        ]
        .into_iter()
        .collect();

        // Act
        let entry = EntryEmotions::from(&scores);

        // Assert
        assert_eq!(entry.stressed, 30);
        assert_eq!(entry.tired, 40);
        assert_eq!(entry.anxious, 20);
        assert_eq!(entry.happy, 0);
        assert_eq!(entry.confused, 0);
        assert_eq!(entry.angry, 0);
    }
}
