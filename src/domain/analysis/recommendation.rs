use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::emotion::{Emotion, EmotionScores};

/// 즉시 추천 대상이 되는 감정 점수 하한 (초과)
const HIGH_EMOTION_THRESHOLD: u32 = 25;

/// 이 점수를 넘으면 고위험 일일 루틴을 추천
const HIGH_BURNOUT_THRESHOLD: f64 = 50.0;

const LONGTERM_DRAWS: usize = 2;

const HIGH_BURNOUT_DAILY: &[&str] = &[
    "Spend 10 minutes on mindfulness or meditation",
    "Take a 15-minute nature break",
    "Check in with your emotions at morning and evening",
];

const MAINTENANCE_DAILY: &[&str] = &[
    "Maintain your current coping strategies",
    "Continue with stress management techniques",
];

const LIFESTYLE_STRATEGIES: &[&str] = &[
    "Maintain a consistent sleep schedule (go to bed and wake up at the same time)",
    "Exercise for at least 30 minutes, 3-4 times per week",
    "Eat nutritious meals with balanced macronutrients",
    "Limit caffeine and alcohol intake",
    "Schedule regular breaks throughout your day",
    "Maintain social connections with friends and family",
    "Practice mindfulness or meditation daily",
    "Disconnect from work during personal time",
    "Keep a gratitude journal - write 3 things you are grateful for daily",
    "Seek professional help if feeling overwhelmed",
];

const CLOSING_SENTENCE: &str =
    "Remember, feelings are temporary, and you have the strength to navigate through them.";

/// 감정별 즉시 실천 템플릿. happiness는 템플릿이 없음
fn templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anxiety => &[
            "Try the 5-4-3-2-1 grounding technique: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
            "Practice deep breathing exercises - try the 4-7-8 technique: breathe in for 4, hold for 7, exhale for 8",
            "Consider a 10-minute meditation session using apps like Headspace or Calm",
            "Take a short walk in nature to help ground yourself in the present moment",
        ],
        Emotion::Stress => &[
            "Break your tasks into smaller, manageable chunks and celebrate small wins",
            "Set clear boundaries between work and personal time",
            "Practice progressive muscle relaxation for 15 minutes",
            "Engage in a hobby or activity you enjoy to decompress",
            "Try the Pomodoro technique: work for 25 minutes, then take a 5-minute break",
        ],
        Emotion::Sadness => &[
            "Reach out to someone you trust and share how you're feeling",
            "Engage in physical activity - even a 20-minute walk can boost mood",
            "Practice self-compassion: speak to yourself as you would a good friend",
            "Spend time with people who uplift you",
            "Consider talking to a therapist or counselor",
        ],
        Emotion::Fatigue => &[
            "Prioritize sleep: aim for 7-9 hours each night",
            "Take screen breaks every hour to reduce eye strain",
            "Stay hydrated throughout the day",
            "Do light stretching or yoga to reinvigorate your energy",
            "Consider if you need a day to rest and recover",
        ],
        Emotion::Anger => &[
            "Take a time-out to cool down before responding",
            "Channel emotions through physical activity like exercise or sports",
            "Practice the TIPP technique: Temperature (cold water), Intense exercise, Paced breathing, Pair muscle relaxation",
            "Journal about what triggered your anger to understand the root cause",
            "Use \"I\" statements when expressing your feelings to others",
        ],
        Emotion::Happiness => &[],
    }
}

/// 추천 묶음
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RecommendationSet {
    /// 점수가 높은 감정별 즉시 실천 항목 (중복 제거)
    pub immediate: Vec<String>,
    /// 번아웃 점수에 따른 일일 루틴
    pub daily: Vec<String>,
    /// 생활 습관 전략 2개 (복원 추출이라 중복될 수 있음)
    pub longterm: Vec<String>,
}

/// 감정 점수와 번아웃 점수로 추천을 구성합니다.
///
/// 템플릿 선택에 쓰는 난수원은 호출자가 넘깁니다. 시드를 고정하면 결과도 고정됩니다.
pub fn build_recommendations<R: Rng + ?Sized>(
    emotions: &EmotionScores,
    burnout_score: f64,
    rng: &mut R,
) -> RecommendationSet {
    let mut high_emotions: Vec<(Emotion, u32)> = emotions
        .iter()
        .filter(|(_, score)| *score > HIGH_EMOTION_THRESHOLD)
        .collect();
    high_emotions.sort_by(|a, b| b.1.cmp(&a.1));

    let immediate = high_emotions
        .into_iter()
        .filter_map(|(emotion, _)| templates(emotion).choose(&mut *rng))
        .map(|text| text.to_string())
        .collect();

    let daily = if burnout_score > HIGH_BURNOUT_THRESHOLD {
        HIGH_BURNOUT_DAILY
    } else {
        MAINTENANCE_DAILY
    };

    let longterm = (0..LONGTERM_DRAWS)
        .filter_map(|_| LIFESTYLE_STRATEGIES.choose(&mut *rng))
        .map(|text| text.to_string())
        .collect();

    RecommendationSet {
        immediate: dedup_preserving_order(immediate),
        daily: dedup_preserving_order(daily.iter().map(|text| text.to_string()).collect()),
        longterm,
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// 대표 감정, 감성 구간, 주요 키워드로 서술형 요약을 만듭니다.
pub fn summarize(emotions: &EmotionScores, sentiment_score: i32, keywords: &[String]) -> String {
    let mut summary = String::new();

    if let Some((emotion, score)) = emotions.dominant() {
        summary.push_str(&format!(
            "Your journal entry shows a significant presence of {} ({}%). ",
            emotion, score
        ));
    }

    summary.push_str(if sentiment_score > 20 {
        "Overall, your mood appears positive with optimistic undertones. "
    } else if sentiment_score > 0 {
        "Your overall sentiment is slightly positive, with moments of challenge. "
    } else if sentiment_score > -20 {
        "Your entry reflects some negative emotions, but there is room for improvement. "
    } else {
        "Your entry contains predominantly negative sentiments that deserve attention. "
    });

    if !keywords.is_empty() {
        let themes: Vec<&str> = keywords.iter().take(3).map(String::as_str).collect();
        summary.push_str(&format!(
            "Key themes in your entry include: {}. ",
            themes.join(", ")
        ));
    }

    summary.push_str(CLOSING_SENTENCE);
    summary
}
