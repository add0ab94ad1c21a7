use serde::Serialize;
use utoipa::ToSchema;

use super::emotion::{Emotion, EmotionScores};
use super::round_half_up;

const SENTIMENT_WEIGHT: f64 = 40.0;
const STRESS_ANXIETY_WEIGHT: f64 = 30.0;
const FATIGUE_WEIGHT: f64 = 20.0;
const TREND_WEIGHT: f64 = 10.0;

const MAX_BURNOUT_SCORE: f64 = 100.0;

/// 추세 계산에 쓰는 과거 엔트리 수
const TREND_WINDOW: usize = 3;

/// 과거 일기 엔트리에서 감성 점수를 꺼내는 인터페이스
///
/// 히스토리는 호출자가 소유하며 코어는 읽기만 합니다.
pub trait SentimentSample {
    fn sentiment_score(&self) -> i32;
}

impl SentimentSample for i32 {
    fn sentiment_score(&self) -> i32 {
        *self
    }
}

/// 최근 감성 점수 추세
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Declining,
    Stagnant,
    Improving,
    Insufficient,
}

impl Trend {
    fn burnout_factor(&self) -> f64 {
        match self {
            Trend::Declining => 0.8,
            Trend::Stagnant => 0.4,
            Trend::Improving | Trend::Insufficient => 0.0,
        }
    }
}

/// 최근 3개 엔트리의 감성 점수로 추세를 판단합니다.
///
/// 앞의 두 점수 평균과 마지막 점수를 비교합니다.
pub fn calculate_trend<H: SentimentSample>(history: &[H]) -> Trend {
    if history.len() < TREND_WINDOW {
        return Trend::Insufficient;
    }

    let recent = &history[history.len() - TREND_WINDOW..];
    let first = f64::from(recent[0].sentiment_score());
    let second = f64::from(recent[1].sentiment_score());
    let average = (first + second) / 2.0;
    let latest = f64::from(recent[2].sentiment_score());

    if latest < average - 15.0 {
        Trend::Declining
    } else if (latest - average).abs() < 10.0 {
        Trend::Stagnant
    } else {
        Trend::Improving
    }
}

/// 감성, 스트레스/불안, 피로, 과거 추세를 가중합해 0..=100 번아웃 점수를 계산합니다.
///
/// 각 요인은 구간에 걸린 비율만큼만 가중치를 더합니다. 무작위성 없음.
pub fn compute_burnout<H: SentimentSample>(
    emotions: &EmotionScores,
    sentiment_score: i32,
    history: &[H],
) -> f64 {
    let mut score = 0.0;

    score += SENTIMENT_WEIGHT * sentiment_factor(sentiment_score);

    let stress_level = emotions.get(Emotion::Stress) + emotions.get(Emotion::Anxiety);
    score += STRESS_ANXIETY_WEIGHT * stress_anxiety_factor(stress_level);

    score += FATIGUE_WEIGHT * fatigue_factor(emotions.get(Emotion::Fatigue));

    if !history.is_empty() {
        score += TREND_WEIGHT * calculate_trend(history).burnout_factor();
    }

    score.min(MAX_BURNOUT_SCORE)
}

fn sentiment_factor(sentiment_score: i32) -> f64 {
    match sentiment_score {
        s if s < -30 => 0.9,
        s if s < -10 => 0.5,
        s if s < 0 => 0.2,
        _ => 0.0,
    }
}

fn stress_anxiety_factor(level: u32) -> f64 {
    match level {
        l if l > 40 => 0.9,
        l if l > 25 => 0.6,
        l if l > 10 => 0.3,
        _ => 0.0,
    }
}

fn fatigue_factor(level: u32) -> f64 {
    match level {
        l if l > 25 => 0.9,
        l if l > 15 => 0.6,
        l if l > 5 => 0.3,
        _ => 0.0,
    }
}

/// 번아웃 위험 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4caf50",
            RiskLevel::Moderate => "#ff9800",
            RiskLevel::High => "#ff5722",
            RiskLevel::Critical => "#d32f2f",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Keep maintaining healthy habits",
            RiskLevel::Moderate => "Consider taking breaks and practicing stress management",
            RiskLevel::High => "Seek support and prioritize self-care immediately",
            RiskLevel::Critical => "Please reach out to mental health professionals",
        }
    }

    pub fn detail(self) -> RiskLevelDetail {
        RiskLevelDetail {
            level: self,
            color: self.color(),
            recommendation: self.recommendation(),
        }
    }
}

/// 번아웃 점수 -> 위험 단계
pub fn classify_risk(burnout_score: f64) -> RiskLevel {
    if burnout_score < 25.0 {
        RiskLevel::Low
    } else if burnout_score < 50.0 {
        RiskLevel::Moderate
    } else if burnout_score < 75.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// 위험 단계와 화면 표시용 색상/안내 문구
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RiskLevelDetail {
    pub level: RiskLevel,
    #[schema(example = "#ff9800")]
    pub color: &'static str,
    pub recommendation: &'static str,
}

/// 위험도 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    /// 반올림된 번아웃 점수
    #[schema(example = 45)]
    pub burnout_score: u32,
    pub risk_level: RiskLevelDetail,
    /// 비어 있지 않음 (해당 없으면 기본 항목 1개)
    pub primary_concerns: Vec<String>,
    pub strengths: Vec<String>,
}

const DEFAULT_CONCERN: &str = "Monitor overall wellbeing";

pub fn analyze_risk(
    emotions: &EmotionScores,
    sentiment_score: i32,
    burnout_score: f64,
) -> RiskAnalysis {
    let concern_rules = [
        (emotions.get(Emotion::Stress) > 25, "High stress levels"),
        (emotions.get(Emotion::Anxiety) > 25, "Elevated anxiety"),
        (emotions.get(Emotion::Fatigue) > 20, "Significant fatigue"),
        (sentiment_score < -20, "Persistent negative thoughts"),
        (emotions.get(Emotion::Sadness) > 20, "Mood disturbance"),
    ];
    let strength_rules = [
        (
            emotions.get(Emotion::Happiness) > 15,
            "Moments of joy and positivity",
        ),
        (sentiment_score > 0, "Overall positive outlook"),
        (emotions.get(Emotion::Anger) < 10, "Good emotional regulation"),
    ];

    let mut primary_concerns = triggered(&concern_rules);
    if primary_concerns.is_empty() {
        primary_concerns.push(DEFAULT_CONCERN.to_string());
    }

    RiskAnalysis {
        burnout_score: round_half_up(burnout_score) as u32,
        risk_level: classify_risk(burnout_score).detail(),
        primary_concerns,
        strengths: triggered(&strength_rules),
    }
}

fn triggered(rules: &[(bool, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
        .collect()
}
