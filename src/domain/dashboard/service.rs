use std::collections::BTreeMap;

use super::dto::{DashboardData, DashboardEntry, TrendEntry, TrendPoint, WeeklyEmotion};
use crate::domain::analysis::{calculate_trend, round_half_up, Trend};

/// 최근 추세/주간 데이터에 포함할 엔트리 수
const RECENT_WINDOW: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn format_date(entry: &DashboardEntry) -> String {
    entry.date.format(DATE_FORMAT).to_string()
}

fn rounded_mean(sum: f64, count: usize) -> i64 {
    round_half_up(sum / count as f64) as i64
}

/// 엔트리 목록을 대시보드 요약으로 집계합니다.
///
/// 입력 순서와 무관하게 날짜 기준으로 정렬한 뒤 계산합니다. 엔트리가 없으면 0과 빈 컬렉션을 돌려줍니다.
pub fn build_dashboard(entries: &[DashboardEntry]) -> DashboardData {
    if entries.is_empty() {
        return DashboardData {
            average_burnout_score: 0,
            average_sentiment: 0,
            total_entries: 0,
            emotion_distribution: BTreeMap::new(),
            recent_trend: Vec::new(),
            weekly_data: Vec::new(),
            sentiment_trend: Trend::Insufficient,
        };
    }

    // 최신순 (같은 날짜는 입력 순서 유지)
    let mut newest_first: Vec<&DashboardEntry> = entries.iter().collect();
    newest_first.sort_by(|a, b| b.date.cmp(&a.date));

    let count = newest_first.len();
    let burnout_sum: f64 = newest_first.iter().map(|e| e.burnout_score).sum();
    let sentiment_sum: f64 = newest_first
        .iter()
        .map(|e| f64::from(e.sentiment_score))
        .sum();

    let mut emotion_sums: BTreeMap<String, f64> = BTreeMap::new();
    for entry in &newest_first {
        for (emotion, score) in &entry.emotions {
            *emotion_sums.entry(emotion.clone()).or_default() += score;
        }
    }
    let emotion_distribution = emotion_sums
        .into_iter()
        .map(|(emotion, sum)| (emotion, rounded_mean(sum, count)))
        .collect();

    let mut recent: Vec<&DashboardEntry> =
        newest_first.iter().take(RECENT_WINDOW).copied().collect();
    recent.reverse();

    let recent_trend = recent
        .iter()
        .map(|entry| TrendPoint {
            date: format_date(entry),
            burnout_score: entry.burnout_score,
            sentiment: entry.sentiment_score,
        })
        .collect();

    let weekly_data = recent
        .iter()
        .map(|entry| WeeklyEmotion {
            date: format_date(entry),
            emotions: entry.emotions.clone(),
        })
        .collect();

    let chronological: Vec<i32> = newest_first
        .iter()
        .rev()
        .map(|entry| entry.sentiment_score)
        .collect();

    DashboardData {
        average_burnout_score: rounded_mean(burnout_sum, count),
        average_sentiment: rounded_mean(sentiment_sum, count),
        total_entries: count,
        emotion_distribution,
        recent_trend,
        weekly_data,
        sentiment_trend: calculate_trend(&chronological),
    }
}

/// 전체 엔트리를 오래된 순으로 정렬해 추세 점 목록을 만듭니다.
pub fn build_trends(entries: &[DashboardEntry]) -> Vec<TrendEntry> {
    let mut sorted: Vec<&DashboardEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    sorted
        .into_iter()
        .map(|entry| TrendEntry {
            date: format_date(entry),
            burnout_score: entry.burnout_score,
            sentiment_score: entry.sentiment_score,
        })
        .collect()
}
