use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// 반환할 최대 키워드 수
const MAX_KEYWORDS: usize = 10;

/// 이 길이(문자 수) 이하의 토큰은 버림
const MIN_KEYWORD_CHARS: usize = 4;

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is", "are",
    "am", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might",
];

// regex 크레이트는 백트래킹이 없어 입력 길이에 선형
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// 빈도 내림차순으로 최대 10개의 키워드를 추출합니다.
///
/// 빈도가 같으면 처음 등장한 순서를 유지합니다.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowercase = text.to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in WORD_PATTERN.find_iter(&lowercase).map(|m| m.as_str()) {
        if token.chars().count() <= MIN_KEYWORD_CHARS || STOPWORDS.contains(&token) {
            continue;
        }
        match positions.get(token) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by는 안정 정렬
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token.to_string())
        .collect()
}
