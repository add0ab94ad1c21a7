use std::env;

use crate::domain::analysis::analyzer::DEFAULT_MAX_TEXT_LENGTH;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,

    /// 분석에 사용할 최대 문자 수. 넘는 부분은 잘라서 버림
    pub max_text_length: usize,

    /// 추천 템플릿 선택용 시드. 설정하면 같은 입력에 항상 같은 추천
    pub recommendation_seed: Option<u64>,

    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            recommendation_seed: None,
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.server_port,
        };

        let max_text_length = match lookup("MAX_TEXT_LENGTH") {
            Some(value) => match value.parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => return Err(ConfigError::InvalidMaxTextLength(value)),
            },
            None => defaults.max_text_length,
        };

        let recommendation_seed = match lookup("RECOMMENDATION_SEED") {
            Some(value) => Some(
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(value))?,
            ),
            None => None,
        };

        let log_dir = lookup("LOG_DIR").unwrap_or(defaults.log_dir);

        Ok(Self {
            server_port,
            max_text_length,
            recommendation_seed,
            log_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid MAX_TEXT_LENGTH (must be a positive integer): {0}")]
    InvalidMaxTextLength(String),
    #[error("Invalid RECOMMENDATION_SEED (must be an unsigned integer): {0}")]
    InvalidSeed(String),
}
