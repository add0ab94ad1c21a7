//! 로깅 초기화 모듈
//!
//! stdout과 일별 로그 파일에 JSON 형식의 구조화된 로그를 남깁니다.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`가 없을 때의 기본 필터
const DEFAULT_FILTER: &str = "info,mindmirror_server=debug,tower_http=info";

/// 로그 파일 접두어. 실제 파일명은 `mindmirror.log.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "mindmirror.log";

/// 로깅 시스템을 초기화합니다.
///
/// 반환되는 `WorkerGuard`는 main에서 들고 있어야 종료 시 버퍼링된 로그가 flush 됩니다.
/// subscriber 설치에 실패해도 서버 기동은 막지 않습니다.
pub fn init_logging(log_dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(file_writer);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("tracing subscriber not installed: {}", err);
    }

    guard
}
