use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_DIRECTORY: &str = "./logs";
const LOG_FILE_PREFIX: &str = "gsai-admin.log";

pub struct Logging;

impl Logging {
    /// Installs the global subscriber: daily rolling file in `./logs`,
    /// non-blocking writer, panic hook. The returned guard must be held
    /// for the lifetime of the process so buffered lines are flushed.
    pub fn initialize() -> WorkerGuard {
        let file_appender = tracing_appender::rolling::daily(LOG_DIRECTORY, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(writer)
            .with_ansi(false)
            .init();

        log_panics::init();
        guard
    }
}
