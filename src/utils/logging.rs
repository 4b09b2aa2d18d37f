use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_appender::non_blocking::WorkerGuard;
use anyhow::Result;

/// Installs the global `tracing` subscriber
///
/// Events go to stdout and, when `log_file_path` is set, to `yard-control_<date>.log` in that directory.
/// `RUST_LOG` wins when set; otherwise `level` applies with `sqlx` held at `warn`.
///
/// Records emitted through the `log` facade are forwarded as well.
///
/// The returned guard flushes the file writer on drop and has to live as long as the process.
pub fn init_logger(level: &str, log_file_path: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},sqlx=warn", level)))?;

    let format = fmt::format()
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if let Some(path) = log_file_path {
        std::fs::create_dir_all(&path)?;

        let file_name = format!(
            "yard-control_{}.log",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let file_appender = RollingFileAppender::new(Rotation::NEVER, &path, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let console_layer = fmt::Layer::default()
            .event_format(format.clone().with_ansi(true))
            .with_writer(std::io::stdout);

        let file_layer = fmt::Layer::default()
            .event_format(format)
            .with_writer(non_blocking);

        subscriber.with(file_layer).with(console_layer).try_init()?;

        tracing::info!("Logging initialized successfully");
        Ok(Some(guard))
    } else {
        let console_layer = fmt::Layer::default()
            .event_format(format.clone().with_ansi(true))
            .with_writer(std::io::stdout);

        subscriber.with(console_layer).try_init()?;

        tracing::info!("Logging initialized successfully (console only)");
        Ok(None)
    }
}
