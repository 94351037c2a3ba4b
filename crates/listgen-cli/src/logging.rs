use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::{CliError, CliResult};

/// Human-readable logs on stderr (filtered by `RUST_LOG`, default `info`),
/// plus JSON lines appended to `log_file` when given.
pub fn init_logging(log_file: Option<&Path>) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    let file_layer = log_file.map(json_file_layer).transpose()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// JSON lines with RFC 3339 UTC timestamps, appended to `path`.
fn json_file_layer<S>(path: &Path) -> io::Result<impl Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_layer_appends_json_lines() {
        let path = std::env::temp_dir().join(format!("listgen_log_{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let subscriber = tracing_subscriber::registry()
            .with(json_file_layer(&path).expect("open log file"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(event = "export_written", rows = 3);
        });

        let contents = std::fs::read_to_string(&path).expect("read log");
        let line = contents.lines().next().expect("one line");
        let value: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert_eq!(value["fields"]["event"], "export_written");
        assert_eq!(value["fields"]["rows"], 3);
        assert!(value["timestamp"].is_string());
        let _ = std::fs::remove_file(&path);
    }
}
