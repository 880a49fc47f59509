use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path. Logging is off when unset, since the
/// TUI owns stdout and stderr.
pub const LOG_ENV_VAR: &str = "JOKEBOX_LOG";

/// Install the global subscriber when `JOKEBOX_LOG` is set and return the
/// file it writes to. Filter comes from `RUST_LOG`, default `info`.
pub fn init_tracing() -> io::Result<Option<PathBuf>> {
    let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
        return Ok(None);
    };

    let path = log_file_path(Path::new(&base), SystemTime::now(), std::process::id());
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(Some(path))
}

/// `{base}.{unix_secs}.{pid}`, so two running instances never share a file.
fn log_file_path(base: &Path, now: SystemTime, pid: u32) -> PathBuf {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{secs}.{pid}"));
    PathBuf::from(name)
}
