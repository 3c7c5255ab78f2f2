use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "TODO_TUI_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: anything written to the terminal would
/// corrupt the TUI. An explicit `log_path` wins over `TODO_TUI_LOG`.
///
/// Returns the path of the file actually written to.
pub fn init_tracing(log_path: Option<&Path>) -> Option<PathBuf> {
    let base = match log_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(std::env::var_os(LOG_ENV_VAR)?),
    };
    let unique_path = unique_log_path(&base);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

/// `{base}.{timestamp}.{pid}`, so concurrent sessions never share a file.
pub fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_log_path_appends_pid() {
        let path = unique_log_path(Path::new("/tmp/todo.log"));
        let name = path.to_string_lossy();
        assert!(name.starts_with("/tmp/todo.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
    }
}
