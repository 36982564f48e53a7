use std::fs::OpenOptions;
use std::io::Write;

/// Appends a timestamped line to the file named by `TASKR_DEBUG`.
/// No-op when the variable is unset or the file cannot be opened.
pub fn log(msg: &str) {
    let Ok(path) = std::env::var("TASKR_DEBUG") else {
        return;
    };
    let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let _ = writeln!(f, "[{now}] {msg}");
}
