//! Stderr logging for tests and tools built on the sightline crates.
use std::io::Write;
use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Log to stderr, filtered by `RUST_LOG`.
///
/// Every test may call this; only the first call in a process has any effect.
pub fn log_to_stderr() {
    install(None);
}

/// Like [log_to_stderr], but shows records at `level` and above when
/// `RUST_LOG` doesn't say otherwise.
pub fn log_to_stderr_at(level: LevelFilter) {
    install(Some(level));
}

fn install(default_level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Some(level) = default_level {
            builder.filter_level(level);
        }
        builder
            .parse_default_env()
            .format(|buf, record| {
                let now = time::OffsetDateTime::now_utc();
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    now,
                    record.level(),
                    record.module_path().unwrap_or_else(|| record.target()),
                    record.args()
                )
            });
        // Someone else got there first, such as a host application's logger.
        if builder.try_init().is_err() {
            log::debug!("A logger was already installed; keeping it");
        }
    });
}
