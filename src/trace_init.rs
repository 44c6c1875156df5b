//! Opt-in JSON trace log for field sessions (`trace` feature).

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::atomic::{AtomicBool, Ordering};

/// File written under the host-supplied log directory.
pub const TRACE_FILE_NAME: &str = "urlbar-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "urlbar_engine=debug,urlbar_session=debug";

#[cfg(feature = "trace")]
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the trace subscriber. Returns `true` only for the call that
/// installed it; later calls, or a host that already set a global
/// subscriber, leave the existing one in place.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> bool {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return false;
    }

    let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        // Timer events come from the `urlbar-debounce` thread.
        .with_thread_names(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .is_ok();

    if installed {
        // Flushes for as long as the host process runs.
        std::mem::forget(guard);
    }
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> bool {
    false
}
