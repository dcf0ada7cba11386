//! Opt-in logging setup for binaries and tests embedding this crate.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedder's call. `init` sets up a compact timestamped formatter
//! that is quiet by default (`warn`) and honors `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=calclog=trace cargo test
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call multiple times; only the first call takes effect. The
/// `RUST_LOG` environment variable overrides the `warn` default.
pub fn init() {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("warn")
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
