// ── Logging ───────────────────────────────────────────────────────────────────
//
// Events go to stderr, which Electron forwards to the main-process console.
// The filter comes from `DISABLE_PEEK_LOG` (an `EnvFilter` directive such as
// `debug` or `disable_peek=trace`) and defaults to `warn`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "DISABLE_PEEK_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

static INIT: OnceLock<()> = OnceLock::new();

/// Build the filter from a raw directive, falling back to the default when
/// it is missing or unparseable.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn subscriber<W>(
    directive: Option<&str>,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directive))
        .with_writer(writer)
        .with_target(true)
        .finish()
}

/// Install the stderr subscriber once per process.
///
/// Safe to call from every binding.  If the host (or a sibling addon) already
/// installed a global subscriber, ours is dropped and theirs keeps receiving
/// our events.
pub fn init() {
    INIT.get_or_init(|| {
        let directive = std::env::var(LOG_ENV).ok();
        let _ = tracing::subscriber::set_global_default(subscriber(
            directive.as_deref(),
            std::io::stderr,
        ));
    });
}
