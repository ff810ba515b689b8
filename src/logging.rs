use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Sets up stderr logging for the binary.
///
/// Stays silent unless `RUST_LOG` names a filter; `RUST_LOG=cross_word=debug`
/// shows each crossing and every closed block. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).without_time())
                .init();
        }
    });
}
