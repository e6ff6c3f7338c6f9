use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static LOG_INIT: Once = Once::new();

/// Initialize the tracing subscriber once for the whole process.
///
/// The `RUST_LOG` environment variable takes precedence over
/// `default_directives` when it is set.
///
/// # Panics
///
/// Will panic if we cannot set the global tracing subscriber
pub fn log_init(default_directives: Option<&str>) {
    LOG_INIT.call_once(|| {
        if std::env::var("RUST_BACKTRACE").is_err() {
            unsafe {
                std::env::set_var("RUST_BACKTRACE", "1");
            }
        }

        if std::env::var("RUST_LOG").is_err() {
            if let Some(directives) = default_directives {
                unsafe {
                    std::env::set_var("RUST_LOG", directives);
                }
            }
        }

        tracing_setup();
    });
}

fn tracing_setup() {
    let format = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(format)
        .init();
}
