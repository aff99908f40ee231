use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides `default_directive`.
pub fn init(default_directive: &str) {
    let directive = default_directive
        .parse()
        .expect("Hard-coded default directive should be correct");

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
        )
        .init();
}
