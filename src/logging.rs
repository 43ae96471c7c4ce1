//! Simple tracing subscriber setup for applications using the client.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a formatted subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling it again once a global subscriber exists is a no-op.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("logger initialized");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init();
        super::init();
    }
}
