use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once is harmless; only the first subscriber is installed. Returns whether
/// this call installed it.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        assert!(!init("info"));
    }

    #[test]
    fn test_invalid_level_does_not_panic() {
        init("not a level [");
    }
}
