use tracing_subscriber::EnvFilter;

// Third-party targets that are too chatty at info.
const QUIET_TARGETS: &[(&str, &str)] = &[("actix_server", "warn"), ("sqlx", "warn")];

fn default_filter(level: &str) -> String {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in QUIET_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }
    directives.join(",")
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over `default_level`.
/// `log` records (actix access logs) are bridged into the same subscriber.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_quiets_noisy_crates() {
        assert_eq!(default_filter("info"), "info,actix_server=warn,sqlx=warn");
    }

    #[test]
    fn init_twice_is_harmless() {
        init("debug");
        init("info");
    }
}
