use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directives for the number of `-v` flags given.
///
/// Only this crate logs below `-vvv`; from there on the HTTP stack joins in.
pub fn filter_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off",
        1 => "levcalc=info",
        2 => "levcalc=debug",
        _ => "levcalc=trace,reqwest=debug,hyper_util=debug",
    }
}

/// Installs the global subscriber on stderr, leaving stdout to the tables.
///
/// A set `RUST_LOG` replaces the verbosity directives entirely.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(verbosity > 2)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        assert_eq!(filter_directives(0), "off");
    }

    #[test]
    fn test_each_flag_raises_the_level() {
        assert_eq!(filter_directives(1), "levcalc=info");
        assert_eq!(filter_directives(2), "levcalc=debug");
        assert!(filter_directives(3).starts_with("levcalc=trace"));
        assert_eq!(filter_directives(3), filter_directives(u8::MAX));
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in 0..=3 {
            let directives = filter_directives(verbosity);
            assert!(
                EnvFilter::try_new(directives).is_ok(),
                "bad directives: {directives}"
            );
        }
    }
}
