//! Tracing setup for the `shelter` binary.
//!
//! The services in `shelter-core` log one event per registry operation; the
//! storage side in `shelter-adapters` logs one per record read or written.
//! The adapters therefore stay a step quieter than the rest:
//!
//! | Flag(s)   | `shelter`, `shelter_core` | `shelter_adapters` |
//! |-----------|---------------------------|--------------------|
//! | `--quiet` | error                     | error              |
//! | (none)    | warn                      | warn               |
//! | `-v`      | info                      | warn               |
//! | `-vv`     | debug                     | info               |
//! | `-vvv`    | trace                     | trace              |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Filter levels picked from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Levels {
    registry: LevelFilter,
    storage: LevelFilter,
}

impl Levels {
    fn from_args(args: &GlobalArgs) -> Self {
        let (registry, storage) = match (args.quiet, args.verbose) {
            (true, _) => (LevelFilter::ERROR, LevelFilter::ERROR),
            (false, 0) => (LevelFilter::WARN, LevelFilter::WARN),
            (false, 1) => (LevelFilter::INFO, LevelFilter::WARN),
            (false, 2) => (LevelFilter::DEBUG, LevelFilter::INFO),
            (false, _) => (LevelFilter::TRACE, LevelFilter::TRACE),
        };
        Self { registry, storage }
    }

    fn directives(self) -> String {
        let Self { registry, storage } = self;
        format!("warn,shelter={registry},shelter_core={registry},shelter_adapters={storage}")
            .to_lowercase()
    }
}

/// Install the global subscriber. Call once, before anything logs.
///
/// Events go to stderr so `--output-format json` keeps stdout parseable.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(Levels::from_args(args).directives())?,
    };

    let ansi = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn storage_stays_quieter_than_the_registry() {
        let levels = Levels::from_args(&args(1, false));
        assert_eq!(levels.registry, LevelFilter::INFO);
        assert_eq!(levels.storage, LevelFilter::WARN);

        let levels = Levels::from_args(&args(2, false));
        assert_eq!(levels.registry, LevelFilter::DEBUG);
        assert_eq!(levels.storage, LevelFilter::INFO);
    }

    #[test]
    fn trace_opens_everything() {
        for verbose in [3, 10] {
            let levels = Levels::from_args(&args(verbose, false));
            assert_eq!(levels.storage, LevelFilter::TRACE);
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let levels = Levels::from_args(&args(3, true));
        assert_eq!(levels.registry, LevelFilter::ERROR);
        assert_eq!(levels.storage, LevelFilter::ERROR);
    }

    #[test]
    fn directives_parse_as_a_filter() {
        let directives = Levels::from_args(&args(2, false)).directives();
        assert_eq!(
            directives,
            "warn,shelter=debug,shelter_core=debug,shelter_adapters=info"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
