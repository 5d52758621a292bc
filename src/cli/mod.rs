//! Command line interface of `hpo-generank`

use clap_verbosity_flag::{InfoLevel, Verbosity};

pub mod compute_ic;
pub mod rank;

/// Commonly used command line arguments.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Verbosity of the program
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: Verbosity::new(0, 0),
        }
    }
}

/// Maps the verbosity flags to the maximum level of the tracing subscriber
pub fn max_level(args: &Args) -> tracing::Level {
    match args.verbose.log_level() {
        Some(level) => match level {
            log::Level::Error => tracing::Level::ERROR,
            log::Level::Warn => tracing::Level::WARN,
            log::Level::Info => tracing::Level::INFO,
            log::Level::Debug => tracing::Level::DEBUG,
            log::Level::Trace => tracing::Level::TRACE,
        },
        None => tracing::Level::ERROR,
    }
}
