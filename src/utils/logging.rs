//! Logger setup.
//!
//! Logs go to stderr so stdout only carries the benchmark report. The default
//! level is `warn`; `RUST_LOG` overrides it.

use log::LevelFilter;

pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();

    // A second init (e.g. from tests) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
