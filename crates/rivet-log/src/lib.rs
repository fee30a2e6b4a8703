//! Levelled, colored logging to stderr, configured through `RUST_LOG`.
//!
//! ```
//! rivet_log::init_with(rivet_log::Directives::parse("info,noisy::io=error")).unwrap();
//! rivet_log::info!("ready after {} attempts", 3);
//! ```

#[macro_use]
mod log;

pub use log::*;
