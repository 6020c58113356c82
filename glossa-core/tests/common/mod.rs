//! Test infrastructure for the glossa parser
//!
//! Provides fixture loading, stochastic re-chunking, and assertion helpers.

mod harness;
mod loader;

pub use generators::Gen;
pub use harness::{format_event, normalize, parse_chunked, parse_one_shot, run_test, run_with_chunking};
pub use loader::{load_fixtures_by_name, TestCase};
