//! Command implementations

pub mod benchmark;
pub mod filter;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use filter::{FilterConfig, FilterReport, run_filter};
pub use simple::run_simple;
