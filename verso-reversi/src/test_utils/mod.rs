//! Utilities used for testing and benchmarking.

pub mod perft;

pub use perft::run_perft;
