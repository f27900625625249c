//! Static benchmark metadata.

pub mod benchmark;

pub use benchmark::Benchmark;
