//! Test utilities
//!
//! Manual mock implementations of the port traits. They record every call so
//! tests can assert on attempt counts, requested URLs, and sleep durations
//! without touching the network or real time.

pub mod mocks;

pub use mocks::*;
