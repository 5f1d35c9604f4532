//! Adapter implementations of the domain ports.

pub mod clock;
pub mod http;

pub use clock::TokioSleeper;
pub use http::ReqwestFetcher;
