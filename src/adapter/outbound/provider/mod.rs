//! State provider adapters.

mod http;

pub use http::HttpStateProvider;
