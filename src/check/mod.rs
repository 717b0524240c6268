pub mod http;
pub mod probe;

pub use http::HttpProbe;
pub use probe::{ProbeError, StatusProbe};
