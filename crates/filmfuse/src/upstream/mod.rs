mod http;

pub use http::HttpUpstreamClient;
