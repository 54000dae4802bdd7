pub mod base;
pub mod http_transport;

pub use base::*;
pub use http_transport::HttpTransport;
