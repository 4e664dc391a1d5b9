mod http_api;
mod service;
mod smtp;

pub use http_api::*;
pub use service::*;
pub use smtp::*;
