//! Submission side of the contact form: the form state machine, the HTTP
//! call to the endpoint and the `mailto:` fallback.

mod endpoint;
mod fallback;
mod form;

pub use endpoint::*;
pub use fallback::*;
pub use form::*;
