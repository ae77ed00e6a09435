//! HTTP transport layer.
//!
//! Splits into endpoint/proxy parsing ([`endpoint`]), header construction
//! ([`headers`]) and the request-dispatching session ([`session`]).

pub mod endpoint;
pub mod headers;
pub mod session;

pub use endpoint::{Endpoint, ProxyTarget, Scheme};
pub use headers::HeaderBuilder;
pub use session::{Method, MultipartForm, Session};
