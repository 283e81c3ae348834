//! # ims-client
//!
//! REST client for the IMS operations API.
//!
//! An [`ImsSession`] is built from a resolved connection profile, wrapped in
//! an [`ImsRestClient`], and each start/stop operation issues exactly one
//! `PUT` whose JSON answer is normalized into a [`ResponseEnvelope`].
//! Application-level failures embedded in the body are surfaced by
//! [`ResponseEnvelope::check_return_code`].

mod error;
mod response;
mod rest;
mod session;
mod start;
mod stop;

pub use error::{ClientError, ErrorKind};
pub use response::{ResponseEnvelope, ReturnCode, ReturnCodeEntry};
pub use rest::ImsRestClient;
pub use session::{DEFAULT_TIMEOUT, ImsConnectTarget, ImsSession};
