//! # ims-core
//!
//! Resource parameter model and query encoding for IMS start/stop operations.
//!
//! Nothing in this crate performs I/O. A parameter bag is validated and turned
//! into a [`ResourceRequest`] (a REST path plus its query string) that the
//! `ims-client` crate sends to the IMS operations API.
//!
//! ```
//! use ims_core::{UpdateTransactionParams, encode};
//!
//! let params = UpdateTransactionParams {
//!     names: Some(vec!["TRAN1".to_string()]),
//!     ..Default::default()
//! };
//! let request = encode::stop_transaction(&params).unwrap();
//! assert_eq!(request.to_string(), "/transaction?names=TRAN1&stop=SCHD");
//! ```

pub mod encode;
pub mod params;
pub mod query;
pub mod resource;

mod error;

pub use error::InvalidArgument;
pub use params::{StartRegionParams, StopRegionParams, UpdateProgramParams, UpdateTransactionParams};
pub use query::{QueryBuilder, ResourceRequest};
pub use resource::ResourceKind;
