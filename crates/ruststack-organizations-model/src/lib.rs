//! AWS Organizations model types for RustStack.
//!
//! Request, response and value shapes of the Organizations API
//! (`2016-11-28`), together with the `awsJson1_1` codec that moves them on
//! and off the wire. Like the other JSON-protocol model crates, the shapes
//! are plain serde structs; constraints are documented on the fields and
//! only checked on request through [`validate::Validate`].
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod timestamp;
pub mod types;
pub mod validate;

pub use codec::CodecError;
pub use config::OrganizationsConfig;
pub use error::{OrganizationsError, OrganizationsErrorCode};
pub use operations::OrganizationsOperation;
pub use request::OrganizationsRequest;
pub use validate::Validate;
