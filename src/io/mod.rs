//! Input/output boundary.
//!
//! - request JSON parsing + validation (`request`)
//! - response envelope assembly + writing (`response`)

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
