//! Request and response DTOs for the REST API.

pub mod link;
pub mod range;
