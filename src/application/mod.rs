//! Application layer: business logic over the domain repositories.

pub mod services;
