//! Domain layer: the link entity and its repository contract.

pub mod entities;
pub mod repositories;
