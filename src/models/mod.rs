//! Database models shared across the repository.

pub mod config;
pub mod creditcard;
