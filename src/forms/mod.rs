//! Deserialization and validation of HTTP request bodies.

pub mod search;
