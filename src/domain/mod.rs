//! Domain types exposed by the card search service layer.

pub mod creditcard;
pub mod search;
