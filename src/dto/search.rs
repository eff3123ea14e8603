use serde::{Deserialize, Serialize};

use crate::domain::creditcard::CreditCard;

/// Result payload returned by the card search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of cards matching the filter, ignoring pagination.
    pub total: usize,
    /// Page of cards requested by the caller.
    pub cards: Vec<CreditCard>,
}
