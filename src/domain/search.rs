//! Search criteria and the query plan they compile into.
//!
//! [`compose`] is a pure transformation: it never touches the database, it
//! only decides which predicate clauses a request contributes. The repository
//! layer executes the resulting [`QueryPlan`] as a single AND-conjunction.

use serde::Deserialize;
use thiserror::Error;

/// Default page size applied when a request omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Optional search parameters for credit cards.
///
/// `None` means "no constraint on this field", never "match empty/false".
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub card_types: Option<String>,
    pub check_uc: Option<bool>,
    pub bad_credit: Option<bool>,
}

/// A single bound predicate contributed by one present criteria field.
///
/// Values ride inside the variant and are bound as query parameters by the
/// repository, never interpolated into SQL text.
#[derive(Clone, Debug, PartialEq)]
pub enum Clause {
    /// Case-insensitive substring match on the card name.
    NameContains(String),
    /// Inclusive lower bound on the amount.
    AmountAtLeast(f64),
    /// The value is one of the card's tags.
    HasCardType(String),
    CheckUc(bool),
    BadCredit(bool),
}

/// An ordered conjunction of clauses plus pagination, ready for execution.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPlan {
    pub clauses: Vec<Clause>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Builds the query plan for the given criteria and pagination.
///
/// Fields are evaluated in declaration order (name, amount, card_types,
/// check_uc, bad_credit) so that equivalent requests always produce the same
/// clause sequence.
pub fn compose(criteria: SearchCriteria, limit: i64, offset: i64) -> Result<QueryPlan, PlanError> {
    if limit < 0 {
        return Err(PlanError::InvalidArgument(format!(
            "limit must be non-negative, got {limit}"
        )));
    }
    if offset < 0 {
        return Err(PlanError::InvalidArgument(format!(
            "offset must be non-negative, got {offset}"
        )));
    }

    let mut clauses = Vec::new();

    if let Some(name) = criteria.name
        && !name.is_empty()
    {
        clauses.push(Clause::NameContains(name));
    }
    if let Some(amount) = criteria.amount {
        clauses.push(Clause::AmountAtLeast(amount));
    }
    if let Some(tag) = criteria.card_types {
        clauses.push(Clause::HasCardType(tag));
    }
    // The flags only ever filter for `true`: an explicit `false` is treated
    // the same as an absent flag and contributes no clause. Callers that want
    // "flag is false" cannot express it through this operation.
    if criteria.check_uc == Some(true) {
        clauses.push(Clause::CheckUc(true));
    }
    if criteria.bad_credit == Some(true) {
        clauses.push(Clause::BadCredit(true));
    }

    Ok(QueryPlan {
        clauses,
        limit,
        offset,
    })
}
