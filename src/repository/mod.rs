use crate::{
    domain::{
        creditcard::{CreditCard, NewCreditCard},
        search::QueryPlan,
    },
    repository::errors::RepositoryResult,
};

pub mod creditcard;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub trait CreditCardReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<CreditCard>>;
    /// Executes the plan, returning the total number of matching cards and
    /// the requested page.
    fn search(&self, plan: &QueryPlan) -> RepositoryResult<(usize, Vec<CreditCard>)>;
}

pub trait CreditCardWriter {
    fn create(&self, new_cards: &[NewCreditCard]) -> RepositoryResult<usize>;
}
