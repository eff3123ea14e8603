//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::creditcard::{CreditCard, NewCreditCard};
use crate::domain::search::QueryPlan;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CreditCardReader, CreditCardWriter};

mock! {
    pub Repository {}

    impl CreditCardReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<CreditCard>>;
        fn search(&self, plan: &QueryPlan) -> RepositoryResult<(usize, Vec<CreditCard>)>;
    }

    impl CreditCardWriter for Repository {
        fn create(&self, new_cards: &[NewCreditCard]) -> RepositoryResult<usize>;
    }
}
