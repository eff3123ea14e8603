use crate::domain::creditcard::NewCreditCard;
use crate::domain::search::{SearchCriteria, compose};
use crate::dto::search::SearchResponse;
use crate::repository::{CreditCardReader, CreditCardWriter};
use crate::services::{ServiceError, ServiceResult};

/// Runs a card search: normalizes the criteria, composes the query plan and
/// hands it to the repository.
pub fn search_creditcards<R>(
    repo: &R,
    input: SearchCriteria,
    limit: i64,
    offset: i64,
) -> ServiceResult<SearchResponse>
where
    R: CreditCardReader + ?Sized,
{
    let SearchCriteria {
        name,
        amount,
        card_types,
        check_uc,
        bad_credit,
    } = input;
    let criteria = SearchCriteria {
        name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        amount,
        card_types: card_types
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        check_uc,
        bad_credit,
    };

    let plan = compose(criteria, limit, offset)?;
    let (total, cards) = repo.search(&plan)?;

    Ok(SearchResponse { total, cards })
}

/// Persists a batch of cards returning the count of inserted rows.
pub fn create_creditcards<R>(repo: &R, new_cards: &[NewCreditCard]) -> ServiceResult<usize>
where
    R: CreditCardWriter + ?Sized,
{
    repo.create(new_cards).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::creditcard::CreditCard;
    use crate::domain::search::{Clause, QueryPlan};
    use crate::repository::errors::RepositoryResult;

    /// Captures the plan the service hands to the repository.
    struct RecordingRepository {
        last_plan: RefCell<Option<QueryPlan>>,
    }

    impl RecordingRepository {
        fn new() -> Self {
            Self {
                last_plan: RefCell::new(None),
            }
        }
    }

    impl CreditCardReader for RecordingRepository {
        fn get_by_id(&self, _id: i32) -> RepositoryResult<Option<CreditCard>> {
            Ok(None)
        }

        fn search(&self, plan: &QueryPlan) -> RepositoryResult<(usize, Vec<CreditCard>)> {
            *self.last_plan.borrow_mut() = Some(plan.clone());
            Ok((0, vec![]))
        }
    }

    #[test]
    fn trims_name_before_composing() {
        let repo = RecordingRepository::new();
        let input = SearchCriteria {
            name: Some("  visa ".to_string()),
            ..Default::default()
        };

        search_creditcards(&repo, input, 10, 0).unwrap();

        let plan = repo.last_plan.borrow().clone().unwrap();
        assert_eq!(plan.clauses, vec![Clause::NameContains("visa".to_string())]);
    }

    #[test]
    fn blank_name_is_treated_as_absent() {
        let repo = RecordingRepository::new();
        let input = SearchCriteria {
            name: Some("   ".to_string()),
            ..Default::default()
        };

        search_creditcards(&repo, input, 10, 0).unwrap();

        let plan = repo.last_plan.borrow().clone().unwrap();
        assert!(plan.clauses.is_empty());
    }

    #[test]
    fn negative_limit_never_reaches_the_repository() {
        let repo = RecordingRepository::new();

        let err = search_creditcards(&repo, SearchCriteria::default(), -5, 0).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(repo.last_plan.borrow().is_none());
    }
}
