use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::creditcard::NewCreditCard;
use crate::domain::search::{DEFAULT_LIMIT, SearchCriteria};

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Body of `POST /api/v1/creditcards/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchCreditCardsForm {
    #[serde(default)]
    pub input: SearchCriteria,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
}

/// One card in the `POST /api/v1/creditcards` batch.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewCreditCardForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub card_types: Vec<String>,
    #[serde(default)]
    pub check_uc: bool,
    #[serde(default)]
    pub bad_credit: bool,
}

/// Body of `POST /api/v1/creditcards`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCreditCardsForm {
    #[validate(length(min = 1), nested)]
    pub cards: Vec<NewCreditCardForm>,
}

impl From<NewCreditCardForm> for NewCreditCard {
    fn from(form: NewCreditCardForm) -> Self {
        NewCreditCard::new(
            form.name,
            form.amount,
            form.card_types,
            form.check_uc,
            form.bad_credit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_form_defaults_apply() {
        let form: SearchCreditCardsForm = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(form.input, SearchCriteria::default());
        assert_eq!(form.limit, DEFAULT_LIMIT);
        assert_eq!(form.offset, 0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn negative_limit_fails_validation() {
        let form: SearchCreditCardsForm =
            serde_json::from_value(serde_json::json!({"limit": -1})).unwrap();
        assert!(form.validate().is_err());
    }

    #[test]
    fn missing_optional_criteria_deserialize_to_none() {
        let form: SearchCreditCardsForm =
            serde_json::from_value(serde_json::json!({"input": {"name": "visa"}})).unwrap();
        assert_eq!(form.input.name.as_deref(), Some("visa"));
        assert_eq!(form.input.amount, None);
        assert_eq!(form.input.check_uc, None);
    }
}
