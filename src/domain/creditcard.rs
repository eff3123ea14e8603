use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CreditCard {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    /// Tags the card belongs to; searched by membership, not equality.
    pub card_types: Vec<String>,
    pub check_uc: bool,
    pub bad_credit: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCreditCard {
    pub name: String,
    pub amount: f64,
    pub card_types: Vec<String>,
    pub check_uc: bool,
    pub bad_credit: bool,
}

impl NewCreditCard {
    #[must_use]
    pub fn new(
        name: String,
        amount: f64,
        card_types: Vec<String>,
        check_uc: bool,
        bad_credit: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            amount,
            card_types: card_types
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            check_uc,
            bad_credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_name_and_drops_blank_tags() {
        let card = NewCreditCard::new(
            " Visa Gold ".to_string(),
            1000.0,
            vec!["  platinum ".to_string(), "   ".to_string()],
            true,
            false,
        );
        assert_eq!(card.name, "Visa Gold");
        assert_eq!(card.card_types, vec!["platinum".to_string()]);
    }
}
