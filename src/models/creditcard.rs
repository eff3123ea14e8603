use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::creditcard::{
    CreditCard as DomainCreditCard, NewCreditCard as DomainNewCreditCard,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::creditcards)]
/// Diesel model for [`crate::domain::creditcard::CreditCard`].
pub struct CreditCard {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub check_uc: bool,
    pub bad_credit: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::card_tags)]
#[diesel(belongs_to(CreditCard, foreign_key = card_id))]
#[diesel(primary_key(card_id, tag))]
/// One tag of a card's multi-valued `card_types` attribute.
pub struct CardTag {
    pub card_id: i32,
    pub tag: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::creditcards)]
/// Insertable form of [`CreditCard`]. Tag rows are inserted separately.
pub struct NewCreditCard<'a> {
    pub name: &'a str,
    pub amount: f64,
    pub check_uc: bool,
    pub bad_credit: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::card_tags)]
pub struct NewCardTag<'a> {
    pub card_id: i32,
    pub tag: &'a str,
}

impl CreditCard {
    /// Combines the row with its tag rows into the domain aggregate.
    pub fn into_domain(self, card_types: Vec<String>) -> DomainCreditCard {
        DomainCreditCard {
            id: self.id,
            name: self.name,
            amount: self.amount,
            card_types,
            check_uc: self.check_uc,
            bad_credit: self.bad_credit,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCreditCard> for NewCreditCard<'a> {
    fn from(card: &'a DomainNewCreditCard) -> Self {
        Self {
            name: card.name.as_str(),
            amount: card.amount,
            check_uc: card.check_uc,
            bad_credit: card.bad_credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewCreditCard::new(
            "Visa Gold".to_string(),
            1200.0,
            vec!["gold".to_string()],
            true,
            false,
        );
        let new: NewCreditCard = (&domain).into();
        assert_eq!(new.name, "Visa Gold");
        assert_eq!(new.amount, 1200.0);
        assert!(new.check_uc);
        assert!(!new.bad_credit);
    }

    #[test]
    fn row_into_domain_attaches_tags() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let row = CreditCard {
            id: 7,
            name: "Mastercard".to_string(),
            amount: 300.0,
            check_uc: false,
            bad_credit: true,
            created_at: now,
            updated_at: now,
        };
        let domain = row.into_domain(vec!["credit".to_string(), "platinum".to_string()]);
        assert_eq!(domain.id, 7);
        assert_eq!(domain.name, "Mastercard");
        assert_eq!(domain.amount, 300.0);
        assert_eq!(
            domain.card_types,
            vec!["credit".to_string(), "platinum".to_string()]
        );
        assert!(!domain.check_uc);
        assert!(domain.bad_credit);
        assert_eq!(domain.created_at, now);
    }
}
