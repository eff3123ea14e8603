use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbPool,
    domain::{
        creditcard::{CreditCard, NewCreditCard},
        search::{Clause, QueryPlan},
    },
    repository::{CreditCardReader, CreditCardWriter, errors::RepositoryResult},
    schema::{card_tags, creditcards},
};

/// Diesel implementation of [`CreditCardReader`] and [`CreditCardWriter`].
pub struct DieselCreditCardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCreditCardRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// Folds the plan's clauses into one boxed query. Each clause becomes a
/// `.filter(..)` call, so the conjunction and the parameter binding are left
/// to Diesel. Tag membership is a semijoin on `card_tags`.
fn filtered(plan: &QueryPlan) -> creditcards::BoxedQuery<'static, Sqlite> {
    let mut query = creditcards::table.into_boxed();
    for clause in &plan.clauses {
        query = match clause {
            Clause::NameContains(fragment) => {
                // SQLite LIKE is case-insensitive for ASCII.
                query.filter(creditcards::name.like(format!("%{fragment}%")))
            }
            Clause::AmountAtLeast(min) => query.filter(creditcards::amount.ge(*min)),
            Clause::HasCardType(tag) => {
                let tagged = card_tags::table
                    .filter(card_tags::tag.eq(tag.clone()))
                    .select(card_tags::card_id);
                query.filter(creditcards::id.eq_any(tagged))
            }
            Clause::CheckUc(value) => query.filter(creditcards::check_uc.eq(*value)),
            Clause::BadCredit(value) => query.filter(creditcards::bad_credit.eq(*value)),
        };
    }
    query
}

impl CreditCardReader for DieselCreditCardRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<CreditCard>> {
        use crate::models::creditcard::CreditCard as DbCreditCard;

        let mut conn = self.pool.get()?;
        let card = creditcards::table
            .find(id)
            .first::<DbCreditCard>(&mut conn)
            .optional()?;

        let Some(card) = card else {
            return Ok(None);
        };

        let tags = card_tags::table
            .filter(card_tags::card_id.eq(card.id))
            .select(card_tags::tag)
            .order(card_tags::tag.asc())
            .load::<String>(&mut conn)?;

        Ok(Some(card.into_domain(tags)))
    }

    fn search(&self, plan: &QueryPlan) -> RepositoryResult<(usize, Vec<CreditCard>)> {
        use crate::models::creditcard::{CardTag as DbCardTag, CreditCard as DbCreditCard};

        let mut conn = self.pool.get()?;

        let total: i64 = filtered(plan).count().get_result(&mut conn)?;

        let rows = filtered(plan)
            .order(creditcards::id.asc())
            .limit(plan.limit)
            .offset(plan.offset)
            .load::<DbCreditCard>(&mut conn)?;

        let tags = DbCardTag::belonging_to(&rows)
            .order(card_tags::tag.asc())
            .load::<DbCardTag>(&mut conn)?
            .grouped_by(&rows);

        let cards = rows
            .into_iter()
            .zip(tags)
            .map(|(row, tags)| row.into_domain(tags.into_iter().map(|t| t.tag).collect()))
            .collect();

        Ok((total as usize, cards))
    }
}

impl CreditCardWriter for DieselCreditCardRepository<'_> {
    fn create(&self, new_cards: &[NewCreditCard]) -> RepositoryResult<usize> {
        use crate::models::creditcard::{
            CreditCard as DbCreditCard, NewCardTag as DbNewCardTag,
            NewCreditCard as DbNewCreditCard,
        };

        let mut conn = self.pool.get()?;

        let inserted = conn.transaction::<usize, DieselError, _>(|conn| {
            let mut inserted = 0;
            for card in new_cards {
                let insertable: DbNewCreditCard = card.into();
                let row: DbCreditCard = diesel::insert_into(creditcards::table)
                    .values(&insertable)
                    .get_result(conn)?;

                let tag_rows: Vec<DbNewCardTag> = card
                    .card_types
                    .iter()
                    .map(|tag| DbNewCardTag {
                        card_id: row.id,
                        tag,
                    })
                    .collect();
                diesel::insert_into(card_tags::table)
                    .values(&tag_rows)
                    .execute(conn)?;

                inserted += 1;
            }
            Ok(inserted)
        })?;

        Ok(inserted)
    }
}
