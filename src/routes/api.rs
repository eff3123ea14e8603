use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::creditcard::NewCreditCard;
use crate::forms::search::{CreateCreditCardsForm, SearchCreditCardsForm};
use crate::repository::creditcard::DieselCreditCardRepository;
use crate::routes::service_error_response;
use crate::services::creditcard::{create_creditcards, search_creditcards};

#[post("/v1/creditcards/search")]
pub async fn api_v1_search_creditcards(
    form: web::Json<SearchCreditCardsForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let form = form.into_inner();
    if let Err(e) = form.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let repo = DieselCreditCardRepository::new(&pool);

    match search_creditcards(&repo, form.input, form.limit, form.offset) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => service_error_response(e),
    }
}

#[post("/v1/creditcards")]
pub async fn api_v1_create_creditcards(
    form: web::Json<CreateCreditCardsForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let form = form.into_inner();
    if let Err(e) = form.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let repo = DieselCreditCardRepository::new(&pool);
    let new_cards: Vec<NewCreditCard> = form.cards.into_iter().map(Into::into).collect();

    match create_creditcards(&repo, &new_cards) {
        Ok(inserted) => HttpResponse::Created().json(json!({ "inserted": inserted })),
        Err(e) => service_error_response(e),
    }
}
