use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use netbill_core::Money;
use netbill_statements::amount_in_words;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/amount-words", get(get_amount_words))
}

/// Words rendering for printed receipts.
pub async fn get_amount_words(
    Query(query): Query<dto::AmountWordsQuery>,
) -> axum::response::Response {
    let amount = Money::from_paisa(query.paisa);
    match amount_in_words(amount) {
        Ok(words) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "paisa": amount,
                "words": words,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
