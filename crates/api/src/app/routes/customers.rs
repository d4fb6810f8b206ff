use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use netbill_core::{CustomerId, InvoiceId, Money};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_customer).get(list_customers))
        .route("/:id", get(get_customer))
        .route("/:id/invoices", post(record_invoice))
        .route("/:id/payments", post(record_payment))
        .route("/:id/statement", get(get_statement))
}

fn parse_customer_id(raw: &str) -> Result<CustomerId, axum::response::Response> {
    CustomerId::from_str(raw).map_err(errors::domain_error_to_response)
}

pub async fn register_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterCustomerRequest>,
) -> axum::response::Response {
    match services.register_customer(
        body.name,
        body.contact,
        Money::from_paisa(body.opening_balance_paisa),
    ) {
        Ok(customer) => {
            (StatusCode::CREATED, Json(dto::customer_to_json(&customer))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .customer_list()
        .iter()
        .map(dto::customer_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_customer_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.customer_get(id) {
        Some(customer) => (StatusCode::OK, Json(dto::customer_to_json(&customer))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "customer not found"),
    }
}

pub async fn record_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::RecordInvoiceRequest>,
) -> axum::response::Response {
    let id = match parse_customer_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let issued_at = match dto::parse_rfc3339("issued_at", &body.issued_at) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let due_date = match dto::parse_rfc3339("due_date", &body.due_date) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.record_invoice(
        id,
        Money::from_paisa(body.amount_paisa),
        issued_at,
        due_date,
        body.description.unwrap_or_default(),
    ) {
        Ok(invoice) => (StatusCode::CREATED, Json(dto::invoice_to_json(&invoice))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn record_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::RecordPaymentRequest>,
) -> axum::response::Response {
    let id = match parse_customer_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let invoice_id = match InvoiceId::from_str(&body.invoice_id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let received_at = match dto::parse_rfc3339("received_at", &body.received_at) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.record_payment(
        id,
        invoice_id,
        Money::from_paisa(body.amount_paisa),
        received_at,
        body.method,
    ) {
        Ok(payment) => (StatusCode::CREATED, Json(dto::payment_to_json(&payment))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_customer_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.statement_for(id) {
        Ok(statement) => (
            StatusCode::OK,
            Json(dto::statement_to_json(id, &statement)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
