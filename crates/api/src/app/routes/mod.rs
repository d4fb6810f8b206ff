use axum::Router;

pub mod customers;
pub mod receipts;
pub mod system;

/// Router for all billing endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/receipts", receipts::router())
}
