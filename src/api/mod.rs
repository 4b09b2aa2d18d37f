pub mod routes;
pub mod handlers;
pub mod ws;
pub mod extract;
mod error_response;

pub use routes::{build_router, AppState};
