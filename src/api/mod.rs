//! HTTP API module for the employee record store.
//!
//! This module exposes the record store as a small JSON API: list with
//! search, fetch, create, update and confirmed delete.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeleteParams, SearchParams};
pub use response::{ApiError, ApiErrorResponse, EmployeeView, ListResponse, MutationResponse};
pub use state::AppState;
