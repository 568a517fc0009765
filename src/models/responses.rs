//! Response bodies, one struct per endpoint.
//!
//! Every success response serializes through one of these fixed schemas
//! rather than an ad-hoc JSON map.

use serde::{Deserialize, Serialize};

use super::todo::Todo;
use super::user::UserSummary;

/// `POST /register` success body.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

/// `POST /login` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// `GET /api/me` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub message: String,
    pub user_id: i32,
}

/// Echo of the filter set a listing was evaluated with. `sort` and `order`
/// carry the resolved values after allow-list fallback; `search` and
/// `completed` echo the raw inputs.
#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub search: String,
    pub completed: String,
    pub sort: &'static str,
    pub order: &'static str,
}

/// `GET /api/todos` success body.
///
/// Carries the requested page slice only; no total record count, so callers
/// cannot derive the total page count from this response alone.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub page: i64,
    pub limit: i64,
    pub filters: AppliedFilters,
    pub results: Vec<Todo>,
}

/// `DELETE /api/todos/{id}` success body.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}
