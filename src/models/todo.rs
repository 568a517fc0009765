use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Default page size when `limit` is absent or out of range.
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// A todo entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Surrogate key.
    pub id: i32,
    /// Id of the owning user. Every query on todos filters on this column.
    pub user_id: i32,
    /// The todo's title.
    pub title: String,
    /// Completion flag, `false` on creation.
    pub completed: bool,
    /// Timestamp of when the todo was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a todo. Only the title is caller-controlled.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
}

/// Input for a partial update. Absent fields leave the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Columns a todo listing may be sorted by.
///
/// The column name used in SQL always comes from this closed enumeration,
/// never from the request string, so a hostile `sort` parameter cannot reach
/// the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Title,
    Completed,
}

impl SortField {
    /// Resolves a raw query-string value; anything outside the allow-list
    /// falls back to `created_at`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "title" => SortField::Title,
            "completed" => SortField::Completed,
            _ => SortField::CreatedAt,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Title => "title",
            SortField::Completed => "completed",
        }
    }
}

/// Sort direction, falling back to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// The SQL keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// The query-string spelling, used when echoing applied filters.
    pub fn param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters accepted by the todo listing endpoint, all optional.
///
/// The accessor methods apply the defaulting and clamping rules, so handlers
/// never see raw out-of-range values.
#[derive(Debug, Default, Deserialize)]
pub struct TodoQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub completed: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl TodoQuery {
    /// Requested page, defaulting to 1 and clamped to >= 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10. Out-of-range values fall back to the
    /// default rather than erroring or saturating.
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Row offset implied by page and limit. Saturates rather than
    /// overflowing, since the page number is caller-controlled.
    pub fn offset(&self) -> i64 {
        self.page().saturating_sub(1).saturating_mul(self.limit())
    }

    /// Completion filter: only the exact strings "true" and "false" filter;
    /// anything else (including empty) means no filter.
    pub fn completed_filter(&self) -> Option<bool> {
        match self.completed.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    pub fn sort_field(&self) -> SortField {
        SortField::parse(self.sort.as_deref().unwrap_or("created_at"))
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(self.order.as_deref().unwrap_or("desc"))
    }
}
