use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::responses::{AppliedFilters, DeleteTodoResponse, TodoListResponse},
    models::{CreateTodoRequest, Todo, TodoQuery, UpdateTodoRequest},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

const TODO_COLUMNS: &str = "id, user_id, title, completed, created_at";

/// Retrieves a page of the authenticated user's todos.
///
/// ## Query Parameters:
/// - `page` (optional): page number, default 1, clamped to >= 1.
/// - `limit` (optional): page size, default 10; values outside [1,100] fall
///   back to the default.
/// - `search` (optional): case-insensitive substring match on the title.
/// - `completed` (optional): "true" or "false" filters exactly; any other
///   value means no filter.
/// - `sort` (optional): one of created_at, title, completed; anything else
///   falls back to created_at.
/// - `order` (optional): asc or desc, default desc.
///
/// The response echoes the applied filters alongside the page slice. It does
/// not include a total record count.
#[get("")]
pub async fn list_todos(
    pool: web::Data<PgPool>,
    query_params: web::Query<TodoQuery>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let query_params = query_params.into_inner();

    let page = query_params.page();
    let limit = query_params.limit();
    let completed_filter = query_params.completed_filter();
    let sort_field = query_params.sort_field();
    let sort_order = query_params.sort_order();

    // Owner scoping first; search and completion filters are appended with
    // numbered placeholders so every caller-supplied value is bound, never
    // interpolated. Sort column and direction come from closed enums.
    let mut sql = format!("SELECT {} FROM todos WHERE user_id = $1", TODO_COLUMNS);
    let mut param_count = 2;

    if query_params.search.is_some() {
        sql.push_str(&format!(" AND title ILIKE ${}", param_count));
        param_count += 1;
    }
    if completed_filter.is_some() {
        sql.push_str(&format!(" AND completed = ${}", param_count));
        param_count += 1;
    }

    sql.push_str(&format!(
        " ORDER BY {} {} OFFSET ${} LIMIT ${}",
        sort_field.column(),
        sort_order.keyword(),
        param_count,
        param_count + 1
    ));

    let mut query_builder = sqlx::query_as::<_, Todo>(&sql).bind(user.0);

    if let Some(search) = &query_params.search {
        query_builder = query_builder.bind(format!("%{}%", search));
    }
    if let Some(completed) = completed_filter {
        query_builder = query_builder.bind(completed);
    }

    let results = query_builder
        .bind(query_params.offset())
        .bind(limit)
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(TodoListResponse {
        page,
        limit,
        filters: AppliedFilters {
            search: query_params.search.clone().unwrap_or_default(),
            completed: query_params.completed.clone().unwrap_or_default(),
            sort: sort_field.column(),
            order: sort_order.param(),
        },
        results,
    }))
}

/// Creates a new todo for the authenticated user.
///
/// The title is required and must be non-empty; the todo starts uncompleted.
///
/// ## Responses:
/// - `201 Created`: the new `Todo` as JSON.
/// - `400 Bad Request`: empty or missing title.
/// - `401 Unauthorized`: missing or invalid token.
/// - `500 Internal Server Error`: store failure.
#[post("")]
pub async fn create_todo(
    pool: web::Data<PgPool>,
    todo_data: web::Json<CreateTodoRequest>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo: Todo = sqlx::query_as(&format!(
        "INSERT INTO todos (user_id, title) VALUES ($1, $2) RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(user.0)
    .bind(&todo_data.title)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(todo))
}

/// Applies a partial update to one of the authenticated user's todos.
///
/// Absent fields keep their stored values. A todo that does not exist, or
/// belongs to another user, yields the same 404.
#[put("/{id}")]
pub async fn update_todo(
    pool: web::Data<PgPool>,
    todo_id: web::Path<i32>,
    todo_data: web::Json<UpdateTodoRequest>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let todo_id = todo_id.into_inner();

    let existing: Option<Todo> = sqlx::query_as(&format!(
        "SELECT {} FROM todos WHERE id = $1 AND user_id = $2",
        TODO_COLUMNS
    ))
    .bind(todo_id)
    .bind(user.0)
    .fetch_optional(&**pool)
    .await?;

    let existing = existing.ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    let todo_data = todo_data.into_inner();
    let title = todo_data.title.unwrap_or(existing.title);
    let completed = todo_data.completed.unwrap_or(existing.completed);

    let updated: Todo = sqlx::query_as(&format!(
        "UPDATE todos SET title = $1, completed = $2
         WHERE id = $3 AND user_id = $4 RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(&title)
    .bind(completed)
    .bind(todo_id)
    .bind(user.0)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes one of the authenticated user's todos.
///
/// The ownership rule matches update: a todo owned by someone else is
/// indistinguishable from a missing one.
#[delete("/{id}")]
pub async fn delete_todo(
    pool: web::Data<PgPool>,
    todo_id: web::Path<i32>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
        .bind(todo_id.into_inner())
        .bind(user.0)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(HttpResponse::Ok().json(DeleteTodoResponse {
        message: "Todo deleted successfully".into(),
    }))
}
