pub mod responses;
pub mod todo;
pub mod user;

pub use todo::{CreateTodoRequest, SortField, SortOrder, Todo, TodoQuery, UpdateTodoRequest};
pub use user::{User, UserSummary};
