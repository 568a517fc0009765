use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthenticatedUserId, LoginRequest,
        RegisterRequest,
    },
    error::AppError,
    models::responses::{LoginResponse, MeResponse, RegisterResponse},
    models::{User, UserSummary},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user.
///
/// Hashes the password, persists the account, and returns the public user
/// summary. The email must not already be registered; duplicates fail with a
/// 400 regardless of the other fields.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&register_data.email)
        .fetch_optional(&**pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::Validation("Email already registered".into()));
    }

    let password_hash = hash_password(&register_data.password)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
         RETURNING id, name, email, password_hash, created_at",
    )
    .bind(&register_data.name)
    .bind(&register_data.email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".into(),
        user: UserSummary::from(user),
    }))
}

/// Authenticate a user and issue a session token.
///
/// Unknown email and wrong password produce the same generic 401, so the
/// endpoint cannot be used to probe which addresses are registered.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user: Option<User> = sqlx::query_as(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    match user {
        Some(user) => {
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(user.id)?;
                Ok(HttpResponse::Ok().json(LoginResponse {
                    message: "Login successful".into(),
                    token,
                }))
            } else {
                Err(AppError::Unauthorized("Invalid email or password".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid email or password".into())),
    }
}

/// Returns the identity resolved from the bearer token.
#[get("/me")]
pub async fn me(user: AuthenticatedUserId) -> impl Responder {
    HttpResponse::Ok().json(MeResponse {
        message: "Protected area".into(),
        user_id: user.0,
    })
}
