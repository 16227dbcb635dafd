//! User repository
//!
//! Database operations for users.

use async_trait::async_trait;
use cm_core::traits::Id;
use cm_models::User;
use sqlx::PgPool;

use crate::repository::{RepositoryError, RepositoryResult};
use crate::store::UserStore;

/// Message returned when a username is already registered
pub const USERNAME_TAKEN: &str = "Username already registered";

/// DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    /// Argon2 digest, never the plain password
    pub password: String,
    pub name: String,
}

/// DTO for updating a user
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// User repository implementation
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, dto: CreateUserDto) -> RepositoryResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, username, password, name, token, created_at, updated_at
            "#,
        )
        .bind(&dto.username)
        .bind(&dto.password)
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::on_unique_violation(e, "username", USERNAME_TAKEN))?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, name, token, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, name, token, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, name, token, created_at, updated_at
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Id, dto: UpdateUserDto) -> RepositoryResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                name = COALESCE($1, name),
                password = COALESCE($2, password),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, username, password, name, token, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.password)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound("User"))?;

        Ok(row)
    }

    async fn set_token(&self, id: Id, token: Option<&str>) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE users SET token = $1, updated_at = NOW() WHERE id = $2")
            .bind(token)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("User"));
        }

        Ok(())
    }
}
