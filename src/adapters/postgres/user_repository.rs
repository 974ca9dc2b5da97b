//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{BodyMetrics, Email, User};
use crate::ports::UserRepository;

use super::error::write_error;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_USER: &str = r#"
    SELECT id, email, password_hash, height_cm, goal_weight_kg, created_at, updated_at
    FROM users
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, height_cm, goal_weight_kg, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(user.password_hash())
        .bind(user.metrics().height_cm)
        .bind(user.metrics().goal_weight_kg)
        .bind(user.created_at().as_datetime())
        .bind(user.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("insert user", e))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE email = $1", SELECT_USER))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch user by email", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn update_metrics(&self, id: &UserId, metrics: &BodyMetrics) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET height_cm = $2, goal_weight_kg = $3, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(metrics.height_cm)
        .bind(metrics.goal_weight_kg)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update user metrics", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let map = |e: sqlx::Error| DomainError::database("decode user row", e);

    let id: Uuid = row.try_get("id").map_err(map)?;
    let email: String = row.try_get("email").map_err(map)?;
    let email = Email::new(email).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Stored email is invalid: {}", e))
    })?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map)?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        email,
        row.try_get("password_hash").map_err(map)?,
        BodyMetrics {
            height_cm: row.try_get("height_cm").map_err(map)?,
            goal_weight_kg: row.try_get("goal_weight_kg").map_err(map)?,
        },
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
