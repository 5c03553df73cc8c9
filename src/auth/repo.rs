use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use crate::auth::dto::PublicUser;
use crate::auth::repo_types::User;
use crate::error::{Error, Result};

/// Persistence seam for user records. Injected into the service so tests can
/// substitute an in-memory store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user matching both email and role exactly.
    async fn find_by_email_and_role(&self, email: &str, role: &str) -> Result<Option<User>>;

    /// Find a user by email alone. When the same email exists under several
    /// roles, which row wins is unspecified.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user row, returning only its public columns.
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<PublicUser>;
}

/// Postgres-backed store over the `users` table.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email_and_role(&self, email: &str, role: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role, created_at, updated_at
            FROM users
            WHERE email = $1 AND role = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, %email, %role, "user lookup error");
            Error::from(e)
        })?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role, created_at, updated_at
            FROM users
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, %email, "user lookup error");
            Error::from(e)
        })?;
        Ok(user)
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<PublicUser> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // Two concurrent creates can both pass the lookup; the unique
            // constraint on (email, role) catches the loser here.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                error!(error = %db, %email, %role, "user insert error: account already exists");
                Error::DuplicateAccount
            }
            other => {
                error!(error = %other, %email, "user insert error");
                Error::from(other)
            }
        })?;
        Ok(user)
    }
}
