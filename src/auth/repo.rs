use crate::auth::repo_types::{NewUser, User};
use sqlx::PgPool;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, avatar, date_of_birth, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user row. Uniqueness and email format are enforced by the
    /// schema; a violation comes back as the database's own error, untouched.
    pub async fn create(db: &PgPool, new_user: &NewUser<'_>) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name, avatar, date_of_birth)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, full_name, avatar, date_of_birth, created_at
            "#,
        )
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.full_name)
        .bind(new_user.avatar)
        .bind(new_user.date_of_birth)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
