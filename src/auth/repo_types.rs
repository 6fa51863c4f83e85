use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 PHC string, not exposed in JSON
    pub full_name: String,
    pub avatar: Option<String>,
    pub date_of_birth: Option<Date>,
    pub created_at: OffsetDateTime,
}

/// Column values for a user INSERT. Whether they land is decided by the
/// schema constraints, not here.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: &'a str,
    pub avatar: Option<&'a str>,
    pub date_of_birth: Option<Date>,
}
