//! User domain model.
//!
//! Reconciliation never writes users; this row exists for the read-after-write
//! verification report, which looks a user up by email and lists their roles
//! and effective permissions.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// The user's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
