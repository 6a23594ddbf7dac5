//! Role and permission domain models.
//!
//! This module contains the entities behind role-based access control:
//! roles, permissions, and the assignment edge between them. Roles and
//! permissions are identified by globally unique names; the edge set is the
//! only mutable relation and is fully replaced on each reconciliation run.

use crate::ids::{PermissionId, RoleId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An atomic named capability (e.g., `can-manage-courses`).
///
/// Permissions are global, created once, and never deleted or renamed by the
/// reconciliation logic. Only the name carries semantics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A named bundle of permissions assignable to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A role together with its currently assigned permissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWithPermissions {
    #[serde(flatten)]
    pub role: Role,
    pub permissions: Vec<Permission>,
}

/// One edge of the role → permission assignment relation.
///
/// Rows are hard-removed when a permission leaves a role's declared set;
/// nothing is soft-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RolePermission {
    pub role_id: RoleId,
    pub permission_id: PermissionId,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
