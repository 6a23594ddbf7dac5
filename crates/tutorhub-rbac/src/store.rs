//! The persistence interface the reconciliation core depends on.
//!
//! The core needs exactly: find-by-name and create-if-absent for roles and
//! permissions, name → id resolution, and a "replace all edges from role X"
//! bulk operation. Anything beyond that (user lookup, reporting reads) lives
//! with the caller.

use async_trait::async_trait;

use tutorhub_models::ids::{PermissionId, RoleId};
use tutorhub_models::roles::{Permission, Role};

use crate::error::StoreError;

/// Storage operations for roles, permissions, and their assignment edges.
///
/// Implementations: `PostgresRoleStore` in `tutorhub-db` for production,
/// [`InMemoryRoleStore`](crate::InMemoryRoleStore) for tests.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Look up a role by its unique name.
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, StoreError>;

    /// Create a role with the given name if none exists, returning the
    /// stored row either way. Never errors on re-invocation.
    async fn create_role_if_absent(&self, name: &str) -> Result<Role, StoreError>;

    /// Create a permission with the given name if none exists, returning the
    /// stored row either way.
    async fn create_permission_if_absent(&self, name: &str) -> Result<Permission, StoreError>;

    /// Resolve permission names to stored ids.
    ///
    /// Only names with a matching stored permission are returned; callers
    /// decide whether a missing name is an error.
    async fn resolve_permission_ids(
        &self,
        names: &[String],
    ) -> Result<Vec<(String, PermissionId)>, StoreError>;

    /// Replace the role's assignment edge set with exactly the given
    /// permission ids. A full overwrite, not a union.
    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<(), StoreError>;

    /// The permissions currently assigned to a role, ordered by name.
    async fn role_permissions(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError>;

    /// All stored permissions, ordered by name.
    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError>;
}
