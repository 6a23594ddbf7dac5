//! In-memory [`RoleStore`] backend.
//!
//! Backs the reconciliation property tests and any caller that wants the
//! catalog semantics without a database. Not durable.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use tutorhub_models::ids::{PermissionId, RoleId};
use tutorhub_models::roles::{Permission, Role};

use crate::error::StoreError;
use crate::store::RoleStore;

#[derive(Debug, Default)]
struct Inner {
    roles: HashMap<String, Role>,
    permissions: HashMap<String, Permission>,
    edges: HashMap<RoleId, BTreeSet<PermissionId>>,
}

/// A [`RoleStore`] holding all state in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    inner: RwLock<Inner>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a panicking test thread; the data is
    // plain maps, so recover the guard instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored roles.
    pub fn role_count(&self) -> usize {
        self.read().roles.len()
    }

    /// Number of stored permissions.
    pub fn permission_count(&self) -> usize {
        self.read().permissions.len()
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, StoreError> {
        Ok(self.read().roles.get(name).cloned())
    }

    async fn create_role_if_absent(&self, name: &str) -> Result<Role, StoreError> {
        let mut inner = self.write();
        let role = inner.roles.entry(name.to_string()).or_insert_with(|| {
            let now = chrono::Utc::now();
            Role {
                id: RoleId::new(),
                name: name.to_string(),
                created_at: now,
                updated_at: now,
            }
        });
        Ok(role.clone())
    }

    async fn create_permission_if_absent(&self, name: &str) -> Result<Permission, StoreError> {
        let mut inner = self.write();
        let permission = inner.permissions.entry(name.to_string()).or_insert_with(|| {
            let now = chrono::Utc::now();
            Permission {
                id: PermissionId::new(),
                name: name.to_string(),
                created_at: now,
                updated_at: now,
            }
        });
        Ok(permission.clone())
    }

    async fn resolve_permission_ids(
        &self,
        names: &[String],
    ) -> Result<Vec<(String, PermissionId)>, StoreError> {
        let inner = self.read();
        Ok(names
            .iter()
            .filter_map(|name| {
                inner
                    .permissions
                    .get(name)
                    .map(|permission| (name.clone(), permission.id))
            })
            .collect())
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<(), StoreError> {
        let mut inner = self.write();
        inner
            .edges
            .insert(role_id, permission_ids.iter().copied().collect());
        Ok(())
    }

    async fn role_permissions(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        let inner = self.read();
        let assigned = inner.edges.get(&role_id);
        let mut permissions: Vec<Permission> = inner
            .permissions
            .values()
            .filter(|permission| {
                assigned.is_some_and(|edge_set| edge_set.contains(&permission.id))
            })
            .cloned()
            .collect();
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError> {
        let inner = self.read();
        let mut permissions: Vec<Permission> = inner.permissions.values().cloned().collect();
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }
}
