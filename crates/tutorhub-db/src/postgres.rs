//! Postgres-backed [`RoleStore`].
//!
//! Queries are runtime-checked (`sqlx::query*` with `.bind`) so the crate
//! builds without a live database. The replace-edge-set operation loads the
//! current edge set, computes the difference against the desired set, and
//! applies the deletes and inserts inside a single transaction.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use tutorhub_models::ids::{PermissionId, RoleId};
use tutorhub_models::roles::{Permission, Role, RolePermission};
use tutorhub_rbac::{RoleStore, StoreError};

/// [`RoleStore`] implementation over a Postgres pool.
#[derive(Debug, Clone)]
pub struct PostgresRoleStore {
    pool: PgPool,
}

impl PostgresRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for callers that need reporting reads beyond the
    /// store interface.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn store_err(err: sqlx::Error) -> StoreError {
    StoreError::unavailable(err)
}

#[async_trait]
impl RoleStore for PostgresRoleStore {
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, StoreError> {
        sqlx::query_as::<_, Role>(
            "SELECT id, name, created_at, updated_at FROM roles WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)
    }

    async fn create_role_if_absent(&self, name: &str) -> Result<Role, StoreError> {
        let inserted = sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name) VALUES ($1)
             ON CONFLICT (name) DO NOTHING
             RETURNING id, name, created_at, updated_at",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        if let Some(role) = inserted {
            debug!(role = %role.name, role_id = %role.id, "created role");
            return Ok(role);
        }

        // Conflict path: the row already existed, fetch it.
        self.find_role_by_name(name).await?.ok_or_else(|| {
            StoreError::unavailable(anyhow::anyhow!(
                "role '{name}' vanished between insert and select"
            ))
        })
    }

    async fn create_permission_if_absent(&self, name: &str) -> Result<Permission, StoreError> {
        let inserted = sqlx::query_as::<_, Permission>(
            "INSERT INTO permissions (name) VALUES ($1)
             ON CONFLICT (name) DO NOTHING
             RETURNING id, name, created_at, updated_at",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        if let Some(permission) = inserted {
            debug!(permission = %permission.name, "created permission");
            return Ok(permission);
        }

        sqlx::query_as::<_, Permission>(
            "SELECT id, name, created_at, updated_at FROM permissions WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?
        .ok_or_else(|| {
            StoreError::unavailable(anyhow::anyhow!(
                "permission '{name}' vanished between insert and select"
            ))
        })
    }

    async fn resolve_permission_ids(
        &self,
        names: &[String],
    ) -> Result<Vec<(String, PermissionId)>, StoreError> {
        sqlx::query_as::<_, (String, PermissionId)>(
            "SELECT name, id FROM permissions WHERE name = ANY($1)",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        let current: Vec<RolePermission> = sqlx::query_as::<_, RolePermission>(
            "SELECT role_id, permission_id, created_at FROM role_permissions WHERE role_id = $1",
        )
        .bind(role_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(store_err)?;

        let desired: HashSet<PermissionId> = permission_ids.iter().copied().collect();
        let current_set: HashSet<PermissionId> =
            current.iter().map(|edge| edge.permission_id).collect();

        let to_remove: Vec<PermissionId> = current
            .into_iter()
            .map(|edge| edge.permission_id)
            .filter(|id| !desired.contains(id))
            .collect();
        let mut queued = HashSet::new();
        let to_add: Vec<PermissionId> = permission_ids
            .iter()
            .copied()
            .filter(|id| !current_set.contains(id) && queued.insert(*id))
            .collect();

        if !to_remove.is_empty() {
            sqlx::query(
                "DELETE FROM role_permissions WHERE role_id = $1 AND permission_id = ANY($2)",
            )
            .bind(role_id)
            .bind(&to_remove)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;
        }

        if !to_add.is_empty() {
            // Multi-value INSERT: ($1, $2), ($1, $3), ...
            let mut query =
                String::from("INSERT INTO role_permissions (role_id, permission_id) VALUES ");
            for (i, _) in to_add.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push_str(&format!("($1, ${})", i + 2));
            }
            query.push_str(" ON CONFLICT (role_id, permission_id) DO NOTHING");

            let mut q = sqlx::query(&query).bind(role_id);
            for id in &to_add {
                q = q.bind(*id);
            }
            q.execute(&mut *tx).await.map_err(store_err)?;
        }

        tx.commit().await.map_err(store_err)?;

        debug!(
            role_id = %role_id,
            added = to_add.len(),
            removed = to_remove.len(),
            "replaced role permission edges"
        );
        Ok(())
    }

    async fn role_permissions(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        sqlx::query_as::<_, Permission>(
            "SELECT p.id, p.name, p.created_at, p.updated_at
             FROM permissions p
             INNER JOIN role_permissions rp ON p.id = rp.permission_id
             WHERE rp.role_id = $1
             ORDER BY p.name",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError> {
        sqlx::query_as::<_, Permission>(
            "SELECT id, name, created_at, updated_at FROM permissions ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }
}
