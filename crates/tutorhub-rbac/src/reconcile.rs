//! Reconciliation of stored role/permission state against a catalog.
//!
//! [`Reconciler::reconcile`] is the top-level entry point: ensure the
//! declared roles exist, ensure the declared permissions exist, then replace
//! each granted role's assignment set with its declared subset. Each step is
//! create-if-absent or a full overwrite, so running the whole operation twice
//! with the same catalog leaves the same final state as running it once.
//! Idempotence, not transactional atomicity, is the recovery mechanism if a
//! run is interrupted.

use tracing::{debug, info, instrument, warn};

use tutorhub_models::ids::PermissionId;

use crate::catalog::PermissionCatalog;
use crate::error::{ReconcileError, StoreError};
use crate::store::RoleStore;

/// How unknown role or permission references are handled at assignment time.
///
/// The original seeding behavior silently skipped names with no stored row,
/// which tolerates partially-migrated environments but also masks typos in
/// the catalog. The policy makes that trade-off an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Log a warning and skip unknown references (observed legacy behavior).
    #[default]
    Lenient,
    /// Surface unknown references as errors.
    Strict,
}

/// Brings persisted role/permission/assignment state into agreement with a
/// declared [`PermissionCatalog`], without needing to know what the previous
/// state was.
pub struct Reconciler<S> {
    store: S,
    policy: ResolutionPolicy,
}

impl<S: RoleStore> Reconciler<S> {
    /// Create a reconciler with the default lenient policy.
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ResolutionPolicy::default(),
        }
    }

    /// Set the unknown-reference policy.
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create each named role if absent.
    ///
    /// A set operation; input order and duplicates do not affect the result,
    /// and re-invocation never errors.
    #[instrument(skip(self, names))]
    pub async fn ensure_roles_exist<I, N>(&self, names: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        for name in names {
            let role = self.store.create_role_if_absent(name.as_ref()).await?;
            debug!(role = %role.name, role_id = %role.id, "role present");
        }
        Ok(())
    }

    /// Create each named permission if absent. Duplicate input names collapse
    /// to the same stored row.
    #[instrument(skip(self, names))]
    pub async fn ensure_permissions_exist<I, N>(&self, names: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        for name in names {
            let permission = self.store.create_permission_if_absent(name.as_ref()).await?;
            debug!(permission = %permission.name, "permission present");
        }
        Ok(())
    }

    /// Replace the role's assignment set with exactly the resolved input set.
    ///
    /// Permissions previously assigned but absent from `permissions` are
    /// unassigned. Under the lenient policy an absent role is a no-op and
    /// unresolved permission names are dropped from the assignment; under the
    /// strict policy both are errors.
    #[instrument(skip(self, permissions), fields(policy = ?self.policy))]
    pub async fn assign_permission_set(
        &self,
        role: &str,
        permissions: &[String],
    ) -> Result<(), ReconcileError> {
        let Some(stored_role) = self.store.find_role_by_name(role).await? else {
            if self.policy == ResolutionPolicy::Strict {
                return Err(ReconcileError::UnknownRole(role.to_string()));
            }
            warn!(role, "role not found, skipping permission assignment");
            return Ok(());
        };

        let resolved = self.store.resolve_permission_ids(permissions).await?;

        let missing: Vec<String> = permissions
            .iter()
            .filter(|name| !resolved.iter().any(|(resolved_name, _)| resolved_name == *name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            if self.policy == ResolutionPolicy::Strict {
                return Err(ReconcileError::UnknownPermissions {
                    role: role.to_string(),
                    names: missing,
                });
            }
            warn!(role, ?missing, "dropping unknown permissions from assignment");
        }

        let mut ids: Vec<PermissionId> = resolved.into_iter().map(|(_, id)| id).collect();
        ids.sort();
        ids.dedup();

        self.store
            .replace_role_permissions(stored_role.id, &ids)
            .await?;
        info!(role, assigned = ids.len(), "replaced permission set");
        Ok(())
    }

    /// Reconcile stored state with the catalog.
    ///
    /// Roles and permissions are created before any assignment is attempted;
    /// their relative order is immaterial since the entities are independent.
    #[instrument(skip_all)]
    pub async fn reconcile(&self, catalog: &PermissionCatalog) -> Result<(), ReconcileError> {
        self.ensure_roles_exist(catalog.roles()).await?;
        self.ensure_permissions_exist(catalog.permission_union())
            .await?;

        for (role, subset) in catalog.grants() {
            self.assign_permission_set(role, &subset).await?;
        }

        info!(
            roles = catalog.roles().len(),
            permissions = catalog.permissions().len(),
            "reconciliation complete"
        );
        Ok(())
    }
}
