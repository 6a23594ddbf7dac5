//! # Tutorhub RBAC
//!
//! Declarative role/permission state and the reconciliation that keeps
//! persisted state in agreement with it.
//!
//! The component is deliberately small: a [`PermissionCatalog`] describes the
//! desired state (roles, the global permission list, and each role's subset),
//! a [`RoleStore`] abstracts the persistence operations the core needs, and a
//! [`Reconciler`] makes stored state match the catalog. Reconciliation is
//! idempotent and replaces each role's assignment set wholesale rather than
//! merging into it, so rows that leave the catalog are removed on the next
//! run.
//!
//! # Example
//!
//! ```ignore
//! use tutorhub_rbac::{InMemoryRoleStore, PermissionCatalog, Reconciler};
//!
//! let catalog = PermissionCatalog::builder()
//!     .permissions(["can-manage-courses", "can-manage-bookings"])
//!     .grant_all("admin")
//!     .grant("student", ["can-manage-bookings"])
//!     .build();
//!
//! let reconciler = Reconciler::new(InMemoryRoleStore::new());
//! reconciler.reconcile(&catalog).await?;
//! ```

pub mod catalog;
pub mod error;
pub mod memory;
pub mod reconcile;
pub mod store;

pub use catalog::{CatalogBuilder, PermissionCatalog};
pub use error::{ReconcileError, StoreError};
pub use memory::InMemoryRoleStore;
pub use reconcile::{Reconciler, ResolutionPolicy};
pub use store::RoleStore;
