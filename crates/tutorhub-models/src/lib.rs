//! # Tutorhub Models
//!
//! Domain models for the Tutorhub role-based access control component.
//!
//! This crate provides the data structures shared between the reconciliation
//! core, the Postgres store, and the CLI:
//!
//! - [`ids`]: strongly-typed ID newtypes around `Uuid`
//! - [`roles`]: role, permission, and assignment-edge entities
//! - [`users`]: the lean user row used by read-after-write reporting

pub mod ids;
pub mod roles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use ids::{PermissionId, RoleId, UserId};
pub use roles::{Permission, Role, RolePermission, RoleWithPermissions};
pub use users::User;
