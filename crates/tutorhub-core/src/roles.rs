//! Role name constants for the Tutorhub platform.
//!
//! Roles form a closed but extensible set. Adding a role means adding a
//! constant here and declaring its permission subset in the catalog of the
//! reconciliation caller.

/// Platform administrator with the full permission catalog.
pub const ADMIN: &str = "admin";
/// Delegated administrator, also granted the full permission catalog.
pub const SUB_ADMIN: &str = "sub_admin";
/// Tutor offering courses and sessions on the platform.
pub const TUTOR: &str = "tutor";
/// Student booking courses and sessions.
pub const STUDENT: &str = "student";

/// All platform roles, in seeding order.
pub const ALL: [&str; 4] = [ADMIN, SUB_ADMIN, TUTOR, STUDENT];
