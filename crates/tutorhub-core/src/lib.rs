//! # Tutorhub Core
//!
//! Core name constants for the Tutorhub platform.
//!
//! This crate provides the canonical string constants for roles and
//! permissions used across the codebase:
//!
//! - [`permissions`]: permission name constants and the full catalog list
//! - [`roles`]: role name constants
//!
//! # Example
//!
//! ```ignore
//! use tutorhub_core::{permissions, roles};
//!
//! assert_eq!(permissions::MANAGE_COURSES, "can-manage-courses");
//! assert_eq!(roles::TUTOR, "tutor");
//! ```

pub mod permissions;
pub mod roles;
