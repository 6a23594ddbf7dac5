//! # Tutorhub CLI
//!
//! Role/permission seeding and repair tooling for Tutorhub.
//!
//! This library crate provides the seeding and verification functionality
//! used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use tutorhub_cli::seeder;
//! use tutorhub_rbac::ResolutionPolicy;
//!
//! seeder::seed_roles(&pool, ResolutionPolicy::Lenient).await?;
//! seeder::verify(&pool, Some("admin@example.com")).await?;
//! ```

pub mod logging;
pub mod seeder;
