//! # Tutorhub DB
//!
//! Database pool and the Postgres [`RoleStore`](tutorhub_rbac::RoleStore)
//! implementation for Tutorhub.
//!
//! # Example
//!
//! ```ignore
//! use tutorhub_db::{PostgresRoleStore, init_db_pool};
//! use tutorhub_rbac::Reconciler;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     let reconciler = Reconciler::new(PostgresRoleStore::new(pool));
//!     // reconciler.reconcile(&catalog).await ...
//! }
//! ```

use std::env;

pub mod postgres;

pub use postgres::PostgresRoleStore;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable and
/// creates a small pool sized for the short-lived batch jobs this workspace
/// runs. The pool is cheaply cloneable.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Runs the embedded migrations against the pool.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
