//! Role/permission seeding and verification.
//!
//! `seed_roles` reconciles the database with the declared platform catalog;
//! `verify` is the read-after-write report an operator runs to confirm the
//! admin role (and optionally a specific user) ended up with the expected
//! permissions.

use std::time::Instant;

use sqlx::PgPool;

use tutorhub_core::roles;
use tutorhub_db::PostgresRoleStore;
use tutorhub_models::roles::RoleWithPermissions;
use tutorhub_models::users::User;
use tutorhub_rbac::{ReconcileError, Reconciler, ResolutionPolicy, RoleStore};

pub mod catalog;

pub use catalog::platform_catalog;

/// Reconcile stored roles/permissions with the platform catalog.
///
/// Safe to re-run: roles and permissions are created only if absent, and each
/// role's assignment set is replaced with its declared subset.
pub async fn seed_roles(pool: &PgPool, policy: ResolutionPolicy) -> Result<(), ReconcileError> {
    let catalog = platform_catalog();

    println!("🌱 Reconciling roles and permissions...");
    println!("   - Roles: {}", catalog.roles().len());
    println!("   - Permissions: {}", catalog.permissions().len());

    let start = Instant::now();
    let reconciler = Reconciler::new(PostgresRoleStore::new(pool.clone())).with_policy(policy);
    reconciler.reconcile(&catalog).await?;

    println!("✅ Reconciliation complete in {:?}", start.elapsed());
    Ok(())
}

/// Report the stored permission catalog, the admin role's assigned
/// permissions and, when an email is given, the roles and effective
/// permissions of that user.
///
/// Read-only; reconciliation state is never mutated here.
pub async fn verify(pool: &PgPool, email: Option<&str>) -> anyhow::Result<()> {
    let store = PostgresRoleStore::new(pool.clone());

    println!("📋 Verifying permissions assignment...");

    let stored = store.list_permissions().await?;
    println!("✅ {} permissions stored", stored.len());

    match store.find_role_by_name(roles::ADMIN).await? {
        Some(role) => {
            let permissions = store.role_permissions(role.id).await?;
            let admin = RoleWithPermissions { role, permissions };
            println!(
                "✅ Admin role has {} of {} permissions assigned",
                admin.permissions.len(),
                stored.len()
            );
            println!("\n📌 Admin Permissions:");
            for permission in &admin.permissions {
                println!("   ✓ {}", permission.name);
            }
        }
        None => println!("❌ Admin role not found"),
    }

    if let Some(email) = email {
        println!("\n🔍 Verifying user assignment...");
        verify_user(pool, email).await?;
    }

    Ok(())
}

async fn verify_user(pool: &PgPool, email: &str) -> anyhow::Result<()> {
    let user: Option<User> = sqlx::query_as(
        "SELECT id, first_name, last_name, email, created_at, updated_at
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        println!("❌ User '{email}' not found");
        return Ok(());
    };

    let role_names: Vec<String> = sqlx::query_scalar(
        "SELECT r.name
         FROM roles r
         INNER JOIN user_roles ur ON r.id = ur.role_id
         WHERE ur.user_id = $1
         ORDER BY r.name",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    println!(
        "✅ {} ({}) has roles: {}",
        user.full_name(),
        user.email,
        role_names.join(", ")
    );

    let permission_names: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT p.name
         FROM permissions p
         INNER JOIN role_permissions rp ON p.id = rp.permission_id
         INNER JOIN user_roles ur ON rp.role_id = ur.role_id
         WHERE ur.user_id = $1
         ORDER BY p.name",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    println!("✅ User has {} permissions", permission_names.len());
    println!("\n📌 User Permissions:");
    for name in &permission_names {
        println!("   ✓ {name}");
    }

    Ok(())
}
