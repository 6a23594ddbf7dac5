//! Property tests for catalog reconciliation against the in-memory store.

use tutorhub_models::roles::RoleWithPermissions;
use tutorhub_rbac::{
    InMemoryRoleStore, PermissionCatalog, ReconcileError, Reconciler, ResolutionPolicy, RoleStore,
};

fn booking_catalog() -> PermissionCatalog {
    PermissionCatalog::builder()
        .permissions([
            "can-manage-courses",
            "can-manage-bookings",
            "can-manage-reviews",
        ])
        .grant_all("admin")
        .grant("tutor", ["can-manage-bookings"])
        .grant("student", ["can-manage-bookings", "can-manage-reviews"])
        .build()
}

async fn assigned_names(store: &InMemoryRoleStore, role: &str) -> Vec<String> {
    let role = store
        .find_role_by_name(role)
        .await
        .unwrap()
        .expect("role should exist");
    store
        .role_permissions(role.id)
        .await
        .unwrap()
        .into_iter()
        .map(|permission| permission.name)
        .collect()
}

#[tokio::test]
async fn reconcile_assigns_declared_subsets() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.reconcile(&booking_catalog()).await.unwrap();

    let store = reconciler.store();
    assert_eq!(
        assigned_names(store, "admin").await,
        [
            "can-manage-bookings",
            "can-manage-courses",
            "can-manage-reviews"
        ]
    );
    assert_eq!(assigned_names(store, "tutor").await, ["can-manage-bookings"]);
    assert_eq!(
        assigned_names(store, "student").await,
        ["can-manage-bookings", "can-manage-reviews"]
    );
}

#[tokio::test]
async fn reconcile_is_idempotent() {
    let catalog = booking_catalog();
    let reconciler = Reconciler::new(InMemoryRoleStore::new());

    reconciler.reconcile(&catalog).await.unwrap();
    let store = reconciler.store();
    let admin_after_first = assigned_names(store, "admin").await;
    let roles_after_first = store.role_count();
    let permissions_after_first = store.permission_count();

    reconciler.reconcile(&catalog).await.unwrap();
    let store = reconciler.store();
    assert_eq!(assigned_names(store, "admin").await, admin_after_first);
    assert_eq!(store.role_count(), roles_after_first);
    assert_eq!(store.permission_count(), permissions_after_first);
}

#[tokio::test]
async fn assign_replaces_rather_than_merges() {
    let store = InMemoryRoleStore::new();
    let reconciler = Reconciler::new(store);
    reconciler.ensure_roles_exist(["tutor"]).await.unwrap();
    reconciler
        .ensure_permissions_exist(["a", "b", "c"])
        .await
        .unwrap();

    reconciler
        .assign_permission_set("tutor", &["a".to_string(), "b".to_string()])
        .await
        .unwrap();
    assert_eq!(assigned_names(reconciler.store(), "tutor").await, ["a", "b"]);

    reconciler
        .assign_permission_set("tutor", &["b".to_string(), "c".to_string()])
        .await
        .unwrap();
    assert_eq!(assigned_names(reconciler.store(), "tutor").await, ["b", "c"]);
}

#[tokio::test]
async fn ensure_permissions_collapses_duplicate_names() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler
        .ensure_permissions_exist(["x", "x", "y"])
        .await
        .unwrap();
    assert_eq!(reconciler.store().permission_count(), 2);
}

#[tokio::test]
async fn ensure_roles_never_errors_on_reinvocation() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.ensure_roles_exist(["admin"]).await.unwrap();
    reconciler.ensure_roles_exist(["admin"]).await.unwrap();
    assert_eq!(reconciler.store().role_count(), 1);
}

#[tokio::test]
async fn lenient_drops_unknown_permissions() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.ensure_roles_exist(["tutor"]).await.unwrap();
    reconciler.ensure_permissions_exist(["a"]).await.unwrap();
    reconciler
        .assign_permission_set("tutor", &["a".to_string()])
        .await
        .unwrap();

    // The whole input set resolves to nothing, so the edge set becomes empty.
    reconciler
        .assign_permission_set("tutor", &["does-not-exist".to_string()])
        .await
        .unwrap();
    assert!(assigned_names(reconciler.store(), "tutor").await.is_empty());
}

#[tokio::test]
async fn lenient_assigns_resolvable_names_and_drops_the_rest() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.ensure_roles_exist(["tutor"]).await.unwrap();
    reconciler.ensure_permissions_exist(["a"]).await.unwrap();

    // Mixed input: the known name lands, the unknown one is dropped.
    reconciler
        .assign_permission_set("tutor", &["a".to_string(), "typo".to_string()])
        .await
        .unwrap();
    assert_eq!(assigned_names(reconciler.store(), "tutor").await, ["a"]);
}

#[tokio::test]
async fn lenient_skips_absent_role_without_mutation() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.ensure_permissions_exist(["a"]).await.unwrap();

    reconciler
        .assign_permission_set("ghost-role", &["a".to_string()])
        .await
        .unwrap();

    assert_eq!(reconciler.store().role_count(), 0);
    assert!(
        reconciler
            .store()
            .find_role_by_name("ghost-role")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn strict_surfaces_unknown_role() {
    let reconciler =
        Reconciler::new(InMemoryRoleStore::new()).with_policy(ResolutionPolicy::Strict);

    let err = reconciler
        .assign_permission_set("ghost-role", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ReconcileError::UnknownRole(role) if role == "ghost-role"));
}

#[tokio::test]
async fn strict_surfaces_unknown_permissions() {
    let reconciler =
        Reconciler::new(InMemoryRoleStore::new()).with_policy(ResolutionPolicy::Strict);
    reconciler.ensure_roles_exist(["tutor"]).await.unwrap();
    reconciler.ensure_permissions_exist(["a"]).await.unwrap();

    let err = reconciler
        .assign_permission_set("tutor", &["a".to_string(), "typo".to_string()])
        .await
        .unwrap_err();
    match err {
        ReconcileError::UnknownPermissions { role, names } => {
            assert_eq!(role, "tutor");
            assert_eq!(names, ["typo"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn list_permissions_reports_the_stored_catalog() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.reconcile(&booking_catalog()).await.unwrap();

    let store = reconciler.store();
    let stored: Vec<String> = store
        .list_permissions()
        .await
        .unwrap()
        .into_iter()
        .map(|permission| permission.name)
        .collect();
    assert_eq!(stored, [
        "can-manage-bookings",
        "can-manage-courses",
        "can-manage-reviews",
    ]);

    // An admin report built from store reads carries the full stored set.
    let role = store.find_role_by_name("admin").await.unwrap().unwrap();
    let permissions = store.role_permissions(role.id).await.unwrap();
    let admin = RoleWithPermissions { role, permissions };
    assert_eq!(admin.role.name, "admin");
    assert_eq!(admin.permissions.len(), stored.len());
}

#[tokio::test]
async fn reconcile_removes_edges_dropped_from_catalog() {
    let reconciler = Reconciler::new(InMemoryRoleStore::new());
    reconciler.reconcile(&booking_catalog()).await.unwrap();

    // Next release narrows the student grant; the removed edge must go away.
    let narrowed = PermissionCatalog::builder()
        .permissions([
            "can-manage-courses",
            "can-manage-bookings",
            "can-manage-reviews",
        ])
        .grant_all("admin")
        .grant("tutor", ["can-manage-bookings"])
        .grant("student", ["can-manage-bookings"])
        .build();
    reconciler.reconcile(&narrowed).await.unwrap();

    assert_eq!(
        assigned_names(reconciler.store(), "student").await,
        ["can-manage-bookings"]
    );
    // Permission rows themselves are never deleted by reconciliation.
    assert_eq!(reconciler.store().permission_count(), 3);
}
