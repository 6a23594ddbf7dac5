//! The production permission catalog.
//!
//! This is the declarative source of truth the reconciliation runs against:
//! one normalized structure instead of permission lists re-typed per role.
//! Admin-class roles are granted the full catalog by flag, so "all
//! permissions" is always derived and cannot drift.

use tutorhub_core::{permissions, roles};
use tutorhub_rbac::PermissionCatalog;

/// Permissions a tutor needs to run their own teaching business:
/// subjects, bookings, payouts, blogging, and their side of disputes.
const TUTOR_PERMISSIONS: [&str; 13] = [
    permissions::MANAGE_SUBJECTS,
    permissions::MANAGE_SUBJECT_GROUPS,
    permissions::MANAGE_BOOKINGS,
    permissions::MANAGE_WITHDRAW_REQUESTS,
    permissions::MANAGE_COMMISSION_SETTINGS,
    permissions::MANAGE_PAYMENT_METHODS,
    permissions::MANAGE_CREATE_BLOGS,
    permissions::MANAGE_ALL_BLOGS,
    permissions::MANAGE_UPDATE_BLOGS,
    permissions::MANAGE_BLOG_CATEGORIES,
    permissions::MANAGE_REVIEWS,
    permissions::MANAGE_INVOICES,
    permissions::MANAGE_DISPUTE,
];

/// Permissions a student needs: their bookings, reviews, invoices, and
/// raising a dispute.
const STUDENT_PERMISSIONS: [&str; 4] = [
    permissions::MANAGE_BOOKINGS,
    permissions::MANAGE_REVIEWS,
    permissions::MANAGE_INVOICES,
    permissions::MANAGE_DISPUTE,
];

/// Build the platform catalog: every permission, the four platform roles,
/// and each role's declared subset.
pub fn platform_catalog() -> PermissionCatalog {
    PermissionCatalog::builder()
        .permissions(permissions::ALL)
        .grant_all(roles::ADMIN)
        .grant_all(roles::SUB_ADMIN)
        .grant(roles::TUTOR, TUTOR_PERMISSIONS)
        .grant(roles::STUDENT, STUDENT_PERMISSIONS)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape_matches_platform() {
        let catalog = platform_catalog();
        assert_eq!(catalog.permissions().len(), 32);
        assert_eq!(catalog.roles().len(), 4);
        assert_eq!(
            catalog.subset(roles::ADMIN).map(|s| s.len()),
            Some(32)
        );
        assert_eq!(
            catalog.subset(roles::SUB_ADMIN),
            catalog.subset(roles::ADMIN)
        );
        assert_eq!(catalog.subset(roles::TUTOR).map(|s| s.len()), Some(13));
        assert_eq!(catalog.subset(roles::STUDENT).map(|s| s.len()), Some(4));
    }

    #[test]
    fn role_subsets_are_within_the_catalog() {
        let catalog = platform_catalog();
        for (role, subset) in catalog.grants() {
            for name in subset {
                assert!(
                    catalog.permissions().contains(&name),
                    "role '{role}' grants '{name}' which is not in the catalog"
                );
            }
        }
        // No strays means the union is exactly the declared catalog.
        assert_eq!(catalog.permission_union(), catalog.permissions());
    }

    #[test]
    fn student_grant_is_a_subset_of_tutor_grant() {
        let catalog = platform_catalog();
        let tutor = catalog.subset(roles::TUTOR).unwrap();
        for name in catalog.subset(roles::STUDENT).unwrap() {
            assert!(tutor.contains(&name));
        }
    }
}
