//! The declarative role → permission catalog.
//!
//! The catalog is the source of truth reconciliation drives toward: the
//! global permission list, the role list, and each role's declared subset,
//! normalized into one structure built once. Roles that should hold every
//! permission are flagged rather than re-declaring the full list, so the
//! "all permissions" set is always derived and cannot drift from the catalog.

use std::collections::BTreeMap;

/// What a role is granted by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RoleGrant {
    /// The full declared permission catalog.
    All,
    /// An explicit subset of permission names, deduped, in declaration order.
    Subset(Vec<String>),
}

/// The declarative source-of-truth for roles, permissions, and each role's
/// permission subset.
///
/// Construct with [`PermissionCatalog::builder`]. Input order is preserved
/// for iteration; duplicates collapse on build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    permissions: Vec<String>,
    roles: Vec<String>,
    grants: BTreeMap<String, RoleGrant>,
}

impl PermissionCatalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// All declared role names, in declaration order.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// The full declared permission catalog, in declaration order.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// The declared permission subset for a role, with `grant_all` roles
    /// resolved to the full catalog. `None` for roles with no declared grant.
    pub fn subset(&self, role: &str) -> Option<Vec<String>> {
        match self.grants.get(role)? {
            RoleGrant::All => Some(self.permissions.clone()),
            RoleGrant::Subset(names) => Some(names.clone()),
        }
    }

    /// Every role with a declared grant, paired with its resolved subset,
    /// in role declaration order.
    pub fn grants(&self) -> impl Iterator<Item = (&str, Vec<String>)> {
        self.roles
            .iter()
            .filter_map(move |role| self.subset(role).map(|subset| (role.as_str(), subset)))
    }

    /// The union of the declared permission catalog and every role subset,
    /// deduped, catalog order first.
    ///
    /// This is the set `ensure_permissions_exist` is fed: a subset name
    /// missing from the main list still gets a stored row.
    pub fn permission_union(&self) -> Vec<String> {
        let mut union = self.permissions.clone();
        for grant in self.grants.values() {
            if let RoleGrant::Subset(names) = grant {
                for name in names {
                    if !union.iter().any(|existing| existing == name) {
                        union.push(name.clone());
                    }
                }
            }
        }
        union
    }
}

/// Builder for [`PermissionCatalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    permissions: Vec<String>,
    roles: Vec<String>,
    grants: BTreeMap<String, RoleGrant>,
}

impl CatalogBuilder {
    /// Declare the global permission catalog. May be called more than once;
    /// entries accumulate.
    pub fn permissions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declare a role with no permission grant.
    pub fn role<S: Into<String>>(mut self, name: S) -> Self {
        self.roles.push(name.into());
        self
    }

    /// Declare a role granted an explicit permission subset.
    pub fn grant<S, I, P>(mut self, role: S, permissions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let role = role.into();
        self.roles.push(role.clone());
        self.grants.insert(
            role,
            RoleGrant::Subset(permissions.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Declare a role granted the full permission catalog.
    pub fn grant_all<S: Into<String>>(mut self, role: S) -> Self {
        let role = role.into();
        self.roles.push(role.clone());
        self.grants.insert(role, RoleGrant::All);
        self
    }

    /// Normalize and build the catalog: duplicate permission names, role
    /// names, and subset entries collapse, first occurrence wins.
    pub fn build(self) -> PermissionCatalog {
        let permissions = dedup_preserving_order(self.permissions);
        let roles = dedup_preserving_order(self.roles);
        let grants = self
            .grants
            .into_iter()
            .map(|(role, grant)| {
                let grant = match grant {
                    RoleGrant::All => RoleGrant::All,
                    RoleGrant::Subset(names) => RoleGrant::Subset(dedup_preserving_order(names)),
                };
                (role, grant)
            })
            .collect();

        PermissionCatalog {
            permissions,
            roles,
            grants,
        }
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_dedupes_permissions_preserving_order() {
        let catalog = PermissionCatalog::builder()
            .permissions(["a", "b", "a", "c", "b"])
            .build();
        assert_eq!(catalog.permissions(), ["a", "b", "c"]);
    }

    #[test]
    fn grant_all_resolves_to_full_catalog() {
        let catalog = PermissionCatalog::builder()
            .permissions(["a", "b", "c"])
            .grant_all("admin")
            .build();
        assert_eq!(catalog.subset("admin"), Some(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ]));
    }

    #[test]
    fn subset_is_deduped() {
        let catalog = PermissionCatalog::builder()
            .permissions(["a", "b"])
            .grant("student", ["b", "b", "a"])
            .build();
        assert_eq!(
            catalog.subset("student"),
            Some(vec!["b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn role_without_grant_has_no_subset() {
        let catalog = PermissionCatalog::builder()
            .permissions(["a"])
            .role("tutor")
            .grant_all("admin")
            .build();
        assert_eq!(catalog.subset("tutor"), None);
        assert_eq!(catalog.roles(), ["tutor", "admin"]);
        let granted: Vec<&str> = catalog.grants().map(|(role, _)| role).collect();
        assert_eq!(granted, ["admin"]);
    }

    #[test]
    fn permission_union_includes_subset_strays() {
        let catalog = PermissionCatalog::builder()
            .permissions(["a", "b"])
            .grant("tutor", ["b", "z"])
            .build();
        assert_eq!(catalog.permission_union(), ["a", "b", "z"]);
    }
}
