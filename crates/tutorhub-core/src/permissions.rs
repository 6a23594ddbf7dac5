//! Permission name constants for the Tutorhub platform.
//!
//! This module provides centralized permission string constants for use across
//! the codebase. Using these constants instead of string literals ensures
//! consistency and makes refactoring easier. Permission names are kebab-case
//! tokens as stored in the `permissions` table.
//!
//! # Example
//!
//! ```ignore
//! use tutorhub_core::permissions;
//!
//! catalog_builder.grant(roles::STUDENT, [permissions::MANAGE_BOOKINGS]);
//! ```

// =============================================================================
// Content & learning permissions
// =============================================================================

/// Permission to manage courses
pub const MANAGE_COURSES: &str = "can-manage-courses";
/// Permission to manage badges
pub const MANAGE_BADGES: &str = "can-manage-badges";
/// Permission to manage course bundles
pub const MANAGE_COURSE_BUNDLES: &str = "can-manage-course-bundles";
/// Permission to manage subscriptions
pub const MANAGE_SUBSCRIPTIONS: &str = "can-manage-subscriptions";
/// Permission to manage forums
pub const MANAGE_FORUMS: &str = "can-manage-forums";
/// Permission to manage insights
pub const MANAGE_INSIGHTS: &str = "can-manage-insights";

// =============================================================================
// Site building permissions
// =============================================================================

/// Permission to manage the navigation menu
pub const MANAGE_MENU: &str = "can-manage-menu";
/// Permission to manage the option builder
pub const MANAGE_OPTION_BUILDER: &str = "can-manage-option-builder";
/// Permission to manage static pages
pub const MANAGE_PAGES: &str = "can-manage-pages";

// =============================================================================
// Platform settings permissions
// =============================================================================

/// Permission to manage email settings
pub const MANAGE_EMAIL_SETTINGS: &str = "can-manage-email-settings";
/// Permission to manage notification settings
pub const MANAGE_NOTIFICATION_SETTINGS: &str = "can-manage-notification-settings";
/// Permission to manage languages
pub const MANAGE_LANGUAGES: &str = "can-manage-languages";
/// Permission to manage language translations
pub const MANAGE_LANGUAGE_TRANSLATIONS: &str = "can-manage-language-translations";
/// Permission to manage addons
pub const MANAGE_ADDONS: &str = "can-manage-addons";
/// Permission to manage platform upgrades
pub const MANAGE_UPGRADE: &str = "can-manage-upgrade";

// =============================================================================
// Subject taxonomy permissions
// =============================================================================

/// Permission to manage subjects
pub const MANAGE_SUBJECTS: &str = "can-manage-subjects";
/// Permission to manage subject groups
pub const MANAGE_SUBJECT_GROUPS: &str = "can-manage-subject-groups";

// =============================================================================
// Users & identity permissions
// =============================================================================

/// Permission to manage users
pub const MANAGE_USERS: &str = "can-manage-users";
/// Permission to manage identity verification
pub const MANAGE_IDENTITY_VERIFICATION: &str = "can-manage-identity-verification";
/// Permission to manage admin users
pub const MANAGE_ADMIN_USERS: &str = "can-manage-admin-users";

// =============================================================================
// Marketplace & billing permissions
// =============================================================================

/// Permission to manage reviews
pub const MANAGE_REVIEWS: &str = "can-manage-reviews";
/// Permission to manage invoices
pub const MANAGE_INVOICES: &str = "can-manage-invoices";
/// Permission to manage bookings
pub const MANAGE_BOOKINGS: &str = "can-manage-bookings";
/// Permission to manage withdraw requests
pub const MANAGE_WITHDRAW_REQUESTS: &str = "can-manage-withdraw-requests";
/// Permission to manage commission settings
pub const MANAGE_COMMISSION_SETTINGS: &str = "can-manage-commission-settings";
/// Permission to manage payment methods
pub const MANAGE_PAYMENT_METHODS: &str = "can-manage-payment-methods";

// =============================================================================
// Blog permissions
// =============================================================================

/// Permission to create blog posts
pub const MANAGE_CREATE_BLOGS: &str = "can-manage-create-blogs";
/// Permission to manage all blog posts
pub const MANAGE_ALL_BLOGS: &str = "can-manage-all-blogs";
/// Permission to update blog posts
pub const MANAGE_UPDATE_BLOGS: &str = "can-manage-update-blogs";
/// Permission to manage blog categories
pub const MANAGE_BLOG_CATEGORIES: &str = "can-manage-blog-categories";

// =============================================================================
// Dispute permissions
// =============================================================================

/// Permission to manage a dispute
pub const MANAGE_DISPUTE: &str = "can-manage-dispute";
/// Permission to manage the disputes list
pub const MANAGE_DISPUTES_LIST: &str = "can-manage-disputes-list";

/// The full permission catalog, in declaration order.
///
/// Every permission known to the platform appears here exactly once.
pub const ALL: [&str; 32] = [
    MANAGE_COURSES,
    MANAGE_BADGES,
    MANAGE_COURSE_BUNDLES,
    MANAGE_SUBSCRIPTIONS,
    MANAGE_FORUMS,
    MANAGE_INSIGHTS,
    MANAGE_MENU,
    MANAGE_OPTION_BUILDER,
    MANAGE_PAGES,
    MANAGE_EMAIL_SETTINGS,
    MANAGE_NOTIFICATION_SETTINGS,
    MANAGE_LANGUAGES,
    MANAGE_SUBJECTS,
    MANAGE_SUBJECT_GROUPS,
    MANAGE_LANGUAGE_TRANSLATIONS,
    MANAGE_ADDONS,
    MANAGE_UPGRADE,
    MANAGE_USERS,
    MANAGE_IDENTITY_VERIFICATION,
    MANAGE_REVIEWS,
    MANAGE_INVOICES,
    MANAGE_BOOKINGS,
    MANAGE_WITHDRAW_REQUESTS,
    MANAGE_COMMISSION_SETTINGS,
    MANAGE_PAYMENT_METHODS,
    MANAGE_CREATE_BLOGS,
    MANAGE_ALL_BLOGS,
    MANAGE_UPDATE_BLOGS,
    MANAGE_BLOG_CATEGORIES,
    MANAGE_DISPUTE,
    MANAGE_DISPUTES_LIST,
    MANAGE_ADMIN_USERS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for name in ALL {
            assert!(seen.insert(name), "duplicate permission name: {name}");
        }
    }

    #[test]
    fn names_are_kebab_case_tokens() {
        for name in ALL {
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "permission name is not a kebab-case token: {name}"
            );
            assert!(!name.starts_with('-') && !name.ends_with('-'));
        }
    }
}
