//! Central authorization predicate.
//!
//! Every route guard and every conditional control in the UI goes through
//! [`can_access`] or one of the convenience predicates below: role semantics
//! live here and nowhere else. The functions are pure, so the same inputs
//! produce the same decision whether the caller is deciding a redirect or
//! hiding a button.

use crate::models::Role;

/// Decide whether `current_role` may access something restricted to
/// `required`.
///
/// - `None` role (unauthenticated) is always denied.
/// - `None` requirement means any authenticated role passes.
pub fn can_access(current_role: Option<Role>, required: Option<&[Role]>) -> bool {
    let Some(role) = current_role else {
        return false;
    };
    match required {
        None => true,
        Some(roles) => roles.contains(&role),
    }
}

/// Fleet management (create/edit/delete cars). Customers are read-only.
pub fn can_manage_fleet(role: Option<Role>) -> bool {
    can_access(role, Some(&[Role::Staff, Role::Admin]))
}

/// Rental management (issue, edit dates, return). Customers may only view
/// rentals filtered to their own customer id.
pub fn can_manage_rentals(role: Option<Role>) -> bool {
    can_access(role, Some(&[Role::Staff, Role::Admin]))
}

/// Process-level admin tooling.
pub fn is_admin_only(role: Option<Role>) -> bool {
    can_access(role, Some(&[Role::Admin]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 3] = [Role::Customer, Role::Staff, Role::Admin];

    #[test]
    fn test_unauthenticated_is_denied_regardless_of_requirement() {
        assert!(!can_access(None, None));
        assert!(!can_access(None, Some(&[])));
        assert!(!can_access(None, Some(&ALL_ROLES)));
    }

    #[test]
    fn test_no_requirement_admits_any_authenticated_role() {
        for role in ALL_ROLES {
            assert!(can_access(Some(role), None));
        }
    }

    #[test]
    fn test_membership_check() {
        assert!(can_access(Some(Role::Staff), Some(&[Role::Staff, Role::Admin])));
        assert!(can_access(Some(Role::Admin), Some(&[Role::Staff, Role::Admin])));
        assert!(!can_access(Some(Role::Customer), Some(&[Role::Staff, Role::Admin])));
        assert!(!can_access(Some(Role::Staff), Some(&[Role::Admin])));
    }

    #[test]
    fn test_empty_requirement_denies_everyone() {
        for role in ALL_ROLES {
            assert!(!can_access(Some(role), Some(&[])));
        }
    }

    #[test]
    fn test_management_predicates() {
        assert!(!can_manage_fleet(None));
        assert!(!can_manage_fleet(Some(Role::Customer)));
        assert!(can_manage_fleet(Some(Role::Staff)));
        assert!(can_manage_fleet(Some(Role::Admin)));

        assert!(!can_manage_rentals(Some(Role::Customer)));
        assert!(can_manage_rentals(Some(Role::Staff)));
        assert!(can_manage_rentals(Some(Role::Admin)));

        assert!(!is_admin_only(None));
        assert!(!is_admin_only(Some(Role::Customer)));
        assert!(!is_admin_only(Some(Role::Staff)));
        assert!(is_admin_only(Some(Role::Admin)));
    }
}
