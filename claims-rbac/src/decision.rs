//! # Decisions
//!
//! The named access checks used at the API boundary. Each one is a pure
//! predicate over the caller, and for some of them the operation or the
//! target object.
//!
//! Every decision denies an unauthenticated caller before looking at
//! anything else.
//!
//! | Decision                  | Read-only             | Mutating        |
//! |---------------------------|-----------------------|-----------------|
//! | `is_admin`                | admin                 | admin           |
//! | `is_management`           | management            | management      |
//! | `is_staff`                | staff                 | staff           |
//! | `is_staff_or_read_only`   | anyone                | staff           |
//! | `is_owner_or_staff`       | staff or owner        | staff or owner  |
//! | `can_process_claims`      | processing            | processing      |
//! | `can_assign_claims`       | management            | management      |
//! | `can_manage_fraud_alerts` | processing + reviewer | processing      |
//! | `can_view_analytics`      | oversight             | oversight       |
//! | `can_manage_users`        | management            | management      |
//!
//! `is_owner_or_staff` only applies to a specific object; without one,
//! [`Decision::evaluate`] lets any authenticated caller through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;
use crate::operation::Operation;
use crate::ownership::{self, Owned};
use crate::principal::Principal;
use crate::roles::{Role, RoleGroup, FRAUD_REVIEW};

/// Caller is authenticated and its role belongs to `group`.
fn authenticated_in(principal: &Principal, group: RoleGroup) -> bool {
    principal.is_authenticated() && principal.role().in_group(group)
}

/// Only administrators.
pub fn is_admin(principal: &Principal) -> bool {
    principal.is_authenticated() && principal.role() == Role::Admin
}

/// Admin and manager.
pub fn is_management(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Management)
}

/// Any internal role.
pub fn is_staff(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Staff)
}

/// Staff get full access; everyone else authenticated is read-only.
pub fn is_staff_or_read_only(principal: &Principal, operation: Operation) -> bool {
    if !principal.is_authenticated() {
        return false;
    }
    if operation.is_read_only() {
        return true;
    }
    principal.role().in_group(RoleGroup::Staff)
}

/// Staff, or the owner of `target`.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::decision::is_owner_or_staff;
/// use claims_rbac::ownership::OwnershipLinks;
/// use claims_rbac::{Principal, Role};
///
/// let owner = Uuid::now_v7();
/// let claim = OwnershipLinks::owned_by_claimant(owner);
///
/// assert!(is_owner_or_staff(&Principal::authenticated(owner, None), &claim));
/// assert!(!is_owner_or_staff(&Principal::authenticated(Uuid::now_v7(), None), &claim));
/// assert!(is_owner_or_staff(
///     &Principal::authenticated(Uuid::now_v7(), Some(Role::Agent)),
///     &claim
/// ));
/// ```
pub fn is_owner_or_staff<O: Owned + ?Sized>(principal: &Principal, target: &O) -> bool {
    ownership::owner_or_staff(principal, target)
}

/// Admin, manager and adjuster can approve, deny and settle claims.
pub fn can_process_claims(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Processing)
}

/// Admin and manager can assign claims to staff.
pub fn can_assign_claims(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Management)
}

/// Reviewers may view fraud alerts but only processing roles resolve them.
pub fn can_manage_fraud_alerts(principal: &Principal, operation: Operation) -> bool {
    if !principal.is_authenticated() {
        return false;
    }
    let role = principal.role();
    if operation.is_read_only() {
        FRAUD_REVIEW.contains(&role)
    } else {
        role.in_group(RoleGroup::Processing)
    }
}

/// Admin, manager and reviewer can view analytics and reports.
pub fn can_view_analytics(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Oversight)
}

/// Admin and manager can manage users.
pub fn can_manage_users(principal: &Principal) -> bool {
    authenticated_in(principal, RoleGroup::Management)
}

/// Refinement of [`can_manage_users`] for a specific target account.
///
/// Admins can manage every account; managers can manage every account
/// except administrators.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::decision::can_manage_user_with_role;
/// use claims_rbac::{Principal, Role};
///
/// let manager = Principal::authenticated(Uuid::now_v7(), Some(Role::Manager));
/// assert!(can_manage_user_with_role(&manager, Role::Adjuster));
/// assert!(!can_manage_user_with_role(&manager, Role::Admin));
/// ```
pub fn can_manage_user_with_role(principal: &Principal, target_role: Role) -> bool {
    if !can_manage_users(principal) {
        return false;
    }
    match principal.role() {
        Role::Admin => true,
        Role::Manager => target_role != Role::Admin,
        _ => false,
    }
}

/// Named access-control scenario.
///
/// Lets a routing layer refer to a check by name and evaluate it
/// uniformly.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::{Decision, Operation, Principal, Role};
///
/// let reviewer = Principal::authenticated(Uuid::now_v7(), Some(Role::Reviewer));
/// let decision = Decision::parse("CanManageFraudAlerts").unwrap();
///
/// assert!(decision.evaluate(&reviewer, Operation::read_only()));
/// assert!(!decision.evaluate(&reviewer, Operation::mutating()));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// See [`is_admin`].
    IsAdmin,
    /// See [`is_management`].
    IsManagement,
    /// See [`is_staff`].
    IsStaff,
    /// See [`is_staff_or_read_only`].
    IsStaffOrReadOnly,
    /// See [`is_owner_or_staff`].
    IsOwnerOrStaff,
    /// See [`can_process_claims`].
    CanProcessClaims,
    /// See [`can_assign_claims`].
    CanAssignClaims,
    /// See [`can_manage_fraud_alerts`].
    CanManageFraudAlerts,
    /// See [`can_view_analytics`].
    CanViewAnalytics,
    /// See [`can_manage_users`].
    CanManageUsers,
}

impl Decision {
    /// Get all decisions.
    pub fn all() -> [Decision; 10] {
        [
            Decision::IsAdmin,
            Decision::IsManagement,
            Decision::IsStaff,
            Decision::IsStaffOrReadOnly,
            Decision::IsOwnerOrStaff,
            Decision::CanProcessClaims,
            Decision::CanAssignClaims,
            Decision::CanManageFraudAlerts,
            Decision::CanViewAnalytics,
            Decision::CanManageUsers,
        ]
    }

    /// Get the snake_case name of the decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::IsAdmin => "is_admin",
            Decision::IsManagement => "is_management",
            Decision::IsStaff => "is_staff",
            Decision::IsStaffOrReadOnly => "is_staff_or_read_only",
            Decision::IsOwnerOrStaff => "is_owner_or_staff",
            Decision::CanProcessClaims => "can_process_claims",
            Decision::CanAssignClaims => "can_assign_claims",
            Decision::CanManageFraudAlerts => "can_manage_fraud_alerts",
            Decision::CanViewAnalytics => "can_view_analytics",
            Decision::CanManageUsers => "can_manage_users",
        }
    }

    /// Parse a decision name.
    ///
    /// Accepts snake_case (`can_view_analytics`) and CamelCase
    /// (`CanViewAnalytics`), case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use claims_rbac::Decision;
    ///
    /// assert_eq!(Decision::parse("is_staff"), Some(Decision::IsStaff));
    /// assert_eq!(Decision::parse("IsOwnerOrStaff"), Some(Decision::IsOwnerOrStaff));
    /// assert_eq!(Decision::parse("can_fly"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Decision::all()
            .into_iter()
            .find(|d| d.as_str().replace('_', "") == normalized)
    }

    /// Check if the decision needs a target object.
    pub fn is_object_scoped(&self) -> bool {
        matches!(self, Decision::IsOwnerOrStaff)
    }

    /// Check if the decision depends on the operation kind.
    pub fn is_operation_sensitive(&self) -> bool {
        matches!(
            self,
            Decision::IsStaffOrReadOnly | Decision::CanManageFraudAlerts
        )
    }

    /// Evaluate the decision without a target object.
    ///
    /// `IsOwnerOrStaff` only restricts access per object, so list and
    /// create requests pass for any authenticated caller; ownership is
    /// checked later through [`evaluate_object`](Self::evaluate_object).
    pub fn evaluate(&self, principal: &Principal, operation: Operation) -> bool {
        match self {
            Decision::IsAdmin => is_admin(principal),
            Decision::IsManagement => is_management(principal),
            Decision::IsStaff => is_staff(principal),
            Decision::IsOwnerOrStaff => principal.is_authenticated(),
            Decision::IsStaffOrReadOnly => is_staff_or_read_only(principal, operation),
            Decision::CanProcessClaims => can_process_claims(principal),
            Decision::CanAssignClaims => can_assign_claims(principal),
            Decision::CanManageFraudAlerts => can_manage_fraud_alerts(principal, operation),
            Decision::CanViewAnalytics => can_view_analytics(principal),
            Decision::CanManageUsers => can_manage_users(principal),
        }
    }

    /// Evaluate the decision against a specific target object.
    ///
    /// Only `IsOwnerOrStaff` consults the target; every other decision
    /// ignores it.
    pub fn evaluate_object<O: Owned + ?Sized>(
        &self,
        principal: &Principal,
        operation: Operation,
        target: &O,
    ) -> bool {
        match self {
            Decision::IsOwnerOrStaff => is_owner_or_staff(principal, target),
            other => other.evaluate(principal, operation),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownDecision(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ownership::OwnershipLinks;
    use uuid::Uuid;

    fn with_role(role: Role) -> Principal {
        Principal::authenticated(Uuid::now_v7(), Some(role))
    }

    #[test]
    fn test_unauthenticated_always_denied() {
        let anonymous = Principal::anonymous();
        let claim = OwnershipLinks::owned_by_claimant(Uuid::now_v7());
        for decision in Decision::all() {
            assert!(!decision.evaluate(&anonymous, Operation::read_only()), "{decision}");
            assert!(!decision.evaluate(&anonymous, Operation::mutating()), "{decision}");
            assert!(!decision.evaluate_object(&anonymous, Operation::read_only(), &claim));
        }
    }

    #[test]
    fn test_unauthenticated_with_role_still_denied() {
        let principal = Principal {
            authenticated: false,
            user_id: None,
            role: Some(Role::Admin),
        };
        for decision in Decision::all() {
            assert!(!decision.evaluate(&principal, Operation::read_only()), "{decision}");
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(is_admin(&with_role(Role::Admin)));
        assert!(!is_admin(&with_role(Role::Manager)));
        assert!(!is_admin(&with_role(Role::Customer)));
    }

    #[test]
    fn test_is_staff_or_read_only() {
        let customer = with_role(Role::Customer);
        assert!(is_staff_or_read_only(&customer, Operation::read_only()));
        assert!(!is_staff_or_read_only(&customer, Operation::mutating()));
        assert!(is_staff_or_read_only(&with_role(Role::Agent), Operation::mutating()));
        assert!(!is_staff_or_read_only(&Principal::anonymous(), Operation::read_only()));
    }

    #[test]
    fn test_can_manage_fraud_alerts() {
        let reviewer = with_role(Role::Reviewer);
        assert!(can_manage_fraud_alerts(&reviewer, Operation::read_only()));
        assert!(!can_manage_fraud_alerts(&reviewer, Operation::mutating()));
        assert!(can_manage_fraud_alerts(&with_role(Role::Adjuster), Operation::mutating()));
        assert!(!can_manage_fraud_alerts(&with_role(Role::Agent), Operation::read_only()));
        assert!(!can_manage_fraud_alerts(&with_role(Role::Customer), Operation::read_only()));
    }

    #[test]
    fn test_can_manage_user_with_role() {
        let admin = with_role(Role::Admin);
        let manager = with_role(Role::Manager);
        for target in Role::all() {
            assert!(can_manage_user_with_role(&admin, target));
            assert_eq!(can_manage_user_with_role(&manager, target), target != Role::Admin);
            assert!(!can_manage_user_with_role(&with_role(Role::Adjuster), target));
        }
        assert!(!can_manage_user_with_role(&Principal::anonymous(), Role::Customer));
    }

    #[test]
    fn test_owner_or_staff_without_target_allows_authenticated() {
        let customer = with_role(Role::Customer);
        assert!(Decision::IsOwnerOrStaff.evaluate(&customer, Operation::read_only()));
        assert!(Decision::IsOwnerOrStaff.evaluate(&customer, Operation::mutating()));
        assert!(Decision::IsOwnerOrStaff.evaluate(&with_role(Role::Reviewer), Operation::mutating()));
        assert!(!Decision::IsOwnerOrStaff.evaluate(&Principal::anonymous(), Operation::read_only()));
    }

    #[test]
    fn test_evaluate_object_uses_ownership() {
        let owner = Uuid::now_v7();
        let claim = OwnershipLinks::owned_by_claimant(owner);
        let principal = Principal::authenticated(owner, None);
        assert!(Decision::IsOwnerOrStaff.evaluate_object(&principal, Operation::mutating(), &claim));
        assert!(!Decision::IsStaff.evaluate_object(&principal, Operation::read_only(), &claim));
    }

    #[test]
    fn test_decision_parse() {
        for decision in Decision::all() {
            assert_eq!(Decision::parse(decision.as_str()), Some(decision));
        }
        assert_eq!(Decision::parse("CanProcessClaims"), Some(Decision::CanProcessClaims));
        assert_eq!(Decision::parse("IS-STAFF"), Some(Decision::IsStaff));
        assert_eq!(
            "IsSuperuser".parse::<Decision>(),
            Err(RbacError::UnknownDecision("IsSuperuser".to_string()))
        );
    }

    #[test]
    fn test_decision_flags() {
        assert!(Decision::IsOwnerOrStaff.is_object_scoped());
        assert!(!Decision::IsStaff.is_object_scoped());
        assert!(Decision::CanManageFraudAlerts.is_operation_sensitive());
        assert!(!Decision::CanViewAnalytics.is_operation_sensitive());
    }
}
