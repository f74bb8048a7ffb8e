//! Authenticated caller and role resolution
//!
//! A [`Principal`] is built fresh per request by the upstream authentication
//! layer. Its role may be missing (for example a user without a profile);
//! [`resolve_role`] turns that into the least-privileged role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

/// The caller an access decision is made for.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::{Principal, Role};
///
/// let user_id = Uuid::now_v7();
/// let principal = Principal::authenticated(user_id, Some(Role::Agent));
/// assert!(principal.is_authenticated());
/// assert_eq!(principal.role(), Role::Agent);
///
/// let anonymous = Principal::anonymous();
/// assert!(!anonymous.is_authenticated());
/// assert_eq!(anonymous.role(), Role::Customer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Whether upstream authentication succeeded
    pub authenticated: bool,

    /// Identity of the caller, absent for anonymous callers.
    ///
    /// An authenticated caller without an identity is accepted; role
    /// checks still apply to it, but it never owns any object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// Role attached to the caller's profile, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Principal {
    /// Create an authenticated principal.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The caller's identity
    /// * `role` - The role from the caller's profile; `None` when no profile exists
    pub fn authenticated(user_id: Uuid, role: Option<Role>) -> Self {
        Self {
            authenticated: true,
            user_id: Some(user_id),
            role,
        }
    }

    /// Create an anonymous principal.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            role: None,
        }
    }

    /// Check if the caller is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Resolved role of the caller. See [`resolve_role`].
    pub fn role(&self) -> Role {
        resolve_role(self)
    }

    /// Check if `user_id` is this caller's identity.
    ///
    /// Anonymous callers have no identity and never match.
    pub fn is(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Map a principal to exactly one role.
///
/// A principal without a role resolves to [`Role::Customer`]. This never
/// fails; a missing role is the documented default, not an error.
pub fn resolve_role(principal: &Principal) -> Role {
    principal.role.unwrap_or_default()
}
