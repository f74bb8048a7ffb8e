//! Roles and role groups
//!
//! The six roles of the claims platform and the named groups that share a
//! capability. Groups overlap (an adjuster is both staff and processing but
//! not management), so privilege is expressed as group membership rather
//! than an ordering between roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// Access tier assigned to an authenticated principal.
///
/// # Examples
///
/// ```
/// use claims_rbac::{Role, RoleGroup};
///
/// assert!(Role::Adjuster.in_group(RoleGroup::Staff));
/// assert!(Role::Adjuster.in_group(RoleGroup::Processing));
/// assert!(!Role::Adjuster.in_group(RoleGroup::Management));
/// assert_eq!(Role::default(), Role::Customer);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full system access, user management, configuration
    Admin,

    /// Oversees operations, approves high-value claims, assigns work
    Manager,

    /// Investigates and processes claims within limits
    Adjuster,

    /// QA, compliance review, audit and fraud investigation
    Reviewer,

    /// Customer-facing staff; helps file claims, views policies
    Agent,

    /// Files claims, views own data, appeals decisions
    Customer,
}

impl Role {
    /// Get all roles.
    pub fn all() -> [Role; 6] {
        [
            Role::Admin,
            Role::Manager,
            Role::Adjuster,
            Role::Reviewer,
            Role::Agent,
            Role::Customer,
        ]
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use claims_rbac::Role;
    ///
    /// assert_eq!(Role::Reviewer.as_str(), "reviewer");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Adjuster => "adjuster",
            Self::Reviewer => "reviewer",
            Self::Agent => "agent",
            Self::Customer => "customer",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::Adjuster => "Claims Adjuster",
            Self::Reviewer => "Reviewer",
            Self::Agent => "Agent",
            Self::Customer => "Customer",
        }
    }

    /// Short description of what the role is for.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Admin => "Full system access, user management, configuration",
            Self::Manager => {
                "Oversee operations, approve high-value claims, assign work, analytics"
            }
            Self::Adjuster => "Investigate and process claims, approve or deny within limits",
            Self::Reviewer => "QA and compliance review, audit, fraud investigation",
            Self::Agent => "Customer-facing, help file claims, view policies",
            Self::Customer => "File claims, view own data, appeal decisions",
        }
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use claims_rbac::Role;
    ///
    /// assert_eq!(Role::parse("ADJUSTER"), Some(Role::Adjuster));
    /// assert_eq!(Role::parse("superuser"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "adjuster" => Some(Self::Adjuster),
            "reviewer" => Some(Self::Reviewer),
            "agent" => Some(Self::Agent),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    /// Check membership in a role group.
    pub fn in_group(&self, group: RoleGroup) -> bool {
        group.contains(*self)
    }

    /// Get every group this role belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use claims_rbac::{Role, RoleGroup};
    ///
    /// assert_eq!(Role::Reviewer.groups(), vec![RoleGroup::Staff, RoleGroup::Oversight]);
    /// assert!(Role::Customer.groups().is_empty());
    /// ```
    pub fn groups(&self) -> Vec<RoleGroup> {
        RoleGroup::all()
            .into_iter()
            .filter(|group| group.contains(*self))
            .collect()
    }

    /// Check if this is an internal (staff) role.
    pub fn is_staff(&self) -> bool {
        self.in_group(RoleGroup::Staff)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Customer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownRole(s.to_string()))
    }
}

/// Every internal role.
pub const STAFF: &[Role] = &[
    Role::Admin,
    Role::Manager,
    Role::Adjuster,
    Role::Reviewer,
    Role::Agent,
];

/// Roles that assign work and manage users.
pub const MANAGEMENT: &[Role] = &[Role::Admin, Role::Manager];

/// Roles that can approve, deny and settle claims.
pub const PROCESSING: &[Role] = &[Role::Admin, Role::Manager, Role::Adjuster];

/// Roles with access to analytics, fraud and audits.
pub const OVERSIGHT: &[Role] = &[Role::Admin, Role::Manager, Role::Reviewer];

/// Roles that may view fraud alerts. Resolving them needs [`PROCESSING`].
pub const FRAUD_REVIEW: &[Role] = &[
    Role::Admin,
    Role::Manager,
    Role::Adjuster,
    Role::Reviewer,
];

/// Named, fixed set of roles sharing one capability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    /// Any internal role: admin, manager, adjuster, reviewer, agent
    Staff,

    /// Admin and manager
    Management,

    /// Admin, manager and adjuster
    Processing,

    /// Admin, manager and reviewer
    Oversight,
}

impl RoleGroup {
    /// Get all role groups.
    pub fn all() -> [RoleGroup; 4] {
        [
            RoleGroup::Staff,
            RoleGroup::Management,
            RoleGroup::Processing,
            RoleGroup::Oversight,
        ]
    }

    /// Roles belonging to this group.
    pub fn members(&self) -> &'static [Role] {
        match self {
            Self::Staff => STAFF,
            Self::Management => MANAGEMENT,
            Self::Processing => PROCESSING,
            Self::Oversight => OVERSIGHT,
        }
    }

    /// Check if `role` belongs to this group.
    pub fn contains(&self, role: Role) -> bool {
        self.members().contains(&role)
    }

    /// Get string representation of the group.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Management => "management",
            Self::Processing => "processing",
            Self::Oversight => "oversight",
        }
    }

    /// Parse group from string representation (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "staff" => Some(Self::Staff),
            "management" => Some(Self::Management),
            "processing" => Some(Self::Processing),
            "oversight" => Some(Self::Oversight),
            _ => None,
        }
    }
}

impl fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleGroup {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownRoleGroup(s.to_string()))
    }
}

/// Static membership test.
pub fn in_group(role: Role, group: RoleGroup) -> bool {
    group.contains(role)
}
