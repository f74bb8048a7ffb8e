//! Object ownership
//!
//! Claims point at their owner through `claimant`, insurance policies
//! through `holder`, and generic user-linked records (notifications, agent
//! tasks) through `user`. The [`Owned`] trait exposes each relation as an
//! optional accessor so one check covers all of them without a shared base
//! type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::principal::Principal;
use crate::roles::RoleGroup;

/// A named link from a domain object to the principal who owns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipRelation {
    /// The person who filed a claim.
    Claimant,
    /// The holder of an insurance policy.
    Holder,
    /// The user a generic record belongs to.
    User,
}

impl OwnershipRelation {
    /// All relations, in the order they are checked.
    pub fn all() -> [OwnershipRelation; 3] {
        [
            OwnershipRelation::Claimant,
            OwnershipRelation::Holder,
            OwnershipRelation::User,
        ]
    }

    /// Get the relation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipRelation::Claimant => "claimant",
            OwnershipRelation::Holder => "holder",
            OwnershipRelation::User => "user",
        }
    }
}

impl fmt::Display for OwnershipRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability interface for objects that may be owned by a principal.
///
/// Every accessor defaults to `None`; an object type overrides only the
/// relations it actually has.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::ownership::{Owned, OwnershipRelation};
///
/// struct Claim {
///     claimant_id: Uuid,
/// }
///
/// impl Owned for Claim {
///     fn claimant(&self) -> Option<Uuid> {
///         Some(self.claimant_id)
///     }
/// }
///
/// let owner = Uuid::now_v7();
/// let claim = Claim { claimant_id: owner };
/// assert_eq!(claim.owner_relation(owner), Some(OwnershipRelation::Claimant));
/// assert_eq!(claim.owner_relation(Uuid::now_v7()), None);
/// ```
pub trait Owned {
    /// Who filed this object, if it has a claimant.
    fn claimant(&self) -> Option<Uuid> {
        None
    }

    /// Who holds this object, if it has a holder.
    fn holder(&self) -> Option<Uuid> {
        None
    }

    /// Which user this object belongs to, if it is user-linked.
    fn user(&self) -> Option<Uuid> {
        None
    }

    /// Value of a relation by name.
    fn relation(&self, relation: OwnershipRelation) -> Option<Uuid> {
        match relation {
            OwnershipRelation::Claimant => self.claimant(),
            OwnershipRelation::Holder => self.holder(),
            OwnershipRelation::User => self.user(),
        }
    }

    /// First relation linking this object to `user_id`.
    fn owner_relation(&self, user_id: Uuid) -> Option<OwnershipRelation> {
        OwnershipRelation::all()
            .into_iter()
            .find(|relation| self.relation(*relation) == Some(user_id))
    }
}

impl<T: Owned + ?Sized> Owned for &T {
    fn claimant(&self) -> Option<Uuid> {
        (**self).claimant()
    }

    fn holder(&self) -> Option<Uuid> {
        (**self).holder()
    }

    fn user(&self) -> Option<Uuid> {
        (**self).user()
    }
}

/// Raw ownership ids for callers that do not have a domain type at hand.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::ownership::{Owned, OwnershipLinks};
///
/// let holder = Uuid::now_v7();
/// let policy = OwnershipLinks::owned_by_holder(holder);
/// assert_eq!(policy.holder(), Some(holder));
/// assert!(policy.claimant().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnershipLinks {
    /// Claimant id, if the object has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimant: Option<Uuid>,
    /// Holder id, if the object has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<Uuid>,
    /// User id, if the object has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Uuid>,
}

impl OwnershipLinks {
    /// An object with no ownership relation.
    pub fn none() -> Self {
        Self::default()
    }

    /// An object owned through `claimant`.
    pub fn owned_by_claimant(user_id: Uuid) -> Self {
        Self {
            claimant: Some(user_id),
            ..Self::default()
        }
    }

    /// An object owned through `holder`.
    pub fn owned_by_holder(user_id: Uuid) -> Self {
        Self {
            holder: Some(user_id),
            ..Self::default()
        }
    }

    /// An object owned through `user`.
    pub fn owned_by_user(user_id: Uuid) -> Self {
        Self {
            user: Some(user_id),
            ..Self::default()
        }
    }
}

impl Owned for OwnershipLinks {
    fn claimant(&self) -> Option<Uuid> {
        self.claimant
    }

    fn holder(&self) -> Option<Uuid> {
        self.holder
    }

    fn user(&self) -> Option<Uuid> {
        self.user
    }
}

/// Object-level check: staff always pass, anyone else must own the target.
///
/// Unauthenticated callers are denied whatever role or identity they carry.
pub fn owner_or_staff<O: Owned + ?Sized>(principal: &Principal, target: &O) -> bool {
    if !principal.is_authenticated() {
        return false;
    }

    let role = principal.role();
    if role.in_group(RoleGroup::Staff) {
        tracing::trace!(role = %role, "staff override on object check");
        return true;
    }

    let Some(user_id) = principal.user_id else {
        return false;
    };

    match target.owner_relation(user_id) {
        Some(relation) => {
            tracing::trace!(user_id = %user_id, relation = %relation, "ownership matched");
            true
        }
        None => false,
    }
}
