//! # Claims RBAC
//!
//! Role-based access decisions for the claims-processing API.
//!
//! ## Overview
//!
//! Given an authenticated caller and the request it is making, this crate
//! answers allow or deny. It does not authenticate anyone, store roles or
//! know anything about claims beyond who owns them.
//!
//! - **Roles**: `admin`, `manager`, `adjuster`, `reviewer`, `agent`, `customer`
//! - **Role groups**: staff, management, processing, oversight
//! - **Operations**: read-only (`GET`, `HEAD`, `OPTIONS`) or mutating
//! - **Ownership**: claims via `claimant`, policies via `holder`, records via `user`
//! - **Decisions**: ten named checks used by the API layer
//!
//! ## Architecture
//!
//! ```text
//! Principal ─→ resolve_role ─→ Role ─→ RoleGroup membership ─┐
//! Operation (method is safe?) ───────────────────────────────┼─→ Decision ─→ bool
//! Target object (claimant / holder / user) ──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use claims_rbac::{decision, AccessControl, Decision, Operation, Principal, Role};
//! use claims_rbac::ownership::OwnershipLinks;
//!
//! let customer_id = Uuid::now_v7();
//! let customer = Principal::authenticated(customer_id, None); // no profile: customer
//! let claim = OwnershipLinks::owned_by_claimant(customer_id);
//!
//! assert!(decision::is_staff_or_read_only(&customer, Operation::read_only()));
//! assert!(!decision::is_staff_or_read_only(&customer, Operation::mutating()));
//! assert!(decision::is_owner_or_staff(&customer, &claim));
//!
//! let access = AccessControl::default();
//! let reviewer = Principal::authenticated(Uuid::now_v7(), Some(Role::Reviewer));
//! let resolve = Operation::parse_method("POST").unwrap();
//! assert!(access.authorize(Decision::CanManageFraudAlerts, &reviewer, resolve).is_err());
//! ```
//!
//! ## Logging
//!
//! Outcomes evaluated through [`AccessControl`] are emitted with `tracing`.
//! Installing a subscriber is left to the host service.

pub mod access;
pub mod config;
pub mod decision;
pub mod error;
pub mod operation;
pub mod ownership;
pub mod principal;
pub mod roles;

// Re-export main types for convenience
pub use access::AccessControl;
pub use config::RbacConfig;
pub use decision::Decision;
pub use error::{RbacError, RbacResult};
pub use operation::{Method, Operation, OperationKind};
pub use ownership::{Owned, OwnershipLinks, OwnershipRelation};
pub use principal::{resolve_role, Principal};
pub use roles::{in_group, Role, RoleGroup};
