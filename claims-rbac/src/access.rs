//! Access evaluator used at the API boundary.
//!
//! Wraps the pure decisions with structured logging, and offers an
//! `authorize` form that turns a deny into an error for `?` propagation.

use tracing::{debug, info};

use crate::config::RbacConfig;
use crate::decision::Decision;
use crate::error::{RbacError, RbacResult};
use crate::operation::Operation;
use crate::ownership::Owned;
use crate::principal::Principal;

/// Evaluates named decisions and logs their outcome.
///
/// Holds no mutable state; share one instance across request handlers.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use claims_rbac::{AccessControl, Decision, Operation, Principal, RbacError, Role};
///
/// let access = AccessControl::default();
/// let adjuster = Principal::authenticated(Uuid::now_v7(), Some(Role::Adjuster));
///
/// assert!(access.check(Decision::CanProcessClaims, &adjuster, Operation::mutating()));
/// assert_eq!(
///     access.authorize(Decision::CanAssignClaims, &adjuster, Operation::mutating()),
///     Err(RbacError::Forbidden(Decision::CanAssignClaims))
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessControl {
    config: RbacConfig,
}

impl AccessControl {
    /// Create an evaluator with the given logging configuration.
    pub fn new(config: RbacConfig) -> Self {
        Self { config }
    }

    /// Create an evaluator configured from the environment.
    pub fn from_env() -> Self {
        Self::new(RbacConfig::from_env())
    }

    /// Get the logging configuration.
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    /// Evaluate a decision that does not need a target object.
    pub fn check(&self, decision: Decision, principal: &Principal, operation: Operation) -> bool {
        let allowed = decision.evaluate(principal, operation);
        self.record(decision, principal, operation, allowed);
        allowed
    }

    /// Evaluate a decision against a specific target object.
    pub fn check_object<O: Owned + ?Sized>(
        &self,
        decision: Decision,
        principal: &Principal,
        operation: Operation,
        target: &O,
    ) -> bool {
        let allowed = decision.evaluate_object(principal, operation, target);
        self.record(decision, principal, operation, allowed);
        allowed
    }

    /// Like [`check`](Self::check), but a deny becomes an error.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::Forbidden`] naming the decision that denied.
    pub fn authorize(
        &self,
        decision: Decision,
        principal: &Principal,
        operation: Operation,
    ) -> RbacResult<()> {
        if self.check(decision, principal, operation) {
            Ok(())
        } else {
            Err(RbacError::Forbidden(decision))
        }
    }

    /// Like [`check_object`](Self::check_object), but a deny becomes an error.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::Forbidden`] naming the decision that denied.
    pub fn authorize_object<O: Owned + ?Sized>(
        &self,
        decision: Decision,
        principal: &Principal,
        operation: Operation,
        target: &O,
    ) -> RbacResult<()> {
        if self.check_object(decision, principal, operation, target) {
            Ok(())
        } else {
            Err(RbacError::Forbidden(decision))
        }
    }

    fn record(&self, decision: Decision, principal: &Principal, operation: Operation, allowed: bool) {
        let role = principal.role();
        let kind = operation.kind();
        let loud = if allowed {
            self.config.log_grants
        } else {
            self.config.log_denials
        };

        if loud {
            info!(
                decision = %decision,
                role = %role,
                authenticated = principal.is_authenticated(),
                operation = %kind,
                allowed,
                "Access decision"
            );
        } else {
            debug!(
                decision = %decision,
                role = %role,
                authenticated = principal.is_authenticated(),
                operation = %kind,
                allowed,
                "Access decision"
            );
        }
    }
}
