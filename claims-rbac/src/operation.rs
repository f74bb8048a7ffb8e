//! # Operations
//!
//! An access attempt is classified only by whether it is read-only.
//! Read-only means one of the HTTP-safe methods (`GET`, `HEAD`, `OPTIONS`);
//! every other method is mutating.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// HTTP request methods understood by the access layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Retrieve headers only.
    Head,
    /// Describe communication options.
    Options,
    /// Create a resource or trigger processing.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
    /// Loop-back diagnostic.
    Trace,
    /// Open a tunnel.
    Connect,
}

impl Method {
    /// Get the canonical upper-case method label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        }
    }

    /// Parse a method label.
    ///
    /// # Arguments
    ///
    /// * `s` - Method label (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use claims_rbac::operation::Method;
    ///
    /// assert_eq!(Method::parse("get"), Some(Method::Get));
    /// assert_eq!(Method::parse("PATCH"), Some(Method::Patch));
    /// assert_eq!(Method::parse("BREW"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "DELETE" => Some(Method::Delete),
            "TRACE" => Some(Method::Trace),
            "CONNECT" => Some(Method::Connect),
            _ => None,
        }
    }

    /// Get all methods.
    pub fn all() -> Vec<Self> {
        vec![
            Method::Get,
            Method::Head,
            Method::Options,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
            Method::Trace,
            Method::Connect,
        ]
    }

    /// Check if this is a safe (read-only) method.
    ///
    /// # Example
    ///
    /// ```
    /// use claims_rbac::operation::Method;
    ///
    /// assert!(Method::Head.is_safe());
    /// assert!(!Method::Post.is_safe());
    /// ```
    pub fn is_safe(&self) -> bool {
        matches!(self, Method::Get | Method::Head | Method::Options)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownMethod(s.to_string()))
    }
}

/// Read-only versus mutating classification of an access attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Does not modify anything.
    ReadOnly,
    /// Creates, changes or removes something.
    Mutating,
}

impl OperationKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::ReadOnly => "read_only",
            OperationKind::Mutating => "mutating",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access attempt as seen by the decision layer.
///
/// # Example
///
/// ```
/// use claims_rbac::operation::{Method, Operation};
///
/// assert!(Operation::from_method(Method::Options).is_read_only());
/// assert!(!Operation::parse_method("delete").unwrap().is_read_only());
/// assert!(Operation::parse_method("BREW").is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Whether the request method is HTTP-safe.
    pub method_is_safe: bool,
}

impl Operation {
    /// A read-only operation.
    pub fn read_only() -> Self {
        Self {
            method_is_safe: true,
        }
    }

    /// A mutating operation.
    pub fn mutating() -> Self {
        Self {
            method_is_safe: false,
        }
    }

    /// Classify a known method.
    pub fn from_method(method: Method) -> Self {
        Self {
            method_is_safe: method.is_safe(),
        }
    }

    /// Classify a method label, rejecting unknown labels.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::UnknownMethod`] when the label is not an HTTP method.
    pub fn parse_method(label: &str) -> Result<Self, RbacError> {
        label.parse::<Method>().map(Self::from_method)
    }

    /// Classify a method label leniently.
    ///
    /// Anything that is not a known safe method counts as mutating, so an
    /// unrecognized verb can never widen access.
    pub fn from_label(label: &str) -> Self {
        Self {
            method_is_safe: Method::parse(label).is_some_and(|m| m.is_safe()),
        }
    }

    /// Check if the operation is read-only.
    pub fn is_read_only(&self) -> bool {
        self.method_is_safe
    }

    /// Get the operation kind.
    pub fn kind(&self) -> OperationKind {
        if self.method_is_safe {
            OperationKind::ReadOnly
        } else {
            OperationKind::Mutating
        }
    }
}

impl From<Method> for Operation {
    fn from(method: Method) -> Self {
        Self::from_method(method)
    }
}
