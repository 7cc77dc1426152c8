use std::fmt;

use crate::RejectingPolicy;

/// Errors raised by [`Singleton`](crate::Singleton) and
/// [`OneTimeCreate`](crate::OneTimeCreate).
///
/// The `Display` output is stable and part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonError {
    /// `get_instance` found no live instance.
    EmptyInstance { name: &'static str },
    /// `set_instance` was handed an empty handle.
    NullInstance { name: &'static str },
    /// `set_instance` was rejected by the type's overwrite policy.
    PolicyViolation {
        name: &'static str,
        policy: RejectingPolicy,
    },
    /// The one-time constructor produced nothing.
    ConstructionFailure { name: &'static str },
}

/// Fieldless category of a [`SingletonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonErrorKind {
    EmptyInstance,
    NullInstance,
    PolicyViolation,
    ConstructionFailure,
}

impl SingletonError {
    pub fn kind(&self) -> SingletonErrorKind {
        match self {
            SingletonError::EmptyInstance { .. } => SingletonErrorKind::EmptyInstance,
            SingletonError::NullInstance { .. } => SingletonErrorKind::NullInstance,
            SingletonError::PolicyViolation { .. } => SingletonErrorKind::PolicyViolation,
            SingletonError::ConstructionFailure { .. } => SingletonErrorKind::ConstructionFailure,
        }
    }

    /// The registered name of the type the error is about.
    pub fn name(&self) -> &'static str {
        match self {
            SingletonError::EmptyInstance { name }
            | SingletonError::NullInstance { name }
            | SingletonError::PolicyViolation { name, .. }
            | SingletonError::ConstructionFailure { name } => *name,
        }
    }
}

impl fmt::Display for SingletonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonError::EmptyInstance { name } => {
                write!(f, "singleton for [{}] is empty", name)
            }
            SingletonError::NullInstance { name } => {
                write!(f, "singleton for [{}] passed null instance", name)
            }
            SingletonError::PolicyViolation {
                name,
                policy: RejectingPolicy::Once,
            } => write!(f, "singleton for [{}] can only be set once", name),
            SingletonError::PolicyViolation {
                name,
                policy: RejectingPolicy::WhenEmpty,
            } => write!(f, "singleton for [{}] can only be set when empty", name),
            SingletonError::ConstructionFailure { name } => {
                write!(f, "OneTimeCreate of [{}] failed", name)
            }
        }
    }
}

impl std::error::Error for SingletonError {}

impl fmt::Display for SingletonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonErrorKind::EmptyInstance => write!(f, "EmptyInstance"),
            SingletonErrorKind::NullInstance => write!(f, "NullInstance"),
            SingletonErrorKind::PolicyViolation => write!(f, "PolicyViolation"),
            SingletonErrorKind::ConstructionFailure => write!(f, "ConstructionFailure"),
        }
    }
}
