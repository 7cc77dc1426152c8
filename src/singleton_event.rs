use crate::{OverwritePolicy, SingletonErrorKind};

/// Events emitted by singleton and one-time create operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use lifetime_singleton::{OverwritePolicy, SingletonEvent};
///
/// let event = SingletonEvent::Set { name: "BaseA", policy: OverwritePolicy::Repeatedly };
/// assert_eq!(event.to_string(), "set { name: BaseA, policy: Repeatedly }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonEvent {
    /// A new instance was accepted by `set_instance`.
    Set {
        /// Registered name of the payload type
        name: &'static str,
        /// Policy the set was checked against
        policy: OverwritePolicy,
    },

    /// `get_instance` was called.
    Get {
        name: &'static str,
        /// Whether a live instance was found
        found: bool,
    },

    /// An operation failed and returned an error to its caller.
    Rejected {
        name: &'static str,
        kind: SingletonErrorKind,
    },

    /// A one-time create call completed.
    Create {
        name: &'static str,
        /// Whether this call ran the constructor and stored its result
        constructed: bool,
    },
}

impl SingletonEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SingletonEvent::Set { name, .. }
            | SingletonEvent::Get { name, .. }
            | SingletonEvent::Rejected { name, .. }
            | SingletonEvent::Create { name, .. } => *name,
        }
    }
}

impl std::fmt::Display for SingletonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SingletonEvent::Set { name, policy } => {
                write!(f, "set {{ name: {}, policy: {} }}", name, policy)
            }
            SingletonEvent::Get { name, found } => {
                write!(f, "get {{ name: {}, found: {} }}", name, found)
            }
            SingletonEvent::Rejected { name, kind } => {
                write!(f, "rejected {{ name: {}, kind: {} }}", name, kind)
            }
            SingletonEvent::Create { name, constructed } => {
                write!(
                    f,
                    "create {{ name: {}, constructed: {} }}",
                    name, constructed
                )
            }
        }
    }
}
