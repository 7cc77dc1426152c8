//! Per-type trait records.
//!
//! A payload type opts into [`Singleton`](crate::Singleton) or
//! [`OneTimeCreate`](crate::OneTimeCreate) by implementing the matching trait here,
//! usually through [`enable_singleton!`](crate::enable_singleton) or
//! [`enable_one_time_create!`](crate::enable_one_time_create). A type without the
//! impl cannot be used with either facility; the compiler rejects it.

use std::fmt;

use crate::one_time_create::OneTimeSlot;
use crate::singleton::SingletonSlot;

/// Rule deciding when [`Singleton::set_instance`](crate::Singleton::set_instance)
/// may replace the current instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwritePolicy {
    /// Only the first successful set is accepted, for the whole process lifetime.
    Once,
    /// A set is accepted only while no live instance is held by anyone.
    WhenEmpty,
    /// Every set is accepted.
    Repeatedly,
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverwritePolicy::Once => write!(f, "Once"),
            OverwritePolicy::WhenEmpty => write!(f, "WhenEmpty"),
            OverwritePolicy::Repeatedly => write!(f, "Repeatedly"),
        }
    }
}

/// The overwrite policies that can reject a set.
///
/// Carried by [`SingletonError::PolicyViolation`](crate::SingletonError::PolicyViolation);
/// [`OverwritePolicy::Repeatedly`] never rejects and has no counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectingPolicy {
    Once,
    WhenEmpty,
}

impl From<RejectingPolicy> for OverwritePolicy {
    fn from(policy: RejectingPolicy) -> Self {
        match policy {
            RejectingPolicy::Once => OverwritePolicy::Once,
            RejectingPolicy::WhenEmpty => OverwritePolicy::WhenEmpty,
        }
    }
}

/// Trait record for types usable with [`Singleton`](crate::Singleton).
///
/// The impl supplies the display name used in error messages, the overwrite
/// policy, and the accessor for the type's process-wide slot.
///
/// # Implementing by hand
///
/// ```rust
/// use lifetime_singleton::{OverwritePolicy, Singleton, SingletonSlot, SingletonTraits};
/// use std::sync::{Arc, LazyLock};
///
/// struct Clock;
///
/// impl SingletonTraits for Clock {
///     const NAME: &'static str = "app::Clock";
///     const CAN_BE_SET: OverwritePolicy = OverwritePolicy::Once;
///
///     fn slot() -> &'static SingletonSlot<Self> {
///         static SLOT: LazyLock<SingletonSlot<Clock>> = LazyLock::new(SingletonSlot::new);
///         &SLOT
///     }
/// }
///
/// let clock = Arc::new(Clock);
/// Singleton::<Clock>::set_instance(&clock).unwrap();
/// assert!(Singleton::<Clock>::contains());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not enabled as a singleton",
    label = "no singleton trait record for `{Self}`",
    note = "use `enable_singleton!({Self}, OverwritePolicy::...)` to enable it"
)]
pub trait SingletonTraits: Send + Sync + 'static {
    /// Name used verbatim in error messages.
    const NAME: &'static str;

    /// When the instance may be replaced.
    const CAN_BE_SET: OverwritePolicy;

    /// The slot holding the weak reference for this type.
    fn slot() -> &'static SingletonSlot<Self>;
}

/// Trait record for types usable with [`OneTimeCreate`](crate::OneTimeCreate).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not enabled for one-time create",
    label = "no one-time create trait record for `{Self}`",
    note = "use `enable_one_time_create!({Self})` to enable it"
)]
pub trait OneTimeCreateTraits: Send + Sync + 'static {
    /// Name used verbatim in error messages.
    const NAME: &'static str;

    /// The slot owning the single instance for this type.
    fn slot() -> &'static OneTimeSlot<Self>;
}
