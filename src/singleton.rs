//! Per-type singletons that observe, but never own, their instance.
//!
//! Each enabled type has one [`SingletonSlot`] for the whole process. The slot keeps
//! a [`Weak`] reference to the instance most recently accepted by
//! [`Singleton::set_instance`], so the singleton empties itself as soon as the last
//! external `Arc` is dropped.
//!
//! # Examples
//!
//! ```rust
//! use lifetime_singleton::{enable_singleton, OverwritePolicy, Singleton};
//! use std::sync::Arc;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! enable_singleton!(Database, OverwritePolicy::WhenEmpty);
//!
//! {
//!     let db = Arc::new(Database { url: "postgres://localhost".to_string() });
//!     Singleton::<Database>::set_instance(&db).unwrap();
//!
//!     let current = Singleton::<Database>::get_instance().unwrap();
//!     assert_eq!(current.url, "postgres://localhost");
//! }
//!
//! // Every owner is gone, so is the singleton.
//! assert!(Singleton::<Database>::get_instance().is_err());
//! ```

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::trace::emit_event;
use crate::{OverwritePolicy, RejectingPolicy, SingletonError, SingletonEvent, SingletonTraits};

/// Storage behind a singleton type.
///
/// Returned by [`SingletonTraits::slot`]. The contents are private; all access
/// goes through [`Singleton`].
pub struct SingletonSlot<T: ?Sized> {
    state: Mutex<SlotState<T>>,
}

struct SlotState<T: ?Sized> {
    current: Option<Weak<T>>,
    has_been_set: bool,
}

impl<T: ?Sized> SlotState<T> {
    fn live(&self) -> Option<Arc<T>> {
        self.current.as_ref().and_then(Weak::upgrade)
    }
}

impl<T: ?Sized> SingletonSlot<T> {
    /// An empty slot that has never been set.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                current: None,
                has_been_set: false,
            }),
        }
    }

    // Upgraded `Arc`s are bound outside the guard's scope, so no payload `Drop`
    // runs under the lock and a poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: ?Sized> Default for SingletonSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for singleton operations on `T`.
///
/// `Singleton<T>` is never instantiated; it only namespaces the associated
/// functions. `T` must carry a [`SingletonTraits`] record, otherwise the call does
/// not compile:
///
/// ```compile_fail
/// use lifetime_singleton::Singleton;
///
/// struct NotEnabled;
///
/// let _ = Singleton::<NotEnabled>::get_instance();
/// ```
pub struct Singleton<T: SingletonTraits + ?Sized> {
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: SingletonTraits + ?Sized> Singleton<T> {
    /// Retrieve the current instance.
    ///
    /// Returns a new strong reference, so the instance stays alive at least as
    /// long as the returned `Arc`.
    ///
    /// # Errors
    ///
    /// [`SingletonError::EmptyInstance`] if the slot was never set or every owner
    /// of the last instance has dropped it.
    pub fn get_instance() -> Result<Arc<T>, SingletonError> {
        let live = T::slot().lock().live();

        emit_event(&SingletonEvent::Get {
            name: T::NAME,
            found: live.is_some(),
        });

        live.ok_or(SingletonError::EmptyInstance { name: T::NAME })
    }

    /// Make `instance` the current singleton, subject to `T::CAN_BE_SET`.
    ///
    /// Only a weak reference is kept. The caller (or whoever it hands the `Arc`
    /// to) decides how long the instance lives. Accepts `&Arc<T>`,
    /// `&Option<Arc<T>>` or `Option<&Arc<T>>`.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::NullInstance`] if `instance` is empty, whatever the policy
    /// - [`SingletonError::PolicyViolation`] under [`OverwritePolicy::Once`] if the
    ///   slot was ever set, or under [`OverwritePolicy::WhenEmpty`] if a live
    ///   instance is still held somewhere
    ///
    /// A rejected call leaves the slot untouched.
    pub fn set_instance<'a>(instance: impl Into<Option<&'a Arc<T>>>) -> Result<(), SingletonError> {
        let result = Self::store(instance.into());

        match &result {
            Ok(()) => emit_event(&SingletonEvent::Set {
                name: T::NAME,
                policy: T::CAN_BE_SET,
            }),
            Err(err) => emit_event(&SingletonEvent::Rejected {
                name: T::NAME,
                kind: err.kind(),
            }),
        }

        result
    }

    /// Whether a live instance is currently held.
    pub fn contains() -> bool {
        // Outlives the guard: dropping the last owner must not happen under the lock.
        let live = T::slot().lock().live();
        live.is_some()
    }

    /// Whether any `set_instance` call has ever succeeded for `T`.
    ///
    /// Stays `true` after the instance itself has gone away.
    pub fn has_been_set() -> bool {
        T::slot().lock().has_been_set
    }

    fn store(instance: Option<&Arc<T>>) -> Result<(), SingletonError> {
        let instance = instance.ok_or(SingletonError::NullInstance { name: T::NAME })?;

        // Declared before the guard so it is dropped after it.
        let existing;
        let mut state = T::slot().lock();

        let rejected_by = match T::CAN_BE_SET {
            OverwritePolicy::Once => state.has_been_set.then_some(RejectingPolicy::Once),
            OverwritePolicy::WhenEmpty => {
                existing = state.live();
                existing.is_some().then_some(RejectingPolicy::WhenEmpty)
            }
            OverwritePolicy::Repeatedly => None,
        };
        if let Some(policy) = rejected_by {
            return Err(SingletonError::PolicyViolation {
                name: T::NAME,
                policy,
            });
        }

        state.current = Some(Arc::downgrade(instance));
        state.has_been_set = true;

        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
