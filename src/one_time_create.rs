//! One-time construction of a shared instance.
//!
//! [`OneTimeCreate<T>`] runs a constructor for `T` at most once successfully in
//! the life of the process and then hands every caller a clone of the same
//! `Arc<T>`. The constructor passed on later calls is never invoked, so whatever
//! it would have captured is ignored.
//!
//! A constructor that yields nothing does not count: the slot stays uncreated and
//! the next call runs its own constructor.
//!
//! # Examples
//!
//! ```rust
//! use lifetime_singleton::{enable_one_time_create, OneTimeCreate};
//!
//! struct Pool {
//!     size: usize,
//! }
//!
//! enable_one_time_create!(Pool);
//!
//! let first = OneTimeCreate::<Pool>::create(|| Pool { size: 4 });
//! let second = OneTimeCreate::<Pool>::create(|| Pool { size: 16 });
//!
//! assert_eq!(second.size, 4);
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::trace::emit_event;
use crate::{OneTimeCreateTraits, SingletonError, SingletonErrorKind, SingletonEvent};

/// Storage behind a one-time create type.
///
/// Owns the instance once it exists and never gives it up.
pub struct OneTimeSlot<T: ?Sized> {
    instance: Mutex<Option<Arc<T>>>,
}

impl<T: ?Sized> OneTimeSlot<T> {
    /// A slot whose instance has not been created yet.
    pub const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
        }
    }

    // A constructor that panics poisons the lock before anything is stored, so
    // the inner value is still accurate.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.instance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: ?Sized> Default for OneTimeSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for one-time construction of `T`.
///
/// Like [`Singleton`](crate::Singleton), this type is never instantiated. `T`
/// must carry a [`OneTimeCreateTraits`] record:
///
/// ```compile_fail
/// use lifetime_singleton::OneTimeCreate;
///
/// struct NotEnabled;
///
/// let _ = OneTimeCreate::<NotEnabled>::create(|| NotEnabled);
/// ```
///
/// The constructor runs while the slot lock is held. It must not call back into
/// `OneTimeCreate<T>` for the same `T`, or it deadlocks.
pub struct OneTimeCreate<T: OneTimeCreateTraits + ?Sized> {
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: OneTimeCreateTraits + ?Sized> OneTimeCreate<T> {
    /// Return the instance, building it with `init` if it does not exist yet.
    ///
    /// If `init` returns `None` this call returns `None` and the slot stays
    /// uncreated. Concurrent callers serialize: exactly one of them runs a
    /// constructor that succeeds, the rest receive its result.
    pub fn try_create(init: impl FnOnce() -> Option<Arc<T>>) -> Option<Arc<T>> {
        Self::settle(|| init().ok_or(())).ok()
    }

    /// Like [`try_create`](Self::try_create), reporting an empty constructor result
    /// as an error.
    ///
    /// # Errors
    ///
    /// [`SingletonError::ConstructionFailure`] if the instance did not exist and
    /// `init` returned `None`. The failure is not sticky; a later call retries.
    pub fn create_checked(
        init: impl FnOnce() -> Option<Arc<T>>,
    ) -> Result<Arc<T>, SingletonError> {
        Self::settle(|| init().ok_or(()))
            .map_err(|()| SingletonError::ConstructionFailure { name: T::NAME })
    }

    /// Return the instance, if it has been created. Never constructs.
    pub fn get() -> Option<Arc<T>> {
        T::slot().lock().clone()
    }

    /// Whether a constructor has succeeded for `T`.
    pub fn is_created() -> bool {
        T::slot().lock().is_some()
    }

    fn settle<E>(init: impl FnOnce() -> Result<Arc<T>, E>) -> Result<Arc<T>, E> {
        let outcome = {
            let mut instance = T::slot().lock();
            match instance.as_ref() {
                Some(existing) => Ok((existing.clone(), false)),
                None => init().map(|built| {
                    *instance = Some(built.clone());
                    (built, true)
                }),
            }
        };

        match outcome {
            Ok((instance, constructed)) => {
                emit_event(&SingletonEvent::Create {
                    name: T::NAME,
                    constructed,
                });
                Ok(instance)
            }
            Err(err) => {
                emit_event(&SingletonEvent::Rejected {
                    name: T::NAME,
                    kind: SingletonErrorKind::ConstructionFailure,
                });
                Err(err)
            }
        }
    }
}

impl<T: OneTimeCreateTraits> OneTimeCreate<T> {
    /// Return the instance, building it from `init` if it does not exist yet.
    pub fn create(init: impl FnOnce() -> T) -> Arc<T> {
        match Self::settle(|| Ok::<_, Infallible>(Arc::new(init()))) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
