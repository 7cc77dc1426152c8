//! Opt-in macros.
//!
//! Each macro implements the matching trait record for one type and generates
//! the type's hidden `LazyLock` slot static.

/// Enables a type for use with [`Singleton`](crate::Singleton).
///
/// The name used in error messages defaults to the type as written; pass
/// `as "Name"` to override it. The policy is any
/// [`OverwritePolicy`](crate::OverwritePolicy) constant expression.
///
/// # Examples
///
/// ```rust
/// use lifetime_singleton::{enable_singleton, OverwritePolicy, Singleton};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// enable_singleton!(dyn Greeter as "app::Greeter", OverwritePolicy::Repeatedly);
///
/// let greeter: Arc<dyn Greeter> = Arc::new(English);
/// Singleton::<dyn Greeter>::set_instance(&greeter).unwrap();
/// assert_eq!(Singleton::<dyn Greeter>::get_instance().unwrap().greet(), "hello");
///
/// drop(greeter);
/// assert_eq!(
///     Singleton::<dyn Greeter>::get_instance().err().unwrap().to_string(),
///     "singleton for [app::Greeter] is empty"
/// );
/// ```
#[macro_export]
macro_rules! enable_singleton {
    ($ty:ty as $name:expr, $policy:expr $(,)?) => {
        impl $crate::SingletonTraits for $ty {
            const NAME: &'static str = $name;
            const CAN_BE_SET: $crate::OverwritePolicy = $policy;

            fn slot() -> &'static $crate::SingletonSlot<Self> {
                static SLOT: ::std::sync::LazyLock<$crate::SingletonSlot<$ty>> =
                    ::std::sync::LazyLock::new($crate::SingletonSlot::new);
                &SLOT
            }
        }
    };
    ($ty:ty, $policy:expr $(,)?) => {
        $crate::enable_singleton!($ty as ::std::stringify!($ty), $policy);
    };
}

/// Enables a type for use with [`OneTimeCreate`](crate::OneTimeCreate).
///
/// # Examples
///
/// ```rust
/// use lifetime_singleton::{enable_one_time_create, OneTimeCreate};
///
/// struct Settings {
///     verbose: bool,
/// }
///
/// enable_one_time_create!(Settings as "app::Settings");
///
/// let settings = OneTimeCreate::<Settings>::create(|| Settings { verbose: true });
/// assert!(settings.verbose);
/// ```
#[macro_export]
macro_rules! enable_one_time_create {
    ($ty:ty as $name:expr $(,)?) => {
        impl $crate::OneTimeCreateTraits for $ty {
            const NAME: &'static str = $name;

            fn slot() -> &'static $crate::OneTimeSlot<Self> {
                static SLOT: ::std::sync::LazyLock<$crate::OneTimeSlot<$ty>> =
                    ::std::sync::LazyLock::new($crate::OneTimeSlot::new);
                &SLOT
            }
        }
    };
    ($ty:ty $(,)?) => {
        $crate::enable_one_time_create!($ty as ::std::stringify!($ty));
    };
}
