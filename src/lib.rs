//! # Lifetime Singleton
//!
//! Per-type global singletons that follow the lifetime of their owners.
//!
//! A type opts in with [`enable_singleton!`], choosing an [`OverwritePolicy`]. The
//! process-wide slot for that type holds only a weak reference to the instance, so
//! the singleton is available exactly as long as somebody keeps an `Arc` to it,
//! and becomes empty again once every owner lets go.
//!
//! A second facility, [`OneTimeCreate`], builds an instance of a type at most once
//! and shares it with every caller from then on.
//!
//! ## Quick Start
//!
//! ```rust
//! use lifetime_singleton::{enable_singleton, OverwritePolicy, Singleton};
//! use std::sync::Arc;
//!
//! struct Config {
//!     name: String,
//! }
//!
//! enable_singleton!(Config, OverwritePolicy::Repeatedly);
//!
//! let config = Arc::new(Config { name: "prod".to_string() });
//! Singleton::<Config>::set_instance(&config).unwrap();
//!
//! let current: Arc<Config> = Singleton::<Config>::get_instance().unwrap();
//! assert_eq!(current.name, "prod");
//!
//! drop(current);
//! drop(config);
//! assert_eq!(
//!     Singleton::<Config>::get_instance().err().unwrap().to_string(),
//!     "singleton for [Config] is empty"
//! );
//! ```
//!
//! ## Features
//!
//! - **Non-owning**: the registry observes instances, it never keeps them alive
//! - **Policies**: set once, set only while empty, or replace freely
//! - **Compile-time opt-in**: using a type that was not enabled does not compile
//! - **Thread-safe**: one lock per type, no global lock
//! - **Tracing support**: optional callback for monitoring operations
//!
//! ## Main Items
//!
//! - [`Singleton::get_instance`] / [`Singleton::set_instance`]
//! - [`OneTimeCreate::create`] / [`OneTimeCreate::try_create`]
//! - [`enable_singleton!`] / [`enable_one_time_create!`]
//! - [`set_trace_callback`] / [`clear_trace_callback`]

mod macros;
mod one_time_create;
mod singleton;
mod singleton_error;
mod singleton_event;
mod trace;
mod traits;

pub use one_time_create::{OneTimeCreate, OneTimeSlot};
pub use singleton::{Singleton, SingletonSlot};
pub use singleton_error::{SingletonError, SingletonErrorKind};
pub use singleton_event::SingletonEvent;
pub use trace::{clear_trace_callback, set_trace_callback, TraceCallback};
pub use traits::{OneTimeCreateTraits, OverwritePolicy, RejectingPolicy, SingletonTraits};
