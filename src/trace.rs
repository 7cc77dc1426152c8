//! Process-wide tracing hook.
//!
//! The crate never logs on its own. Callers who want to observe singleton
//! activity install a callback here and route the [`SingletonEvent`]s wherever
//! they like.

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::SingletonEvent;

/// Shared handle to an installed trace callback.
pub type TraceCallback = Arc<dyn Fn(&SingletonEvent) + Send + Sync>;

static TRACE: LazyLock<Mutex<Option<TraceCallback>>> = LazyLock::new(|| Mutex::new(None));

/// Set a tracing callback for singleton and one-time create operations.
///
/// Replaces any previously installed callback.
///
/// # Lock Poisoning Recovery
///
/// If the trace lock is poisoned, this function recovers the inner value.
/// Trace state is a single `Option`, so it cannot be left half-written.
///
/// # Examples
///
/// ```rust
/// use lifetime_singleton::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| eprintln!("singleton: {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
    let mut guard = TRACE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::new(callback));
}

/// Remove the tracing callback. Later operations emit nothing.
pub fn clear_trace_callback() {
    let mut guard = TRACE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Invoke the current callback, if any.
///
/// The callback runs after the trace lock is released, so it may call back
/// into this crate, including replacing itself.
///
/// # Panics
///
/// A panicking callback propagates to the caller of the traced operation.
/// Slot locks are never held while this runs.
pub(crate) fn emit_event(event: &SingletonEvent) {
    let callback = TRACE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    if let Some(callback) = callback {
        callback(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;

    const NAME: &str = "trace::tests::Probe";

    fn probe_event() -> SingletonEvent {
        SingletonEvent::Get {
            name: NAME,
            found: true,
        }
    }

    #[test]
    #[serial]
    fn test_emit_reaches_callback() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        set_trace_callback(move |e| {
            if e.name() == NAME {
                events_clone.lock().unwrap().push(e.to_string());
            }
        });

        emit_event(&probe_event());

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0], "get { name: trace::tests::Probe, found: true }");

        clear_trace_callback();
    }

    #[test]
    #[serial]
    fn test_clear_stops_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        set_trace_callback(move |e| {
            if e.name() == NAME {
                events_clone.lock().unwrap().push(e.to_string());
            }
        });
        emit_event(&probe_event());
        clear_trace_callback();
        emit_event(&probe_event());

        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    #[serial]
    fn test_callback_may_replace_itself() {
        let hits = Arc::new(Mutex::new(0u32));
        let hits_clone = hits.clone();

        set_trace_callback(move |e| {
            if e.name() == NAME {
                *hits_clone.lock().unwrap() += 1;
                clear_trace_callback();
            }
        });

        emit_event(&probe_event());
        emit_event(&probe_event());

        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
