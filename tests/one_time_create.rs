//! Integration tests for one-time construction.
//!
//! Each test declares its own payload types, so the slots are independent and the
//! tests can run in parallel.

use lifetime_singleton::{enable_one_time_create, OneTimeCreate, SingletonError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_first_arguments_win() {
    struct Widget {
        id: String,
    }

    impl Widget {
        fn new(id: &str) -> Self {
            Self { id: id.to_string() }
        }
    }

    enable_one_time_create!(Widget);

    let first = OneTimeCreate::<Widget>::create(|| Widget::new("first"));
    let second = OneTimeCreate::<Widget>::create(|| Widget::new("second"));

    assert_eq!(first.id, "first");
    assert_eq!(second.id, "first");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_constructor_runs_once_across_calls() {
    struct Expensive;
    enable_one_time_create!(Expensive);

    let calls = AtomicUsize::new(0);
    for _ in 0..5 {
        OneTimeCreate::<Expensive>::create(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Expensive
        });
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_instance_outlives_callers() {
    struct Kept(u32);
    enable_one_time_create!(Kept);

    {
        let created = OneTimeCreate::<Kept>::create(|| Kept(5));
        assert_eq!(Arc::strong_count(&created), 2);
    }

    // The factory still owns it.
    let kept = OneTimeCreate::<Kept>::get().unwrap();
    assert_eq!(kept.0, 5);
}

#[test]
fn test_empty_result_is_not_sticky() {
    struct Connection(&'static str);
    enable_one_time_create!(Connection as "db::Connection");

    let attempts = AtomicUsize::new(0);
    let connect = |ok: bool| {
        attempts.fetch_add(1, Ordering::SeqCst);
        ok.then(|| Arc::new(Connection("primary")))
    };

    assert!(OneTimeCreate::<Connection>::try_create(|| connect(false)).is_none());
    assert_eq!(
        OneTimeCreate::<Connection>::create_checked(|| connect(false))
            .err()
            .unwrap(),
        SingletonError::ConstructionFailure {
            name: "db::Connection"
        }
    );
    assert!(!OneTimeCreate::<Connection>::is_created());

    let connection = OneTimeCreate::<Connection>::try_create(|| connect(true)).unwrap();
    assert_eq!(connection.0, "primary");

    // Created: no further attempts are made.
    let again = OneTimeCreate::<Connection>::try_create(|| connect(false)).unwrap();
    assert!(Arc::ptr_eq(&connection, &again));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[test]
fn test_construction_failure_message() {
    struct Never;
    enable_one_time_create!(Never);

    let err = OneTimeCreate::<Never>::create_checked(|| None).err().unwrap();
    assert_eq!(err.to_string(), "OneTimeCreate of [Never] failed");
}

#[test]
fn test_trait_object_payload() {
    trait Backend: Send + Sync {
        fn label(&self) -> &str;
    }

    struct Memory;

    impl Backend for Memory {
        fn label(&self) -> &str {
            "memory"
        }
    }

    enable_one_time_create!(dyn Backend as "Backend");

    let backend = OneTimeCreate::<dyn Backend>::try_create(|| {
        let backend: Arc<dyn Backend> = Arc::new(Memory);
        Some(backend)
    })
    .unwrap();

    assert_eq!(backend.label(), "memory");
    assert!(OneTimeCreate::<dyn Backend>::is_created());
}

#[test]
fn test_concurrent_callers_share_one_instance() {
    const THREADS: usize = 16;

    struct Registry(usize);
    enable_one_time_create!(Registry);

    let calls = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let calls = calls.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                OneTimeCreate::<Registry>::create(|| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Registry(i)
                })
            })
        })
        .collect();

    let instances: Vec<Arc<Registry>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let winner = instances[0].0;
    assert!(instances.iter().all(|r| r.0 == winner));
    assert!(instances.iter().all(|r| Arc::ptr_eq(r, &instances[0])));
}
