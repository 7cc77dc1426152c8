//! Integration tests demonstrating how to enable types WITHOUT the macros.
//!
//! This shows the manual trait implementation, which is what the macros expand
//! to. It is useful when the slot static should live somewhere specific or the
//! name has to be computed from other constants.

use lifetime_singleton::{
    OneTimeCreate, OneTimeCreateTraits, OneTimeSlot, OverwritePolicy, Singleton, SingletonSlot,
    SingletonTraits,
};
use std::sync::{Arc, LazyLock};

// ============================================================================
// Manual trait records
// ============================================================================

const PREFIX: &str = "manual";

struct Service {
    endpoint: String,
}

/// The static storage for `Service`, declared at module level.
static SERVICE_SLOT: LazyLock<SingletonSlot<Service>> = LazyLock::new(SingletonSlot::new);

impl SingletonTraits for Service {
    const NAME: &'static str = "manual::Service";
    const CAN_BE_SET: OverwritePolicy = OverwritePolicy::WhenEmpty;

    fn slot() -> &'static SingletonSlot<Self> {
        &SERVICE_SLOT
    }
}

struct Catalog {
    entries: Vec<&'static str>,
}

static CATALOG_SLOT: OneTimeSlot<Catalog> = OneTimeSlot::new();

impl OneTimeCreateTraits for Catalog {
    const NAME: &'static str = PREFIX;

    fn slot() -> &'static OneTimeSlot<Self> {
        &CATALOG_SLOT
    }
}

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
fn test_manual_singleton_round_trip() {
    assert_eq!(
        Singleton::<Service>::get_instance()
            .err()
            .unwrap()
            .to_string(),
        "singleton for [manual::Service] is empty"
    );

    let service = Arc::new(Service {
        endpoint: "http://localhost:8080".to_string(),
    });
    Singleton::<Service>::set_instance(&service).unwrap();

    let current = Singleton::<Service>::get_instance().unwrap();
    assert_eq!(current.endpoint, "http://localhost:8080");

    let replacement = Arc::new(Service {
        endpoint: "http://localhost:9090".to_string(),
    });
    assert_eq!(
        Singleton::<Service>::set_instance(&replacement)
            .unwrap_err()
            .to_string(),
        "singleton for [manual::Service] can only be set when empty"
    );

    drop(current);
    drop(service);
    Singleton::<Service>::set_instance(&replacement).unwrap();
    assert_eq!(
        Singleton::<Service>::get_instance().unwrap().endpoint,
        "http://localhost:9090"
    );
}

#[test]
fn test_manual_one_time_create_with_const_slot() {
    let catalog = OneTimeCreate::<Catalog>::create(|| Catalog {
        entries: vec!["a", "b"],
    });
    let again = OneTimeCreate::<Catalog>::create(|| Catalog { entries: vec![] });

    assert_eq!(again.entries, vec!["a", "b"]);
    assert!(Arc::ptr_eq(&catalog, &again));
    assert_eq!(<Catalog as OneTimeCreateTraits>::NAME, "manual");
}
