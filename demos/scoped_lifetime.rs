//! Scoped lifetime example for lifetime-singleton.
//!
//! Demonstrates:
//! - The registry never keeps an instance alive
//! - A singleton empties itself when its last owner goes away
//! - Readers on other threads keep their own strong references
//!
//! Run with: `cargo run --example scoped_lifetime`

use lifetime_singleton::{enable_singleton, set_trace_callback, OverwritePolicy, Singleton};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A request context that should only be globally visible while a request runs.
#[derive(Debug)]
struct RequestContext {
    request_id: u64,
}

impl Drop for RequestContext {
    fn drop(&mut self) {
        println!("   [Drop] RequestContext {} released", self.request_id);
    }
}

enable_singleton!(RequestContext, OverwritePolicy::WhenEmpty);

fn handle_request(request_id: u64) {
    let context = Arc::new(RequestContext { request_id });
    Singleton::<RequestContext>::set_instance(&context).unwrap();

    // Deep inside the call stack, anyone can find the current context.
    let current = Singleton::<RequestContext>::get_instance().unwrap();
    println!("   Handling request {}", current.request_id);

    // Hand a reference to a background worker; it outlives this function.
    let worker = {
        let context = Singleton::<RequestContext>::get_instance().unwrap();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            println!("   [Worker] still using request {}", context.request_id);
        })
    };

    drop(current);
    drop(context);

    // The worker holds the last owner, so the slot is still occupied.
    println!(
        "   Slot occupied while the worker runs: {}",
        Singleton::<RequestContext>::contains()
    );

    worker.join().unwrap();
}

fn main() {
    println!("=== lifetime-singleton: Scoped Lifetime ===\n");

    set_trace_callback(|event| println!("   [Trace] {}", event));

    for request_id in 1..=2 {
        println!("Request {}:", request_id);
        handle_request(request_id);
        println!(
            "   Slot occupied after the request: {}\n",
            Singleton::<RequestContext>::contains()
        );
    }

    match Singleton::<RequestContext>::get_instance() {
        Ok(context) => println!("Unexpected context: {:?}", context),
        Err(e) => println!("Between requests: {}", e),
    }

    println!("\n=== Example Complete ===");
}
