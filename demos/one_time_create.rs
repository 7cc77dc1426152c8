//! One-time create example for lifetime-singleton.
//!
//! Demonstrates:
//! - Building an instance at most once
//! - Ignored constructors on later calls
//! - Retrying after a constructor that produced nothing
//!
//! Run with: `cargo run --example one_time_create`

use lifetime_singleton::{enable_one_time_create, OneTimeCreate};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct ConnectionPool {
    size: usize,
}

#[derive(Debug)]
struct License {
    key: String,
}

enable_one_time_create!(ConnectionPool);
enable_one_time_create!(License as "app::License");

fn load_license(attempt: u32) -> Option<Arc<License>> {
    // Pretend the license server answers on the second attempt.
    (attempt >= 2).then(|| {
        Arc::new(License {
            key: "ABCD-1234".to_string(),
        })
    })
}

fn main() {
    println!("=== lifetime-singleton: One-Time Create ===\n");

    // -------------------------------------------------------------------------
    // 1. Racing threads share one pool
    // -------------------------------------------------------------------------
    println!("1. Creating the pool from several threads...");

    let handles: Vec<_> = (1..=4)
        .map(|size| {
            thread::spawn(move || OneTimeCreate::<ConnectionPool>::create(|| ConnectionPool { size }))
        })
        .collect();

    for handle in handles {
        let pool = handle.join().unwrap();
        println!("   Thread got pool of size {}", pool.size);
    }

    // -------------------------------------------------------------------------
    // 2. Retrying a failed construction
    // -------------------------------------------------------------------------
    println!("\n2. Loading the license...");

    for attempt in 1..=3 {
        match OneTimeCreate::<License>::create_checked(|| load_license(attempt)) {
            Ok(license) => println!("   Attempt {}: license {}", attempt, license.key),
            Err(e) => println!("   Attempt {}: {}", attempt, e),
        }
    }

    println!("\n=== Example Complete ===");
    println!("Pool created: {}", OneTimeCreate::<ConnectionPool>::is_created());
    println!("License created: {}", OneTimeCreate::<License>::is_created());
}
