//! Basic usage example for lifetime-singleton.
//!
//! Demonstrates:
//! - Enabling types with `enable_singleton!`
//! - Setting and retrieving instances
//! - The three overwrite policies and their error messages
//!
//! Run with: `cargo run --example basic_usage`

use lifetime_singleton::{enable_singleton, OverwritePolicy, Singleton};
use std::sync::Arc;

#[derive(Debug)]
struct AppConfig {
    name: String,
    version: u32,
}

#[derive(Debug)]
struct Database {
    url: String,
}

#[derive(Debug)]
struct FeatureFlags {
    dark_mode: bool,
}

enable_singleton!(AppConfig as "app::AppConfig", OverwritePolicy::Once);
enable_singleton!(Database, OverwritePolicy::WhenEmpty);
enable_singleton!(FeatureFlags, OverwritePolicy::Repeatedly);

fn main() {
    println!("=== lifetime-singleton: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Empty slots
    // -------------------------------------------------------------------------
    println!("1. Reading before anything was set...");

    match Singleton::<AppConfig>::get_instance() {
        Ok(config) => println!("   Found AppConfig: {:?}", config),
        Err(e) => println!("   Error (expected): {}", e),
    }

    // -------------------------------------------------------------------------
    // 2. Once
    // -------------------------------------------------------------------------
    println!("\n2. OverwritePolicy::Once...");

    let config = Arc::new(AppConfig {
        name: "MyApp".to_string(),
        version: 1,
    });
    Singleton::<AppConfig>::set_instance(&config).unwrap();

    let current = Singleton::<AppConfig>::get_instance().unwrap();
    println!("   Current: {} v{}", current.name, current.version);

    let other = Arc::new(AppConfig {
        name: "Other".to_string(),
        version: 2,
    });
    if let Err(e) = Singleton::<AppConfig>::set_instance(&other) {
        println!("   Error (expected): {}", e);
    }

    // -------------------------------------------------------------------------
    // 3. WhenEmpty
    // -------------------------------------------------------------------------
    println!("\n3. OverwritePolicy::WhenEmpty...");

    let primary = Arc::new(Database {
        url: "postgres://primary".to_string(),
    });
    Singleton::<Database>::set_instance(&primary).unwrap();

    let replica = Arc::new(Database {
        url: "postgres://replica".to_string(),
    });
    if let Err(e) = Singleton::<Database>::set_instance(&replica) {
        println!("   Error (expected): {}", e);
    }

    drop(primary);
    Singleton::<Database>::set_instance(&replica).unwrap();
    println!(
        "   After dropping the primary: {}",
        Singleton::<Database>::get_instance().unwrap().url
    );

    // -------------------------------------------------------------------------
    // 4. Repeatedly
    // -------------------------------------------------------------------------
    println!("\n4. OverwritePolicy::Repeatedly...");

    let light = Arc::new(FeatureFlags { dark_mode: false });
    Singleton::<FeatureFlags>::set_instance(&light).unwrap();
    let held = Singleton::<FeatureFlags>::get_instance().unwrap();

    let dark = Arc::new(FeatureFlags { dark_mode: true });
    Singleton::<FeatureFlags>::set_instance(&dark).unwrap();

    println!("   Held reference dark_mode:  {}", held.dark_mode);
    println!(
        "   Fresh lookup dark_mode:    {}",
        Singleton::<FeatureFlags>::get_instance().unwrap().dark_mode
    );

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("contains::<AppConfig>()    = {}", Singleton::<AppConfig>::contains());
    println!("contains::<Database>()     = {}", Singleton::<Database>::contains());
    println!("contains::<FeatureFlags>() = {}", Singleton::<FeatureFlags>::contains());
}
