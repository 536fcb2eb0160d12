//! Pattern 5: Singleton
//! Example: Process-wide instance created lazily on first access
//!
//! Run with: cargo run --bin p05_singleton

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================
// 1. The single instance
// ============================================

// How many times the constructor actually ran
static CREATED: AtomicUsize = AtomicUsize::new(0);

pub struct Singleton {
    calls: AtomicUsize,
}

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::new();
}

impl Singleton {
    // Private: the only way in is through instance()
    fn new() -> Self {
        CREATED.fetch_add(1, Ordering::SeqCst);
        println!("Singleton instance created.");
        Singleton {
            calls: AtomicUsize::new(0),
        }
    }

    // Initialization happens exactly once, even under concurrent first use
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    pub fn do_something(&self) -> &'static str {
        self.calls.fetch_add(1, Ordering::SeqCst);
        "Doing something."
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn times_created() -> usize {
        CREATED.load(Ordering::SeqCst)
    }
}

fn main() {
    println!("=== Singleton Demo ===\n");

    // First access creates the instance
    let instance1 = Singleton::instance();
    println!("{}", instance1.do_something());

    // Second access returns the existing one, no new construction
    let instance2 = Singleton::instance();
    assert!(std::ptr::eq(instance1, instance2));
    println!("{}", instance2.do_something());

    println!(
        "\nInstances created: {}, calls handled: {}",
        Singleton::times_created(),
        instance2.calls()
    );
}
