//! Basics 1: Inheritance via composition
//! Example: A derived type reusing a base type through Deref delegation
//!
//! Run with: cargo run --bin p23_delegation

use std::ops::Deref;

// ============================================
// 1. Base type
// ============================================

struct Base {
    x: u32,
}

impl Base {
    fn new() -> Self {
        println!("This is parent constructor");
        Base { x: 1 }
    }

    // Construction without the announcement, for embedding
    fn quiet() -> Self {
        Base { x: 1 }
    }

    fn fun1(&self) -> &'static str {
        "Hello fun1"
    }
}

// ============================================
// 2. Derived type
// ============================================

// The derived constructor replaces the base one; it only runs the
// base construction when explicitly chained.
struct Derived {
    base: Base,
}

impl Derived {
    fn new() -> Self {
        println!("This is child constructor");
        Derived { base: Base::quiet() }
    }

    fn chained() -> Self {
        let base = Base::new();
        println!("This is child constructor");
        Derived { base }
    }
}

// Deref makes every Base method callable on Derived
impl Deref for Derived {
    type Target = Base;

    fn deref(&self) -> &Base {
        &self.base
    }
}

fn main() {
    let obj = Derived::new();
    println!("{}", obj.fun1());

    println!("\n--- With the parent constructor chained ---");
    let obj = Derived::chained();
    println!("{}", obj.fun1());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_methods_are_reachable_on_the_derived_type() {
        let derived = Derived::new();
        assert_eq!(derived.fun1(), "Hello fun1");
    }

    #[test]
    fn test_base_fields_are_reachable_through_deref() {
        let derived = Derived::new();
        assert_eq!(derived.x, 1);
    }

    #[test]
    fn test_chained_construction_builds_the_same_state() {
        let derived = Derived::chained();
        assert_eq!(derived.x, 1);
        assert_eq!(derived.fun1(), "Hello fun1");
    }
}
