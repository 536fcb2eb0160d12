//! Pattern 4: Prototype
//! Example: Cloning a configured prototype instead of rebuilding it
//!
//! Run with: cargo run --bin p04_prototype

// ============================================
// 1. Prototype
// ============================================

// Clone is Rust's prototype seam: every clone is a deep, independent copy
#[derive(Debug, Clone, PartialEq)]
struct ConcretePrototype {
    property: String,
}

impl ConcretePrototype {
    fn new(property: &str) -> Self {
        ConcretePrototype {
            property: property.to_string(),
        }
    }

    fn property(&self) -> &str {
        &self.property
    }

    fn set_property(&mut self, property: &str) {
        self.property = property.to_string();
    }
}

fn main() {
    println!("=== Prototype Demo ===\n");

    let prototype = ConcretePrototype::new("Initial Property");

    // Clone the prototype twice
    let mut clone1 = prototype.clone();
    let mut clone2 = prototype.clone();

    // Modify the clones
    clone1.set_property("Modified Property 1");
    clone2.set_property("Modified Property 2");

    println!("Original Property: {}", prototype.property());
    println!("Clone 1 Property: {}", clone1.property());
    println!("Clone 2 Property: {}", clone2.property());
}
