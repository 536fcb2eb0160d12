//! Pattern 9: Decorator
//! Example: Coffee condiments stacking cost and description
//!
//! Run with: cargo run --bin p09_decorator

// ============================================
// 1. Component
// ============================================

trait Coffee {
    // Whole dollars
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

// ============================================
// 2. Decorators
// ============================================

struct Milk {
    inner: Box<dyn Coffee>,
}

impl Milk {
    fn new(inner: Box<dyn Coffee>) -> Self {
        Milk { inner }
    }
}

impl Coffee for Milk {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }
}

struct Whip {
    inner: Box<dyn Coffee>,
}

impl Whip {
    fn new(inner: Box<dyn Coffee>) -> Self {
        Whip { inner }
    }
}

impl Coffee for Whip {
    fn cost(&self) -> u32 {
        self.inner.cost() + 3
    }

    fn description(&self) -> String {
        format!("{}, Whip", self.inner.description())
    }
}

fn print_order(coffee: &dyn Coffee) {
    println!("Cost: ${}", coffee.cost());
    println!("Description: {}", coffee.description());
}

fn main() {
    println!("=== Decorator Demo ===\n");

    let simple = SimpleCoffee;
    print_order(&simple);

    let milk_coffee = Milk::new(Box::new(SimpleCoffee));
    print_order(&milk_coffee);

    let whip_coffee = Whip::new(Box::new(SimpleCoffee));
    print_order(&whip_coffee);

    // Layers compose in wrap order
    let milk_and_whip = Milk::new(Box::new(Whip::new(Box::new(SimpleCoffee))));
    print_order(&milk_and_whip);
    assert_eq!(milk_and_whip.cost(), 10);
}
