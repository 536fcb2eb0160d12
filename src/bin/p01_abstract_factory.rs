//! Pattern 1: Abstract Factory
//! Example: Car shop ordering from interchangeable car factories
//!
//! Run with: cargo run --bin p01_abstract_factory

// ============================================
// 1. Products
// ============================================

trait Car {
    fn make(&self) -> &str;
}

struct EconomyCar;

impl Car for EconomyCar {
    fn make(&self) -> &str {
        "Economy Car"
    }
}

struct LuxuryCar;

impl Car for LuxuryCar {
    fn make(&self) -> &str {
        "Luxury Car"
    }
}

// ============================================
// 2. Factories
// ============================================

// Each factory produces one family of cars
trait CarFactory {
    fn create_car(&self) -> Box<dyn Car>;
}

struct EconomyCarFactory;

impl CarFactory for EconomyCarFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(EconomyCar)
    }
}

struct LuxuryCarFactory;

impl CarFactory for LuxuryCarFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(LuxuryCar)
    }
}

// ============================================
// 3. Client
// ============================================

// The shop only ever talks to the factory interface
struct CarShop {
    factory: Box<dyn CarFactory>,
}

impl CarShop {
    fn new(factory: Box<dyn CarFactory>) -> Self {
        CarShop { factory }
    }

    fn order_car(&self) -> String {
        let car = self.factory.create_car();
        format!("Here's your {}!", car.make())
    }
}

fn main() {
    println!("=== Abstract Factory Demo ===\n");

    let economy_shop = CarShop::new(Box::new(EconomyCarFactory));
    println!("{}", economy_shop.order_car());

    let luxury_shop = CarShop::new(Box::new(LuxuryCarFactory));
    println!("{}", luxury_shop.order_car());
}
