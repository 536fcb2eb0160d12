//! Pattern 3: Factory Method
//! Example: Vehicle factories deciding which vehicle to deliver
//!
//! Run with: cargo run --bin p03_factory_method

// ============================================
// 1. Products
// ============================================

trait Vehicle {
    fn drive(&self) -> String;
}

struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a Car".to_string()
    }
}

struct Motorcycle;

impl Vehicle for Motorcycle {
    fn drive(&self) -> String {
        "Riding a Motorcycle".to_string()
    }
}

// ============================================
// 2. Creator
// ============================================

// deliver() is fixed; create_vehicle() is the factory method subclasses fill in
trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;

    fn deliver(&self) -> String {
        let vehicle = self.create_vehicle();
        vehicle.drive()
    }
}

struct CarFactory;

impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

struct MotorcycleFactory;

impl VehicleFactory for MotorcycleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Motorcycle)
    }
}

fn main() {
    println!("=== Factory Method Demo ===\n");

    let car_factory = CarFactory;
    println!("{}", car_factory.deliver());

    let motorcycle_factory = MotorcycleFactory;
    println!("{}", motorcycle_factory.deliver());
}
