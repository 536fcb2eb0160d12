//! Pattern 22: Visitor
//! Example: Shipping cost calculated across computer components
//!
//! Run with: cargo run --bin p22_visitor

// ============================================
// 1. Visitor interface
// ============================================

trait Visitor {
    fn visit_monitor(&mut self, monitor: &Monitor);
    fn visit_keyboard(&mut self, keyboard: &Keyboard);
}

// ============================================
// 2. Elements
// ============================================

trait ComputerComponent {
    fn accept(&self, visitor: &mut dyn Visitor);
}

struct Monitor;

impl ComputerComponent for Monitor {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_monitor(self);
    }
}

struct Keyboard;

impl ComputerComponent for Keyboard {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_keyboard(self);
    }
}

// ============================================
// 3. Concrete visitor
// ============================================

struct ShippingCostVisitor {
    total_cost: u32,
}

impl ShippingCostVisitor {
    fn new() -> Self {
        ShippingCostVisitor { total_cost: 0 }
    }

    fn total_cost(&self) -> u32 {
        self.total_cost
    }
}

impl Visitor for ShippingCostVisitor {
    fn visit_monitor(&mut self, _monitor: &Monitor) {
        self.total_cost += 10;
    }

    fn visit_keyboard(&mut self, _keyboard: &Keyboard) {
        self.total_cost += 5;
    }
}

fn main() {
    println!("=== Visitor Demo ===\n");

    let components: Vec<Box<dyn ComputerComponent>> = vec![Box::new(Monitor), Box::new(Keyboard)];

    let mut visitor = ShippingCostVisitor::new();
    for component in &components {
        component.accept(&mut visitor);
    }

    println!("Total shipping cost: ${}", visitor.total_cost());
    assert_eq!(visitor.total_cost(), 15);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_for(components: &[Box<dyn ComputerComponent>]) -> u32 {
        let mut visitor = ShippingCostVisitor::new();
        for component in components {
            component.accept(&mut visitor);
        }
        visitor.total_cost()
    }

    #[test]
    fn test_one_of_each_component() {
        let components: Vec<Box<dyn ComputerComponent>> =
            vec![Box::new(Monitor), Box::new(Keyboard)];
        assert_eq!(total_for(&components), 15);
    }

    #[test]
    fn test_cost_accumulates_per_component() {
        let components: Vec<Box<dyn ComputerComponent>> = vec![
            Box::new(Monitor),
            Box::new(Monitor),
            Box::new(Keyboard),
            Box::new(Keyboard),
            Box::new(Keyboard),
        ];
        assert_eq!(total_for(&components), 2 * 10 + 3 * 5);
    }

    #[test]
    fn test_no_components_costs_nothing() {
        assert_eq!(total_for(&[]), 0);
    }
}
