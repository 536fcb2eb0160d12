//! Pattern 2: Builder
//! Example: Assembling a pizza step by step under a director
//!
//! Run with: cargo run --bin p02_builder

use itertools::Itertools;

// ============================================
// 1. Product
// ============================================

#[derive(Debug, Default, Clone, PartialEq)]
struct Pizza {
    dough: String,
    sauce: String,
    toppings: Vec<String>,
}

impl Pizza {
    fn set_dough(&mut self, dough: &str) {
        self.dough = dough.to_string();
    }

    fn set_sauce(&mut self, sauce: &str) {
        self.sauce = sauce.to_string();
    }

    fn add_topping(&mut self, topping: &str) {
        self.toppings.push(topping.to_string());
    }

    fn details(&self) -> String {
        let toppings = self.toppings.iter().join(", ");
        format!(
            "Pizza with {} dough, {} sauce, and toppings: {}.",
            self.dough, self.sauce, toppings
        )
    }
}

// ============================================
// 2. Builder
// ============================================

trait PizzaBuilder {
    fn build_dough(&mut self);
    fn build_sauce(&mut self);
    fn build_toppings(&mut self);
    fn pizza(&mut self) -> Pizza;
}

struct HawaiianPizzaBuilder {
    pizza: Pizza,
}

impl HawaiianPizzaBuilder {
    fn new() -> Self {
        HawaiianPizzaBuilder {
            pizza: Pizza::default(),
        }
    }
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.set_dough("pan");
    }

    fn build_sauce(&mut self) {
        self.pizza.set_sauce("tomato");
    }

    fn build_toppings(&mut self) {
        self.pizza.add_topping("ham");
        self.pizza.add_topping("pineapple");
    }

    fn pizza(&mut self) -> Pizza {
        std::mem::take(&mut self.pizza)
    }
}

// ============================================
// 3. Director
// ============================================

// Knows the build order, not the concrete builder
struct PizzaDirector;

impl PizzaDirector {
    fn build_pizza(builder: &mut dyn PizzaBuilder) -> Pizza {
        builder.build_dough();
        builder.build_sauce();
        builder.build_toppings();
        builder.pizza()
    }
}

fn main() {
    println!("=== Builder Demo ===\n");

    let mut builder = HawaiianPizzaBuilder::new();
    let pizza = PizzaDirector::build_pizza(&mut builder);

    println!("{}", pizza.details());
    assert_eq!(
        pizza.details(),
        "Pizza with pan dough, tomato sauce, and toppings: ham, pineapple."
    );
}
