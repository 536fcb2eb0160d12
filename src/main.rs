//! Catalog of the design pattern demonstrations in this package.
//!
//! Run with: cargo run

use colored::Colorize;

struct Demo {
    bin: &'static str,
    scenario: &'static str,
}

const CREATIONAL: &[Demo] = &[
    Demo { bin: "p01_abstract_factory", scenario: "car shop ordering from interchangeable factories" },
    Demo { bin: "p02_builder", scenario: "pizza assembled step by step under a director" },
    Demo { bin: "p03_factory_method", scenario: "vehicle factories deciding what to deliver" },
    Demo { bin: "p04_prototype", scenario: "cloning a configured prototype" },
    Demo { bin: "p05_singleton", scenario: "process-wide instance created on first access" },
];

const STRUCTURAL: &[Demo] = &[
    Demo { bin: "p06_adapter", scenario: "one socket interface over incompatible plugs" },
    Demo { bin: "p07_bridge", scenario: "devices and remotes varying independently" },
    Demo { bin: "p08_composite", scenario: "file tree summed and listed recursively" },
    Demo { bin: "p09_decorator", scenario: "coffee condiments stacking cost and description" },
    Demo { bin: "p10_facade", scenario: "one mortgage call hiding three subsystem checks" },
    Demo { bin: "p11_flyweight", scenario: "one shared glyph per distinct character" },
    Demo { bin: "p12_proxy", scenario: "security proxy guarding a lab door" },
];

const BEHAVIORAL: &[Demo] = &[
    Demo { bin: "p13_chain_of_responsibility", scenario: "support tickets routed down a handler chain" },
    Demo { bin: "p14_command", scenario: "remote control buttons bound to light commands" },
    Demo { bin: "p15_iterator", scenario: "walking a book collection without exposing storage" },
    Demo { bin: "p16_mediator", scenario: "chat room relaying messages between users" },
    Demo { bin: "p17_memento", scenario: "saving and restoring state snapshots" },
    Demo { bin: "p18_observer", scenario: "weather station pushing updates to displays" },
    Demo { bin: "p19_state", scenario: "light switch changing behavior with its state" },
    Demo { bin: "p20_strategy", scenario: "shopping cart swapping payment methods" },
    Demo { bin: "p21_template_method", scenario: "fixed game skeleton with sport-specific steps" },
    Demo { bin: "p22_visitor", scenario: "shipping cost calculated across components" },
];

const BASICS: &[Demo] = &[
    Demo { bin: "p23_delegation", scenario: "inheritance via composition and Deref" },
    Demo { bin: "p24_multi_trait", scenario: "one type implementing two independent traits" },
];

fn print_group(title: &str, demos: &[Demo]) {
    println!("\n{}", title.green().bold());
    for demo in demos {
        println!("  cargo run --bin {:<28}  {}", demo.bin, demo.scenario);
    }
}

fn main() {
    println!("{}", "Design pattern demonstrations".bold());

    print_group("Creational", CREATIONAL);
    print_group("Structural", STRUCTURAL);
    print_group("Behavioral", BEHAVIORAL);
    print_group("Language basics", BASICS);

    let total = CREATIONAL.len() + STRUCTURAL.len() + BEHAVIORAL.len() + BASICS.len();
    println!(
        "\n{total} demonstrations available. Run {} for the whole suite.",
        "cargo test".yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_twenty_four_demos() {
        let total = CREATIONAL.len() + STRUCTURAL.len() + BEHAVIORAL.len() + BASICS.len();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_bin_names_are_unique_and_ordered() {
        let names: Vec<&str> = [CREATIONAL, STRUCTURAL, BEHAVIORAL, BASICS]
            .iter()
            .flat_map(|group| group.iter().map(|demo| demo.bin))
            .collect();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();

        assert_eq!(sorted.len(), names.len());
        assert_eq!(sorted, names);
    }
}
