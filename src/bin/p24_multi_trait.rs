//! Basics 2: Multiple interface implementation
//! Example: One type implementing two independent traits
//!
//! Run with: cargo run --bin p24_multi_trait

// ============================================
// 1. Independent interfaces
// ============================================

trait FirstCheck {
    fn test1(&self) -> &'static str;
}

trait SecondCheck {
    fn test2(&self) -> &'static str;
}

// ============================================
// 2. One type, both interfaces
// ============================================

struct Widget;

impl FirstCheck for Widget {
    fn test1(&self) -> &'static str {
        "Test1"
    }
}

impl SecondCheck for Widget {
    fn test2(&self) -> &'static str {
        "Test2"
    }
}

// A caller can demand both capabilities at once
fn run_both(value: &(impl FirstCheck + SecondCheck)) -> Vec<&'static str> {
    vec![value.test1(), value.test2()]
}

fn main() {
    let widget = Widget;
    println!("{}", widget.test1());
    println!("{}", widget.test2());

    println!("\n--- Through a combined bound ---");
    for line in run_both(&widget) {
        println!("{line}");
    }
}
