//! Pattern 21: Template Method
//! Example: A fixed game-play skeleton with sport-specific steps
//!
//! Run with: cargo run --bin p21_template_method

// ============================================
// 1. Template
// ============================================

trait Game {
    fn initialize(&self) -> String;
    fn start_play(&self) -> String;
    fn end_play(&self) -> String;

    // The skeleton: step order is fixed here, not in the implementations
    fn play(&self) -> Vec<String> {
        vec![self.initialize(), self.start_play(), self.end_play()]
    }
}

// ============================================
// 2. Concrete games
// ============================================

struct Cricket;

impl Game for Cricket {
    fn initialize(&self) -> String {
        "Cricket Game Initialized! Start playing.".to_string()
    }

    fn start_play(&self) -> String {
        "Cricket Game Started. Enjoy the game!".to_string()
    }

    fn end_play(&self) -> String {
        "Cricket Game Finished!".to_string()
    }
}

struct Football;

impl Game for Football {
    fn initialize(&self) -> String {
        "Football Game Initialized! Start playing.".to_string()
    }

    fn start_play(&self) -> String {
        "Football Game Started. Enjoy the game!".to_string()
    }

    fn end_play(&self) -> String {
        "Football Game Finished!".to_string()
    }
}

fn main() {
    println!("=== Template Method Demo ===\n");

    let cricket = Cricket;
    for line in cricket.play() {
        println!("{line}");
    }

    println!();

    let football = Football;
    for line in football.play() {
        println!("{line}");
    }
}
