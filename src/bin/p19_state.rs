//! Pattern 19: State
//! Example: Light switch changing behavior with its state
//!
//! Run with: cargo run --bin p19_state

// ============================================
// 1. States and transitions
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LightState {
    On,
    Off,
}

impl LightState {
    // Transitions consume the state and return the next one with its message
    fn turn_on(self) -> (LightState, &'static str) {
        match self {
            LightState::Off => (LightState::On, "Turning light on."),
            LightState::On => (LightState::On, "The light is already on."),
        }
    }

    fn turn_off(self) -> (LightState, &'static str) {
        match self {
            LightState::On => (LightState::Off, "Turning light off."),
            LightState::Off => (LightState::Off, "The light is already off."),
        }
    }
}

// ============================================
// 2. Context
// ============================================

struct LightSwitch {
    state: LightState,
}

impl LightSwitch {
    fn new() -> Self {
        LightSwitch {
            state: LightState::Off,
        }
    }

    fn state(&self) -> LightState {
        self.state
    }

    fn turn_on(&mut self) -> &'static str {
        let (state, message) = self.state.turn_on();
        self.state = state;
        message
    }

    fn turn_off(&mut self) -> &'static str {
        let (state, message) = self.state.turn_off();
        self.state = state;
        message
    }
}

fn main() {
    println!("=== State Demo ===\n");

    let mut switch = LightSwitch::new();

    println!("{}", switch.turn_on());
    println!("{}", switch.turn_off());
    println!("{}", switch.turn_off());
    println!("{}", switch.turn_on());
    println!("{}", switch.turn_on());
}
