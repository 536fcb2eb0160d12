//! Pattern 17: Memento
//! Example: Saving and restoring an originator's state snapshots
//!
//! Run with: cargo run --bin p17_memento

// ============================================
// 1. Memento
// ============================================

// An opaque snapshot; only the originator reads the state back
#[derive(Debug, Clone, PartialEq)]
struct Memento {
    state: String,
}

impl Memento {
    fn new(state: &str) -> Self {
        Memento {
            state: state.to_string(),
        }
    }

    fn state(&self) -> &str {
        &self.state
    }
}

// ============================================
// 2. Originator
// ============================================

struct Originator {
    state: String,
}

impl Originator {
    fn new(state: &str) -> Self {
        Originator {
            state: state.to_string(),
        }
    }

    fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn create_memento(&self) -> Memento {
        Memento::new(&self.state)
    }

    fn restore_from_memento(&mut self, memento: &Memento) {
        self.state = memento.state().to_string();
    }
}

// ============================================
// 3. Caretaker
// ============================================

struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    fn new() -> Self {
        Caretaker {
            mementos: Vec::new(),
        }
    }

    fn save_memento(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    // Out-of-range lookups miss instead of faulting
    fn memento(&self, index: usize) -> Option<&Memento> {
        self.mementos.get(index)
    }
}

fn main() {
    println!("=== Memento Demo ===\n");

    let mut originator = Originator::new("State1");
    println!("Initial State: {}", originator.state());

    let mut caretaker = Caretaker::new();
    caretaker.save_memento(originator.create_memento());

    originator.set_state("State2");
    println!("State after change: {}", originator.state());

    if let Some(memento) = caretaker.memento(0) {
        originator.restore_from_memento(memento);
    }
    println!("Restored State: {}", originator.state());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_mutate_restore_round_trip() {
        let mut originator = Originator::new("State1");
        let mut caretaker = Caretaker::new();

        caretaker.save_memento(originator.create_memento());
        originator.set_state("State2");
        assert_eq!(originator.state(), "State2");

        let memento = caretaker.memento(0).expect("snapshot saved above");
        originator.restore_from_memento(memento);
        assert_eq!(originator.state(), "State1");
    }

    #[test]
    fn test_restoring_never_mutates_sibling_snapshots() {
        let mut originator = Originator::new("first");
        let mut caretaker = Caretaker::new();

        caretaker.save_memento(originator.create_memento());
        originator.set_state("second");
        caretaker.save_memento(originator.create_memento());

        originator.set_state("third");
        let first = caretaker.memento(0).expect("first snapshot");
        originator.restore_from_memento(first);

        assert_eq!(caretaker.memento(0).map(Memento::state), Some("first"));
        assert_eq!(caretaker.memento(1).map(Memento::state), Some("second"));
    }

    #[test]
    fn test_out_of_range_lookup_misses() {
        let caretaker = Caretaker::new();
        assert_eq!(caretaker.memento(0), None);

        let mut caretaker = Caretaker::new();
        caretaker.save_memento(Memento::new("only"));
        assert_eq!(caretaker.memento(5), None);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_changes() {
        let mut originator = Originator::new("State1");
        let snapshot = originator.create_memento();

        originator.set_state("State2");
        assert_eq!(snapshot.state(), "State1");
    }
}
