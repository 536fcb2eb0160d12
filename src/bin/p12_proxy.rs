//! Pattern 12: Proxy
//! Example: Security proxy guarding access to a lab door
//!
//! Run with: cargo run --bin p12_proxy

use rand::Rng;
use thiserror::Error;

// ============================================
// 1. Subject interface and real subject
// ============================================

#[derive(Debug, Error, PartialEq)]
enum SecurityError {
    #[error("Access denied. Cannot open the lab door.")]
    AccessDenied,
}

trait Door {
    fn open(&self) -> Result<String, SecurityError>;
    fn close(&self) -> String;
}

struct LabDoor;

impl Door for LabDoor {
    fn open(&self) -> Result<String, SecurityError> {
        Ok("Opening lab door".to_string())
    }

    fn close(&self) -> String {
        "Closing lab door".to_string()
    }
}

// ============================================
// 2. Access policy
// ============================================

trait AccessPolicy {
    fn authenticate(&self) -> bool;
}

// Simulated badge reader: flips a coin
struct CoinFlipPolicy;

impl AccessPolicy for CoinFlipPolicy {
    fn authenticate(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

// ============================================
// 3. Proxy
// ============================================

struct Security<P: AccessPolicy> {
    door: Box<dyn Door>,
    policy: P,
}

impl<P: AccessPolicy> Security<P> {
    fn new(door: Box<dyn Door>, policy: P) -> Self {
        Security { door, policy }
    }
}

impl<P: AccessPolicy> Door for Security<P> {
    fn open(&self) -> Result<String, SecurityError> {
        if self.policy.authenticate() {
            self.door.open()
        } else {
            Err(SecurityError::AccessDenied)
        }
    }

    // Closing needs no authorization
    fn close(&self) -> String {
        self.door.close()
    }
}

fn main() {
    println!("=== Proxy Demo ===\n");

    let secure_door = Security::new(Box::new(LabDoor), CoinFlipPolicy);

    for _ in 0..2 {
        match secure_door.open() {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{err}"),
        }
    }

    println!("{}", secure_door.close());
}
