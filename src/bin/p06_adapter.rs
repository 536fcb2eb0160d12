//! Pattern 6: Adapter
//! Example: One socket interface over incompatible wall plugs
//!
//! Run with: cargo run --bin p06_adapter

use std::any::Any;
use thiserror::Error;

// ============================================
// 1. Adaptees with incompatible interfaces
// ============================================

struct AmericanPlug;

impl AmericanPlug {
    fn insert_into_american_socket(&self) -> String {
        "Inserting into American socket.".to_string()
    }
}

struct EuropeanPlug;

impl EuropeanPlug {
    fn insert_into_european_socket(&self) -> String {
        "Inserting into European socket.".to_string()
    }
}

// ============================================
// 2. Target interface and adapter
// ============================================

#[derive(Debug, Error, PartialEq)]
enum AdapterError {
    #[error("Plug type not supported.")]
    UnsupportedPlug,
}

trait Socket {
    fn insert_into_socket(&self) -> Result<String, AdapterError>;
}

// Wraps any plug object and recovers the concrete type at runtime
struct ElectricSocketAdapter {
    plug: Box<dyn Any>,
}

impl ElectricSocketAdapter {
    fn new(plug: Box<dyn Any>) -> Self {
        ElectricSocketAdapter { plug }
    }
}

impl Socket for ElectricSocketAdapter {
    fn insert_into_socket(&self) -> Result<String, AdapterError> {
        if let Some(plug) = self.plug.downcast_ref::<AmericanPlug>() {
            Ok(plug.insert_into_american_socket())
        } else if let Some(plug) = self.plug.downcast_ref::<EuropeanPlug>() {
            Ok(plug.insert_into_european_socket())
        } else {
            Err(AdapterError::UnsupportedPlug)
        }
    }
}

fn report(socket: &dyn Socket) -> String {
    match socket.insert_into_socket() {
        Ok(line) => line,
        Err(err) => err.to_string(),
    }
}

fn main() {
    println!("=== Adapter Demo ===\n");

    let adapter = ElectricSocketAdapter::new(Box::new(AmericanPlug));
    println!("{}", report(&adapter));

    let adapter = ElectricSocketAdapter::new(Box::new(EuropeanPlug));
    println!("{}", report(&adapter));

    // Something that is not a plug at all
    let adapter = ElectricSocketAdapter::new(Box::new("usb cable"));
    println!("{}", report(&adapter));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapts_american_plug() {
        let adapter = ElectricSocketAdapter::new(Box::new(AmericanPlug));
        assert_eq!(
            adapter.insert_into_socket(),
            Ok("Inserting into American socket.".to_string())
        );
    }

    #[test]
    fn test_adapts_european_plug() {
        let adapter = ElectricSocketAdapter::new(Box::new(EuropeanPlug));
        assert_eq!(
            adapter.insert_into_socket(),
            Ok("Inserting into European socket.".to_string())
        );
    }

    #[test]
    fn test_unknown_plug_falls_back_to_unsupported() {
        let adapter = ElectricSocketAdapter::new(Box::new(42_u32));
        assert_eq!(
            adapter.insert_into_socket(),
            Err(AdapterError::UnsupportedPlug)
        );
    }

    #[test]
    fn test_unsupported_message_wording() {
        assert_eq!(
            AdapterError::UnsupportedPlug.to_string(),
            "Plug type not supported."
        );
    }
}
