//! Pattern 13: Chain of Responsibility
//! Example: Support tickets routed down a handler chain
//!
//! Run with: cargo run --bin p13_chain_of_responsibility

// ============================================
// 1. Handler interface
// ============================================

trait SupportHandler {
    // None means the request fell off the end of the chain
    fn handle_request(&self, request: &str) -> Option<String>;
}

// ============================================
// 2. Concrete handlers
// ============================================

struct TechnicalSupportHandler {
    next: Option<Box<dyn SupportHandler>>,
}

impl TechnicalSupportHandler {
    fn new(next: Option<Box<dyn SupportHandler>>) -> Self {
        TechnicalSupportHandler { next }
    }
}

impl SupportHandler for TechnicalSupportHandler {
    fn handle_request(&self, request: &str) -> Option<String> {
        if request == "technical" {
            Some("Technical support is handling the request.".to_string())
        } else {
            self.next.as_ref().and_then(|h| h.handle_request(request))
        }
    }
}

struct SalesSupportHandler {
    next: Option<Box<dyn SupportHandler>>,
}

impl SalesSupportHandler {
    fn new(next: Option<Box<dyn SupportHandler>>) -> Self {
        SalesSupportHandler { next }
    }
}

impl SupportHandler for SalesSupportHandler {
    fn handle_request(&self, request: &str) -> Option<String> {
        if request == "sales" {
            Some("Sales support is handling the request.".to_string())
        } else {
            self.next.as_ref().and_then(|h| h.handle_request(request))
        }
    }
}

// Terminal handler: accepts everything that reaches it
struct GeneralSupportHandler;

impl SupportHandler for GeneralSupportHandler {
    fn handle_request(&self, _request: &str) -> Option<String> {
        Some("General support is handling the request.".to_string())
    }
}

fn main() {
    println!("=== Chain of Responsibility Demo ===\n");

    // technical -> sales -> general
    let chain = TechnicalSupportHandler::new(Some(Box::new(SalesSupportHandler::new(Some(
        Box::new(GeneralSupportHandler),
    )))));

    for request in ["technical", "sales", "billing"] {
        if let Some(response) = chain.handle_request(request) {
            println!("{response}");
        }
    }
}
