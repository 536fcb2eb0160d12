//! Pattern 20: Strategy
//! Example: Shopping cart swapping payment methods at checkout
//!
//! Run with: cargo run --bin p20_strategy

// ============================================
// 1. Strategy interface
// ============================================

trait PaymentMethod {
    fn pay(&self, amount: u32) -> String;
}

struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paying {amount} using Credit Card.")
    }
}

struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paying {amount} using PayPal.")
    }
}

struct WalletPayment;

impl PaymentMethod for WalletPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paying {amount} using Wallet.")
    }
}

// ============================================
// 2. Context
// ============================================

struct ShoppingCart {
    payment_method: Option<Box<dyn PaymentMethod>>,
}

impl ShoppingCart {
    fn new() -> Self {
        ShoppingCart {
            payment_method: None,
        }
    }

    fn set_payment_method(&mut self, payment_method: Box<dyn PaymentMethod>) {
        self.payment_method = Some(payment_method);
    }

    // None until a payment method has been chosen
    fn checkout(&self, amount: u32) -> Option<String> {
        self.payment_method.as_ref().map(|method| method.pay(amount))
    }
}

fn main() {
    println!("=== Strategy Demo ===\n");

    let mut cart = ShoppingCart::new();

    // Customer selects Credit Card payment
    cart.set_payment_method(Box::new(CreditCardPayment));
    if let Some(line) = cart.checkout(100) {
        println!("{line}");
    }

    // Customer switches to PayPal payment
    cart.set_payment_method(Box::new(PayPalPayment));
    if let Some(line) = cart.checkout(50) {
        println!("{line}");
    }

    // Customer switches to Wallet payment
    cart.set_payment_method(Box::new(WalletPayment));
    if let Some(line) = cart.checkout(75) {
        println!("{line}");
    }
}
