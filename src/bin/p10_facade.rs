//! Pattern 10: Facade
//! Example: One mortgage call hiding three subsystem checks
//!
//! Run with: cargo run --bin p10_facade

// ============================================
// 1. Subsystems
// ============================================

struct Bank {
    available_funds: u64,
}

impl Bank {
    fn new() -> Self {
        Bank {
            available_funds: 500_000,
        }
    }

    fn has_sufficient_savings(&self, amount: u64) -> bool {
        amount <= self.available_funds
    }
}

struct Credit;

impl Credit {
    fn has_good_credit(&self, customer: &str) -> bool {
        !customer.is_empty()
    }
}

struct BackgroundCheck;

impl BackgroundCheck {
    fn has_no_criminal_record(&self, _customer: &str) -> bool {
        true
    }
}

// ============================================
// 2. Facade
// ============================================

struct MortgageApplication {
    bank: Bank,
    credit: Credit,
    background_check: BackgroundCheck,
}

impl MortgageApplication {
    fn new() -> Self {
        MortgageApplication {
            bank: Bank::new(),
            credit: Credit,
            background_check: BackgroundCheck,
        }
    }

    // Every subsystem is consulted; any one of them can veto
    fn is_eligible(&self, customer: &str, amount: u64) -> bool {
        let mut eligible = true;

        if !self.bank.has_sufficient_savings(amount) {
            eligible = false;
        }

        if !self.credit.has_good_credit(customer) {
            eligible = false;
        }

        if !self.background_check.has_no_criminal_record(customer) {
            eligible = false;
        }

        eligible
    }

    fn eligibility_report(&self, customer: &str, amount: u64) -> String {
        if self.is_eligible(customer, amount) {
            format!("{customer} is eligible for a mortgage of {amount}.")
        } else {
            format!("{customer} is not eligible for a mortgage of {amount}.")
        }
    }
}

fn main() {
    println!("=== Facade Demo ===\n");

    let mortgage = MortgageApplication::new();
    let customer = "John Doe";
    let loan_amount = 200_000;

    println!("{}", mortgage.eligibility_report(customer, loan_amount));
}
