//! Coin reporting via double dispatch.
//!
//! [`CoinVisitor`] declares one handler per concrete variant, each with an
//! empty default body, so a visitor only overrides the variants it cares
//! about. Traversal is caller-driven: for each coin, call
//! [`Coin::accept`](crate::domain::coin::Coin::accept) with the visitor.

use crate::domain::coin::Coin;

pub trait CoinVisitor {
    /// Summary of everything this visitor accumulated.
    fn report(&self) -> String;

    fn visit_null(&mut self, _coin: &Coin) {}

    fn visit_dollar(&mut self, _coin: &Coin) {}
    fn visit_half_dollar(&mut self, _coin: &Coin) {}
    fn visit_quarter(&mut self, _coin: &Coin) {}
    fn visit_dime(&mut self, _coin: &Coin) {}
    fn visit_nickel(&mut self, _coin: &Coin) {}
    fn visit_penny(&mut self, _coin: &Coin) {}

    fn visit_five_pound(&mut self, _coin: &Coin) {}
    fn visit_two_pound(&mut self, _coin: &Coin) {}
    fn visit_pound(&mut self, _coin: &Coin) {}
    fn visit_fifty_pence(&mut self, _coin: &Coin) {}
    fn visit_twenty_pence(&mut self, _coin: &Coin) {}
    fn visit_ten_pence(&mut self, _coin: &Coin) {}
    fn visit_five_pence(&mut self, _coin: &Coin) {}
    fn visit_two_pence(&mut self, _coin: &Coin) {}
    fn visit_pence(&mut self, _coin: &Coin) {}

    fn visit_toonie(&mut self, _coin: &Coin) {}
    fn visit_loonie(&mut self, _coin: &Coin) {}
    fn visit_fifty_cent(&mut self, _coin: &Coin) {}
    fn visit_cad_quarter(&mut self, _coin: &Coin) {}
    fn visit_cad_dime(&mut self, _coin: &Coin) {}
    fn visit_cad_nickel(&mut self, _coin: &Coin) {}

    fn visit_two_euro(&mut self, _coin: &Coin) {}
    fn visit_euro(&mut self, _coin: &Coin) {}
    fn visit_fifty_euro_cent(&mut self, _coin: &Coin) {}
    fn visit_twenty_euro_cent(&mut self, _coin: &Coin) {}
    fn visit_ten_euro_cent(&mut self, _coin: &Coin) {}
    fn visit_five_euro_cent(&mut self, _coin: &Coin) {}
    fn visit_two_euro_cent(&mut self, _coin: &Coin) {}
    fn visit_euro_cent(&mut self, _coin: &Coin) {}
}

/// Counts sentinel ("no coin produced") occurrences.
#[derive(Debug, Default)]
pub struct NullCounter {
    count: usize,
}

impl NullCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl CoinVisitor for NullCounter {
    fn visit_null(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn report(&self) -> String {
        format!("null coins: {}", self.count)
    }
}

/// Counts coins of the six USD variants.
#[derive(Debug, Default)]
pub struct UsdCounter {
    count: usize,
}

impl UsdCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl CoinVisitor for UsdCounter {
    fn visit_dollar(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn visit_half_dollar(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn visit_quarter(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn visit_dime(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn visit_nickel(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn visit_penny(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn report(&self) -> String {
        format!("USD coins: {}", self.count)
    }
}
