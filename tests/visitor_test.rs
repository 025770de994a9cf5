mod common;

use coinmint::domain::coin::{CadCoin, Coin, UsdCoin, Variant};
use coinmint::domain::currency::Currency;
use coinmint::domain::visitor::{CoinVisitor, NullCounter, UsdCounter};
use coinmint::interfaces::purse::CoinPurse;

/// Overrides every handler and records which one fired, so dispatch
/// exactness can be checked for the whole variant set in one pass.
#[derive(Default)]
struct TraceVisitor {
    seen: Vec<&'static str>,
}

macro_rules! trace_handlers {
    ($($method:ident => $label:literal),+ $(,)?) => {
        $(fn $method(&mut self, _coin: &Coin) {
            self.seen.push($label);
        })+
    };
}

impl CoinVisitor for TraceVisitor {
    fn report(&self) -> String {
        self.seen.join(",")
    }

    trace_handlers! {
        visit_null => "Null",
        visit_dollar => "Dollar",
        visit_half_dollar => "HalfDollar",
        visit_quarter => "Quarter",
        visit_dime => "Dime",
        visit_nickel => "Nickel",
        visit_penny => "Penny",
        visit_five_pound => "FivePound",
        visit_two_pound => "TwoPound",
        visit_pound => "Pound",
        visit_fifty_pence => "FiftyPence",
        visit_twenty_pence => "TwentyPence",
        visit_ten_pence => "TenPence",
        visit_five_pence => "FivePence",
        visit_two_pence => "TwoPence",
        visit_pence => "Pence",
        visit_toonie => "Toonie",
        visit_loonie => "Loonie",
        visit_fifty_cent => "FiftyCent",
        visit_cad_quarter => "CadQuarter",
        visit_cad_dime => "CadDime",
        visit_cad_nickel => "CadNickel",
        visit_two_euro => "TwoEuro",
        visit_euro => "Euro",
        visit_fifty_euro_cent => "FiftyEuroCent",
        visit_twenty_euro_cent => "TwentyEuroCent",
        visit_ten_euro_cent => "TenEuroCent",
        visit_five_euro_cent => "FiveEuroCent",
        visit_two_euro_cent => "TwoEuroCent",
        visit_euro_cent => "EuroCent",
    }
}

/// Counts exactly one variant: USD quarters.
#[derive(Default)]
struct QuarterCounter {
    count: usize,
}

impl CoinVisitor for QuarterCounter {
    fn visit_quarter(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn report(&self) -> String {
        format!("quarters: {}", self.count)
    }
}

/// Counts exactly one variant: toonies.
#[derive(Default)]
struct ToonieCounter {
    count: usize,
}

impl CoinVisitor for ToonieCounter {
    fn visit_toonie(&mut self, _coin: &Coin) {
        self.count += 1;
    }

    fn report(&self) -> String {
        format!("toonies: {}", self.count)
    }
}

struct Indifferent;

impl CoinVisitor for Indifferent {
    fn report(&self) -> String {
        "nothing counted".to_string()
    }
}

#[test]
fn test_dispatch_reaches_exactly_the_matching_handler() {
    for currency in Currency::ALL {
        for &variant in currency.variants() {
            let mut visitor = TraceVisitor::default();
            Coin::new(variant).accept(&mut visitor);
            assert_eq!(visitor.seen, vec![variant.label()]);
        }
    }

    let mut visitor = TraceVisitor::default();
    Coin::NULL.accept(&mut visitor);
    assert_eq!(visitor.seen, vec!["Null"]);
}

#[test]
fn test_single_variant_visitors_do_not_interfere() {
    let mut quarters = QuarterCounter::default();
    let mut toonies = ToonieCounter::default();

    let coins = [
        Coin::new(Variant::Usd(UsdCoin::Quarter)),
        Coin::new(Variant::Cad(CadCoin::Quarter)),
        Coin::new(Variant::Cad(CadCoin::Toonie)),
        Coin::NULL,
    ];
    for coin in &coins {
        coin.accept(&mut quarters);
        coin.accept(&mut toonies);
    }

    // The Canadian quarter dispatches to its own handler, not the USD one.
    assert_eq!(quarters.report(), "quarters: 1");
    assert_eq!(toonies.report(), "toonies: 1");
}

#[test]
fn test_visitor_with_no_overrides_reports_empty() {
    let mut purse = CoinPurse::new();
    purse.add(Coin::new(Variant::Usd(UsdCoin::Dollar)));
    purse.add(Coin::NULL);

    let mut visitor = Indifferent;
    for coin in &purse {
        coin.accept(&mut visitor);
    }
    assert_eq!(visitor.report(), "nothing counted");
}

#[tokio::test]
async fn test_purse_traversal_with_multiple_visitors() {
    let registry = common::flawless_registry();
    let mint = registry.get(Currency::Usd);

    let mut purse = CoinPurse::new();
    purse.fill(mint, 2).await;
    purse.add(Coin::NULL);

    let mut usd = UsdCounter::default();
    let mut nulls = NullCounter::default();
    for coin in &purse {
        coin.accept(&mut usd);
        coin.accept(&mut nulls);
    }

    assert_eq!(usd.count(), 2 * Currency::Usd.variants().len());
    assert_eq!(nulls.count(), 1);
    assert_eq!(usd.report(), "USD coins: 12");
    assert_eq!(nulls.report(), "null coins: 1");
}
