use crate::domain::coin::{CadCoin, EurCoin, GbpCoin, UsdCoin, Variant};
use crate::error::MintError;
use std::fmt;
use std::str::FromStr;

/// The closed set of currencies this mint network supports.
///
/// Discriminant order matches [`Currency::ALL`]; the registry relies on it
/// for indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Gbp,
    Cad,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Cad, Currency::Eur];

    /// ISO-4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }

    /// Display name of the national mint striking this currency.
    pub fn mint_name(self) -> &'static str {
        match self {
            Currency::Usd => "United States Mint",
            Currency::Gbp => "The Royal Mint",
            Currency::Cad => "Royal Canadian Mint",
            Currency::Eur => "Monnaie de Paris",
        }
    }

    /// Motto struck into every coin of this currency.
    pub fn engraving(self) -> &'static str {
        match self {
            Currency::Usd => "E PLURIBUS UNUM",
            Currency::Gbp => "DIEU ET MON DROIT",
            Currency::Cad => "A MARI USQUE AD MARE",
            Currency::Eur => "EUROPA",
        }
    }

    /// Every denomination this currency is issued in, largest first.
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Currency::Usd => &[
                Variant::Usd(UsdCoin::Dollar),
                Variant::Usd(UsdCoin::HalfDollar),
                Variant::Usd(UsdCoin::Quarter),
                Variant::Usd(UsdCoin::Dime),
                Variant::Usd(UsdCoin::Nickel),
                Variant::Usd(UsdCoin::Penny),
            ],
            Currency::Gbp => &[
                Variant::Gbp(GbpCoin::FivePound),
                Variant::Gbp(GbpCoin::TwoPound),
                Variant::Gbp(GbpCoin::Pound),
                Variant::Gbp(GbpCoin::FiftyPence),
                Variant::Gbp(GbpCoin::TwentyPence),
                Variant::Gbp(GbpCoin::TenPence),
                Variant::Gbp(GbpCoin::FivePence),
                Variant::Gbp(GbpCoin::TwoPence),
                Variant::Gbp(GbpCoin::Pence),
            ],
            Currency::Cad => &[
                Variant::Cad(CadCoin::Toonie),
                Variant::Cad(CadCoin::Loonie),
                Variant::Cad(CadCoin::FiftyCent),
                Variant::Cad(CadCoin::Quarter),
                Variant::Cad(CadCoin::Dime),
                Variant::Cad(CadCoin::Nickel),
            ],
            Currency::Eur => &[
                Variant::Eur(EurCoin::TwoEuro),
                Variant::Eur(EurCoin::Euro),
                Variant::Eur(EurCoin::FiftyCent),
                Variant::Eur(EurCoin::TwentyCent),
                Variant::Eur(EurCoin::TenCent),
                Variant::Eur(EurCoin::FiveCent),
                Variant::Eur(EurCoin::TwoCent),
                Variant::Eur(EurCoin::Cent),
            ],
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| MintError::UnknownCurrency(s.to_string()))
    }
}
