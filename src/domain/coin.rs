use crate::domain::currency::Currency;
use crate::domain::visitor::CoinVisitor;
use rust_decimal::Decimal;
use std::fmt;

/// United States denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsdCoin {
    Dollar,
    HalfDollar,
    Quarter,
    Dime,
    Nickel,
    Penny,
}

/// United Kingdom denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GbpCoin {
    FivePound,
    TwoPound,
    Pound,
    FiftyPence,
    TwentyPence,
    TenPence,
    FivePence,
    TwoPence,
    Pence,
}

/// Canadian denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CadCoin {
    Toonie,
    Loonie,
    FiftyCent,
    Quarter,
    Dime,
    Nickel,
}

/// Euro denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EurCoin {
    TwoEuro,
    Euro,
    FiftyCent,
    TwentyCent,
    TenCent,
    FiveCent,
    TwoCent,
    Cent,
}

/// The complete, closed set of coin variants across all supported
/// currencies, plus the `Null` sentinel for "no coin produced".
///
/// Adding a denomination means adding an enum variant here, its table
/// entries below, and a handler on [`CoinVisitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Null,
    Usd(UsdCoin),
    Gbp(GbpCoin),
    Cad(CadCoin),
    Eur(EurCoin),
}

impl Variant {
    /// The currency this variant is issued in; `None` for the sentinel.
    pub fn currency(self) -> Option<Currency> {
        match self {
            Variant::Null => None,
            Variant::Usd(_) => Some(Currency::Usd),
            Variant::Gbp(_) => Some(Currency::Gbp),
            Variant::Cad(_) => Some(Currency::Cad),
            Variant::Eur(_) => Some(Currency::Eur),
        }
    }

    /// Face value in hundredths of the currency's base unit. Single source
    /// of truth for both the exact and the floating representations.
    fn cents(self) -> i64 {
        match self {
            Variant::Null => 0,
            Variant::Usd(c) => match c {
                UsdCoin::Dollar => 100,
                UsdCoin::HalfDollar => 50,
                UsdCoin::Quarter => 25,
                UsdCoin::Dime => 10,
                UsdCoin::Nickel => 5,
                UsdCoin::Penny => 1,
            },
            Variant::Gbp(c) => match c {
                GbpCoin::FivePound => 500,
                GbpCoin::TwoPound => 200,
                GbpCoin::Pound => 100,
                GbpCoin::FiftyPence => 50,
                GbpCoin::TwentyPence => 20,
                GbpCoin::TenPence => 10,
                GbpCoin::FivePence => 5,
                GbpCoin::TwoPence => 2,
                GbpCoin::Pence => 1,
            },
            Variant::Cad(c) => match c {
                CadCoin::Toonie => 200,
                CadCoin::Loonie => 100,
                CadCoin::FiftyCent => 50,
                CadCoin::Quarter => 25,
                CadCoin::Dime => 10,
                CadCoin::Nickel => 5,
            },
            Variant::Eur(c) => match c {
                EurCoin::TwoEuro => 200,
                EurCoin::Euro => 100,
                EurCoin::FiftyCent => 50,
                EurCoin::TwentyCent => 20,
                EurCoin::TenCent => 10,
                EurCoin::FiveCent => 5,
                EurCoin::TwoCent => 2,
                EurCoin::Cent => 1,
            },
        }
    }

    /// Exact face value with a fixed two-decimal scale.
    pub fn face_value(self) -> Decimal {
        Decimal::new(self.cents(), 2)
    }

    /// Face value as a multiplier of the base unit, for tolerance matching
    /// against requested values.
    pub fn face_multiplier(self) -> f64 {
        self.cents() as f64 / 100.0
    }

    /// Type label used in display strings and serial requests.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Null => "Null",
            Variant::Usd(c) => match c {
                UsdCoin::Dollar => "Dollar",
                UsdCoin::HalfDollar => "HalfDollar",
                UsdCoin::Quarter => "Quarter",
                UsdCoin::Dime => "Dime",
                UsdCoin::Nickel => "Nickel",
                UsdCoin::Penny => "Penny",
            },
            Variant::Gbp(c) => match c {
                GbpCoin::FivePound => "FivePound",
                GbpCoin::TwoPound => "TwoPound",
                GbpCoin::Pound => "Pound",
                GbpCoin::FiftyPence => "FiftyPence",
                GbpCoin::TwentyPence => "TwentyPence",
                GbpCoin::TenPence => "TenPence",
                GbpCoin::FivePence => "FivePence",
                GbpCoin::TwoPence => "TwoPence",
                GbpCoin::Pence => "Pence",
            },
            Variant::Cad(c) => match c {
                CadCoin::Toonie => "Toonie",
                CadCoin::Loonie => "Loonie",
                CadCoin::FiftyCent => "FiftyCent",
                CadCoin::Quarter => "CadQuarter",
                CadCoin::Dime => "CadDime",
                CadCoin::Nickel => "CadNickel",
            },
            Variant::Eur(c) => match c {
                EurCoin::TwoEuro => "TwoEuro",
                EurCoin::Euro => "Euro",
                EurCoin::FiftyCent => "FiftyEuroCent",
                EurCoin::TwentyCent => "TwentyEuroCent",
                EurCoin::TenCent => "TenEuroCent",
                EurCoin::FiveCent => "FiveEuroCent",
                EurCoin::TwoCent => "TwoEuroCent",
                EurCoin::Cent => "EuroCent",
            },
        }
    }

    /// Alloy the variant is struck from; `None` for the sentinel.
    pub fn alloy(self) -> Option<Alloy> {
        let alloy = match self {
            Variant::Null => return None,
            Variant::Usd(c) => match c {
                UsdCoin::Dollar => Alloy::ManganeseBrass,
                UsdCoin::Penny => Alloy::CopperPlatedZinc,
                _ => Alloy::Cupronickel,
            },
            Variant::Gbp(c) => match c {
                GbpCoin::FivePound => Alloy::Cupronickel,
                GbpCoin::TwoPound | GbpCoin::Pound => Alloy::NickelBrass,
                GbpCoin::TwoPence | GbpCoin::Pence => Alloy::CopperPlatedSteel,
                _ => Alloy::NickelPlatedSteel,
            },
            Variant::Cad(c) => match c {
                CadCoin::Toonie => Alloy::NickelBrass,
                _ => Alloy::NickelPlatedSteel,
            },
            Variant::Eur(c) => match c {
                EurCoin::TwoEuro | EurCoin::Euro => Alloy::NickelBrass,
                EurCoin::FiftyCent | EurCoin::TwentyCent | EurCoin::TenCent => Alloy::NordicGold,
                _ => Alloy::CopperPlatedSteel,
            },
        };
        Some(alloy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alloy {
    Cupronickel,
    NickelBrass,
    ManganeseBrass,
    NordicGold,
    NickelPlatedSteel,
    CopperPlatedZinc,
    CopperPlatedSteel,
}

/// Per-coin smelting delegate. Attached by the mint's smelting step;
/// absent on raw and sentinel coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smelter {
    alloy: Alloy,
}

impl Smelter {
    pub fn new(alloy: Alloy) -> Self {
        Self { alloy }
    }

    pub fn alloy(&self) -> Alloy {
        self.alloy
    }
}

/// One minted unit.
///
/// A coin is created by the mint's manufacture step and only changed by the
/// remaining pipeline steps; once the pipeline returns it, it is immutable.
/// The "no coin produced" sentinel is [`Coin::NULL`]: face value zero, empty
/// display, compared structurally like any other coin.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    variant: Variant,
    smelter: Option<Smelter>,
    engraving: Option<&'static str>,
    serial: Option<String>,
}

impl Coin {
    pub const NULL: Coin = Coin {
        variant: Variant::Null,
        smelter: None,
        engraving: None,
        serial: None,
    };

    /// A raw, unprocessed coin of the given variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            smelter: None,
            engraving: None,
            serial: None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.variant == Variant::Null
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// ISO-4217 currency code; the sentinel reports `"XXX"` (no currency).
    pub fn code(&self) -> &'static str {
        match self.variant.currency() {
            Some(currency) => currency.code(),
            None => "XXX",
        }
    }

    /// Face value relative to the currency's base unit; zero for the
    /// sentinel.
    pub fn value(&self) -> Decimal {
        self.variant.face_value()
    }

    pub fn smelter(&self) -> Option<Smelter> {
        self.smelter
    }

    pub fn engraving(&self) -> Option<&'static str> {
        self.engraving
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    pub fn with_smelter(self, smelter: Smelter) -> Self {
        Self {
            smelter: Some(smelter),
            ..self
        }
    }

    pub fn with_engraving(self, engraving: &'static str) -> Self {
        Self {
            engraving: Some(engraving),
            ..self
        }
    }

    pub fn with_serial(self, serial: String) -> Self {
        Self {
            serial: Some(serial),
            ..self
        }
    }

    /// Strikes this coin from a master die, transferring the die's
    /// engraving. The sentinel ignores the die and returns itself.
    pub fn imprint(self, die: &Coin) -> Coin {
        if self.is_null() {
            return self;
        }
        Coin {
            engraving: die.engraving,
            ..self
        }
    }

    /// Dispatches to exactly the visitor handler for this coin's variant.
    pub fn accept(&self, visitor: &mut dyn CoinVisitor) {
        match self.variant {
            Variant::Null => visitor.visit_null(self),
            Variant::Usd(c) => match c {
                UsdCoin::Dollar => visitor.visit_dollar(self),
                UsdCoin::HalfDollar => visitor.visit_half_dollar(self),
                UsdCoin::Quarter => visitor.visit_quarter(self),
                UsdCoin::Dime => visitor.visit_dime(self),
                UsdCoin::Nickel => visitor.visit_nickel(self),
                UsdCoin::Penny => visitor.visit_penny(self),
            },
            Variant::Gbp(c) => match c {
                GbpCoin::FivePound => visitor.visit_five_pound(self),
                GbpCoin::TwoPound => visitor.visit_two_pound(self),
                GbpCoin::Pound => visitor.visit_pound(self),
                GbpCoin::FiftyPence => visitor.visit_fifty_pence(self),
                GbpCoin::TwentyPence => visitor.visit_twenty_pence(self),
                GbpCoin::TenPence => visitor.visit_ten_pence(self),
                GbpCoin::FivePence => visitor.visit_five_pence(self),
                GbpCoin::TwoPence => visitor.visit_two_pence(self),
                GbpCoin::Pence => visitor.visit_pence(self),
            },
            Variant::Cad(c) => match c {
                CadCoin::Toonie => visitor.visit_toonie(self),
                CadCoin::Loonie => visitor.visit_loonie(self),
                CadCoin::FiftyCent => visitor.visit_fifty_cent(self),
                CadCoin::Quarter => visitor.visit_cad_quarter(self),
                CadCoin::Dime => visitor.visit_cad_dime(self),
                CadCoin::Nickel => visitor.visit_cad_nickel(self),
            },
            Variant::Eur(c) => match c {
                EurCoin::TwoEuro => visitor.visit_two_euro(self),
                EurCoin::Euro => visitor.visit_euro(self),
                EurCoin::FiftyCent => visitor.visit_fifty_euro_cent(self),
                EurCoin::TwentyCent => visitor.visit_twenty_euro_cent(self),
                EurCoin::TenCent => visitor.visit_ten_euro_cent(self),
                EurCoin::FiveCent => visitor.visit_five_euro_cent(self),
                EurCoin::TwoCent => visitor.visit_two_euro_cent(self),
                EurCoin::Cent => visitor.visit_euro_cent(self),
            },
        }
    }
}

impl fmt::Display for Coin {
    /// `(<label>)<symbol><value>` with exactly two decimals; the sentinel
    /// renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant.currency() {
            None => Ok(()),
            Some(currency) => write!(
                f,
                "({}){}{}",
                self.variant.label(),
                currency.symbol(),
                self.value()
            ),
        }
    }
}
