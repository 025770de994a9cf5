use crate::domain::coin::{Coin, Smelter};
use crate::domain::currency::Currency;
use crate::domain::ports::{SharedRandomizer, SharedSerialIssuer};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Requested face values match a denomination when within this distance.
/// Doubles don't compare nicely, so all matching goes through [`eq`].
pub const FACE_TOLERANCE: f64 = 0.00001;

/// How long the pipeline waits on the serial issuance service before
/// proceeding without a serial.
const SERIAL_TIMEOUT: Duration = Duration::from_secs(2);

pub fn eq(a: f64, b: f64) -> bool {
    (a - b).abs() < FACE_TOLERANCE
}

/// A probabilistic production step. Each gate independently consults the
/// randomizer at its own odds and fails on the rare outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Inspect,
    Smooth,
    Polish,
}

impl Gate {
    pub const ALL: [Gate; 3] = [Gate::Inspect, Gate::Smooth, Gate::Polish];

    /// Odds denominator for the gate's 1-in-N failure.
    pub fn odds(self) -> u32 {
        match self {
            Gate::Inspect => 1000,
            Gate::Smooth => 1000,
            Gate::Polish => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Gate::Inspect => "inspect",
            Gate::Smooth => "smooth",
            Gate::Polish => "polish",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A national mint: owns the manufacturing pipeline for one currency.
///
/// Stateless aside from its currency; randomness and serial issuance come
/// through shared port handles so every mint in a registry uses the same
/// adapters. Each [`Mint::make_coin`] call is independent.
pub struct Mint {
    currency: Currency,
    randomizer: SharedRandomizer,
    serials: SharedSerialIssuer,
}

impl Mint {
    pub fn new(
        currency: Currency,
        randomizer: SharedRandomizer,
        serials: SharedSerialIssuer,
    ) -> Self {
        Self {
            currency,
            randomizer,
            serials,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn name(&self) -> &'static str {
        self.currency.mint_name()
    }

    /// Produces a coin of the requested face value.
    ///
    /// Runs the full pipeline: manufacture, smelt, imprint, serial
    /// stamping, then the three quality gates. Every failure mode is
    /// represented by the returned [`Coin::NULL`] sentinel; no error
    /// escapes this method. Callers check success by comparing against
    /// the sentinel.
    pub async fn make_coin(&self, requested: f64) -> Coin {
        let coin = self.manufacture(requested);
        if coin.is_null() {
            return coin;
        }

        let coin = self.smelt(coin);
        let coin = self.imprint(coin);
        let coin = self.stamp_serial(coin).await;

        if self.quality_gates(&coin) {
            coin
        } else {
            warn!(currency = %self.currency, "failed to manufacture coin");
            Coin::NULL
        }
    }

    /// Maps the requested value onto one of the currency's denominations
    /// using tolerance matching; the sentinel when nothing matches.
    fn manufacture(&self, requested: f64) -> Coin {
        for &variant in self.currency.variants() {
            if eq(requested, variant.face_multiplier()) {
                debug!(currency = %self.currency, variant = variant.label(), "manufactured raw coin");
                return Coin::new(variant);
            }
        }
        warn!(currency = %self.currency, requested, "no denomination matches requested value");
        Coin::NULL
    }

    /// Attaches the variant's smelting delegate.
    fn smelt(&self, coin: Coin) -> Coin {
        match coin.variant().alloy() {
            Some(alloy) => {
                debug!(variant = coin.variant().label(), alloy = ?alloy, "smelted");
                coin.with_smelter(Smelter::new(alloy))
            }
            None => coin,
        }
    }

    /// Strikes the coin from the currency's master die.
    fn imprint(&self, coin: Coin) -> Coin {
        let die = Coin::new(coin.variant()).with_engraving(self.currency.engraving());
        let coin = coin.imprint(&die);
        debug!(variant = coin.variant().label(), engraving = coin.engraving(), "imprinted");
        coin
    }

    /// Requests a serial from the issuance service and stamps it on the
    /// coin. Best effort: a slow or failing service only costs the serial,
    /// never the coin.
    async fn stamp_serial(&self, coin: Coin) -> Coin {
        let variant = coin.variant().label();
        let issued = tokio::time::timeout(SERIAL_TIMEOUT, self.serials.issue(coin.code(), variant));
        match issued.await {
            Ok(Ok(serial)) => {
                debug!(variant, serial = %serial, "stamped serial");
                coin.with_serial(serial)
            }
            Ok(Err(err)) => {
                warn!(variant, error = %err, "serial issuance failed");
                coin
            }
            Err(_) => {
                warn!(variant, "serial issuance timed out");
                coin
            }
        }
    }

    /// Runs every gate and reports whether all passed. All three gates are
    /// evaluated even after a failure so each announces its own outcome.
    fn quality_gates(&self, coin: &Coin) -> bool {
        Gate::ALL
            .iter()
            .fold(true, |passed, &gate| self.run_gate(gate, coin) && passed)
    }

    fn run_gate(&self, gate: Gate, coin: &Coin) -> bool {
        let failed = self.randomizer.one_in(gate.odds());
        if failed {
            warn!(gate = %gate, variant = coin.variant().label(), "quality gate failed");
        } else {
            debug!(gate = %gate, variant = coin.variant().label(), "quality gate passed");
        }
        !failed
    }
}

/// All supported mints, constructed once at startup and passed explicitly
/// to whoever needs to produce coins.
pub struct MintRegistry {
    mints: Vec<Mint>,
}

impl MintRegistry {
    pub fn new(randomizer: SharedRandomizer, serials: SharedSerialIssuer) -> Self {
        let mints = Currency::ALL
            .into_iter()
            .map(|currency| Mint::new(currency, Arc::clone(&randomizer), Arc::clone(&serials)))
            .collect();
        Self { mints }
    }

    pub fn get(&self, currency: Currency) -> &Mint {
        // Construction order follows Currency::ALL, which matches the
        // enum's discriminant order.
        &self.mints[currency as usize]
    }
}
