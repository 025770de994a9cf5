use crate::application::mint::Mint;
use crate::domain::coin::Coin;

/// An ordered container of minted coins, sentinels included.
///
/// The purse never interprets its contents; visitors traverse it through
/// borrowing iteration and accumulate their own state.
#[derive(Debug, Default)]
pub struct CoinPurse {
    coins: Vec<Coin>,
}

impl CoinPurse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, coin: Coin) {
        self.coins.push(coin);
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.coins.iter()
    }

    /// Tops the purse up: one coin of every denomination of the mint's
    /// currency per round. Gate failures land in the purse as sentinels.
    pub async fn fill(&mut self, mint: &Mint, rounds: usize) {
        for _ in 0..rounds {
            for &variant in mint.currency().variants() {
                let coin = mint.make_coin(variant.face_multiplier()).await;
                self.add(coin);
            }
        }
    }
}

impl<'a> IntoIterator for &'a CoinPurse {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.coins.iter()
    }
}
