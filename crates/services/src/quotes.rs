use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use momentum_core::catalog::{QUOTES, WEEKDAYS};

/// Seedable source for the cosmetic random picks on the setup and weekly pages.
///
/// Nothing it returns feeds back into session state.
#[derive(Debug, Clone)]
pub struct QuotePicker {
    rng: StdRng,
}

impl QuotePicker {
    /// Deterministic picker: the same seed yields the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// One motivational quote.
    pub fn quote(&mut self) -> &'static str {
        QUOTES.choose(&mut self.rng).copied().unwrap_or(QUOTES[0])
    }

    /// Sample "this week" grid: one done/not-done flag per weekday.
    pub fn week_grid(&mut self) -> [(&'static str, bool); 7] {
        WEEKDAYS.map(|day| (day, self.rng.random_bool(0.5)))
    }
}
