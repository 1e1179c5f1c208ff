//! Deterministic random number generation for autoplay.
//!
//! The interactive game never draws random numbers. Autoplay does: it
//! picks secret target cities and, when a scripted answerer has no
//! truthful option, a fallback answer. A run is reproducible from its
//! seed: game `n` always gets the `n`-th fork of the run stream.
//!
//! ```
//! use city_hunt::core::{Catalog, City, GameRng};
//!
//! let mut catalog = Catalog::new();
//! catalog.register(City::new("rome", "Rome", "Italy"));
//! catalog.register(City::new("oslo", "Oslo", "Norway"));
//!
//! let mut run = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(run.fork().pick_city(&catalog), again.fork().pick_city(&catalog));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::catalog::Catalog;
use super::city::CityId;

/// Golden-ratio step between fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 stream with per-game forks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Start a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off the stream for the next game.
    ///
    /// Depends only on the seed and how many forks came before, never on
    /// how much the parent stream has been drawn from.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// A stream keyed by name, e.g. one per target city.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        (self.seed, context).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `0..len`, or 0 when `len` is 0.
    pub fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.inner.gen_range(0..len)
        }
    }

    /// Uniformly pick a city. `None` for an empty catalog.
    pub fn pick_city(&mut self, catalog: &Catalog) -> Option<CityId> {
        if catalog.is_empty() {
            return None;
        }
        Some(CityId::new(self.gen_index(catalog.len()) as u32))
    }
}
