//! Provider configuration.

/// How two independently enumerable dimensions are merged into one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    /// Bit interleaving, both dimensions grow at the same rate.
    Linear,
    /// The first dimension grows like the square root of the second.
    SquareRoot,
    /// The first dimension grows linearly, the second logarithmically.
    Logarithmic,
}

/// Placement of the five special float values at the front of a float domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFloatOrder {
    /// `[NaN, +inf, -inf, +0, -0]`
    Complexity,
    /// `[-inf, -0, NaN, +0, +inf]`, NaN sits between the two zeros.
    Ascending,
}

/// Configuration shared by the exhaustive and random providers
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Upper bound (inclusive) of the prime sieve built at provider construction
    pub sieve_limit: u64,

    /// Pairing used to merge float exponents with float mantissas
    pub float_pairing: PairOrder,

    /// Order of NaN, the infinities and the zeros in float domains
    pub special_floats: SpecialFloatOrder,

    /// Seed for the random provider
    pub seed: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            sieve_limit: 1 << 16,
            float_pairing: PairOrder::SquareRoot,
            special_floats: SpecialFloatOrder::Complexity,
            seed: 0,
        }
    }
}

impl ProviderConfig {
    pub fn with_sieve_limit(mut self, sieve_limit: u64) -> Self {
        self.sieve_limit = sieve_limit;
        self
    }

    pub fn with_float_pairing(mut self, float_pairing: PairOrder) -> Self {
        self.float_pairing = float_pairing;
        self
    }

    pub fn with_special_floats(mut self, special_floats: SpecialFloatOrder) -> Self {
        self.special_floats = special_floats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
