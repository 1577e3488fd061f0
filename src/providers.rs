//! Value providers.
//!
//! A [`Provider`] hands out one [`LazySeq`] per domain. The exhaustive
//! provider enumerates every value of the domain, small values first; the
//! random provider samples from a seeded generator. Both are driven by a
//! [`ProviderConfig`], and either can stand behind `dyn Provider`.

use crate::config::ProviderConfig;
use crate::error::EnumerationResult;
use crate::floats::{floats_of, FloatDomain};
use crate::ints::{big_integers, booleans, integers, natural_big_integers, naturals};
use crate::lazy::LazySeq;
use crate::primes::PrimeSieve;
use crate::{product, strings};
use half::f16;
use num_bigint::{BigInt, BigUint};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

/// Longest string the random provider produces
const MAX_RANDOM_STRING_LEN: usize = 16;

pub trait Provider {
    fn booleans(&self) -> LazySeq<bool>;

    fn i8s(&self) -> LazySeq<i8>;
    fn i16s(&self) -> LazySeq<i16>;
    fn i32s(&self) -> LazySeq<i32>;
    fn i64s(&self) -> LazySeq<i64>;
    fn i128s(&self) -> LazySeq<i128>;

    fn u8s(&self) -> LazySeq<u8>;
    fn u16s(&self) -> LazySeq<u16>;
    fn u32s(&self) -> LazySeq<u32>;
    fn u64s(&self) -> LazySeq<u64>;
    fn u128s(&self) -> LazySeq<u128>;

    fn big_integers(&self) -> LazySeq<BigInt>;
    fn natural_big_integers(&self) -> LazySeq<BigUint>;
    fn primes(&self) -> LazySeq<u64>;

    fn ascii_characters(&self) -> LazySeq<char>;
    fn characters(&self) -> LazySeq<char>;
    fn ascii_strings(&self) -> LazySeq<String>;
    fn strings(&self) -> LazySeq<String>;

    fn f16s(&self) -> LazySeq<f16>;
    fn f32s(&self) -> LazySeq<f32>;
    fn f64s(&self) -> LazySeq<f64>;

    fn pairs<A, B>(&self, a: &LazySeq<A>, b: &LazySeq<B>) -> LazySeq<(A, B)>
    where
        Self: Sized,
        A: Clone + 'static,
        B: Clone + 'static,
    {
        product::pairs(a, b)
    }

    fn triples<A, B, C>(
        &self,
        a: &LazySeq<A>,
        b: &LazySeq<B>,
        c: &LazySeq<C>,
    ) -> LazySeq<(A, B, C)>
    where
        Self: Sized,
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        product::triples(a, b, c)
    }

    fn tuples<T: Clone + 'static, const N: usize>(&self, xs: &LazySeq<T>) -> LazySeq<[T; N]>
    where
        Self: Sized,
    {
        product::tuples::<T, N>(xs)
    }

    fn lists<T: Clone + 'static>(&self, xs: &LazySeq<T>) -> LazySeq<Vec<T>>
    where
        Self: Sized,
    {
        product::lists(xs)
    }
}

/// Enumerates every value of each domain exactly once.
#[derive(Debug, Clone)]
pub struct ExhaustiveProvider {
    config: ProviderConfig,
    sieve: PrimeSieve,
}

impl ExhaustiveProvider {
    pub fn new(config: ProviderConfig) -> EnumerationResult<Self> {
        let sieve = PrimeSieve::new(config.sieve_limit)?;
        log::debug!(
            "Exhaustive provider ready: {} primes sieved up to {}, floats paired {:?}",
            sieve.sieved_count(),
            sieve.limit(),
            config.float_pairing
        );
        Ok(ExhaustiveProvider { config, sieve })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn sieve(&self) -> &PrimeSieve {
        &self.sieve
    }

    fn floats<F: FloatDomain>(&self) -> LazySeq<F> {
        floats_of::<F>(self.config.float_pairing, self.config.special_floats)
    }
}

impl Provider for ExhaustiveProvider {
    fn booleans(&self) -> LazySeq<bool> {
        booleans()
    }

    fn i8s(&self) -> LazySeq<i8> {
        integers()
    }

    fn i16s(&self) -> LazySeq<i16> {
        integers()
    }

    fn i32s(&self) -> LazySeq<i32> {
        integers()
    }

    fn i64s(&self) -> LazySeq<i64> {
        integers()
    }

    fn i128s(&self) -> LazySeq<i128> {
        integers()
    }

    fn u8s(&self) -> LazySeq<u8> {
        naturals()
    }

    fn u16s(&self) -> LazySeq<u16> {
        naturals()
    }

    fn u32s(&self) -> LazySeq<u32> {
        naturals()
    }

    fn u64s(&self) -> LazySeq<u64> {
        naturals()
    }

    fn u128s(&self) -> LazySeq<u128> {
        naturals()
    }

    fn big_integers(&self) -> LazySeq<BigInt> {
        big_integers()
    }

    fn natural_big_integers(&self) -> LazySeq<BigUint> {
        natural_big_integers()
    }

    fn primes(&self) -> LazySeq<u64> {
        self.sieve.primes()
    }

    fn ascii_characters(&self) -> LazySeq<char> {
        strings::ascii_characters()
    }

    fn characters(&self) -> LazySeq<char> {
        strings::characters()
    }

    fn ascii_strings(&self) -> LazySeq<String> {
        strings::ascii_strings()
    }

    fn strings(&self) -> LazySeq<String> {
        strings::strings()
    }

    fn f16s(&self) -> LazySeq<f16> {
        self.floats()
    }

    fn f32s(&self) -> LazySeq<f32> {
        self.floats()
    }

    fn f64s(&self) -> LazySeq<f64> {
        self.floats()
    }
}

/// Samples each domain from a ChaCha8 generator.
///
/// Every cursor reseeds from the configured seed, so two traversals of the
/// same sequence agree. Sequences never end. No distribution is promised
/// beyond "every value can come up".
#[derive(Debug, Clone)]
pub struct RandomProvider {
    seed: u64,
    sieve: PrimeSieve,
}

impl RandomProvider {
    pub fn new(config: ProviderConfig) -> EnumerationResult<Self> {
        let sieve = PrimeSieve::new(config.sieve_limit)?;
        log::debug!("Random provider ready with seed {}", config.seed);
        Ok(RandomProvider {
            seed: config.seed,
            sieve,
        })
    }

    fn sample<T, F>(&self, draw: F) -> LazySeq<T>
    where
        T: 'static,
        F: Fn(&mut ChaCha8Rng) -> T + 'static,
    {
        let seed = self.seed;
        let draw = Rc::new(draw);
        LazySeq::new(move || {
            let draw = Rc::clone(&draw);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            std::iter::repeat_with(move || draw(&mut rng))
        })
    }

    fn floats<F: FloatDomain>(&self) -> LazySeq<F> {
        let bits = F::WIDTH.bits();
        self.sample(move |rng| F::from_raw_bits(rng.gen::<u64>() >> (64 - bits)))
    }

    fn strings_from<G>(&self, draw_char: G) -> LazySeq<String>
    where
        G: Fn(&mut ChaCha8Rng) -> char + 'static,
    {
        self.sample(move |rng| {
            let length = rng.gen_range(0..=MAX_RANDOM_STRING_LEN);
            (0..length).map(|_| draw_char(rng)).collect()
        })
    }
}

fn random_ascii(rng: &mut ChaCha8Rng) -> char {
    char::from(rng.gen_range(0u8..128))
}

impl Provider for RandomProvider {
    fn booleans(&self) -> LazySeq<bool> {
        self.sample(|rng| rng.gen())
    }

    fn i8s(&self) -> LazySeq<i8> {
        self.sample(|rng| rng.gen())
    }

    fn i16s(&self) -> LazySeq<i16> {
        self.sample(|rng| rng.gen())
    }

    fn i32s(&self) -> LazySeq<i32> {
        self.sample(|rng| rng.gen())
    }

    fn i64s(&self) -> LazySeq<i64> {
        self.sample(|rng| rng.gen())
    }

    fn i128s(&self) -> LazySeq<i128> {
        self.sample(|rng| rng.gen())
    }

    fn u8s(&self) -> LazySeq<u8> {
        self.sample(|rng| rng.gen())
    }

    fn u16s(&self) -> LazySeq<u16> {
        self.sample(|rng| rng.gen())
    }

    fn u32s(&self) -> LazySeq<u32> {
        self.sample(|rng| rng.gen())
    }

    fn u64s(&self) -> LazySeq<u64> {
        self.sample(|rng| rng.gen())
    }

    fn u128s(&self) -> LazySeq<u128> {
        self.sample(|rng| rng.gen())
    }

    fn big_integers(&self) -> LazySeq<BigInt> {
        self.sample(|rng| BigInt::from(rng.gen::<i128>()))
    }

    fn natural_big_integers(&self) -> LazySeq<BigUint> {
        self.sample(|rng| BigUint::from(rng.gen::<u128>()))
    }

    fn primes(&self) -> LazySeq<u64> {
        let table: Rc<Vec<u64>> = Rc::new(self.sieve.sieved_primes().to_vec());
        self.sample(move |rng| table[rng.gen_range(0..table.len())])
    }

    fn ascii_characters(&self) -> LazySeq<char> {
        self.sample(random_ascii)
    }

    fn characters(&self) -> LazySeq<char> {
        self.sample(|rng| rng.gen())
    }

    fn ascii_strings(&self) -> LazySeq<String> {
        self.strings_from(random_ascii)
    }

    fn strings(&self) -> LazySeq<String> {
        self.strings_from(|rng| rng.gen())
    }

    fn f16s(&self) -> LazySeq<f16> {
        self.floats()
    }

    fn f32s(&self) -> LazySeq<f32> {
        self.floats()
    }

    fn f64s(&self) -> LazySeq<f64> {
        self.floats()
    }
}
