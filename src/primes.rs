//! Prime numbers from an explicit sieve.
//!
//! A [`PrimeSieve`] is built once, eagerly, up to a fixed limit and then
//! shared by every sequence derived from it. Questions about numbers past the
//! limit fall back to trial division, so nothing here is ever bounded by the
//! sieve size, only slowed down by it.

use crate::error::{EnumerationError, EnumerationResult};
use crate::ints::range_up;
use crate::lazy::LazySeq;
use std::rc::Rc;

const DEFAULT_LIMIT: u64 = 1 << 16;

#[derive(Debug, Clone)]
pub struct PrimeSieve {
    limit: u64,
    is_prime: Rc<Vec<bool>>,
    primes: Rc<Vec<u64>>,
}

impl PrimeSieve {
    /// Sieve `[0, limit]`. The limit must be at least 2.
    pub fn new(limit: u64) -> EnumerationResult<Self> {
        if limit < 2 {
            return Err(EnumerationError::InvalidRange(format!(
                "sieve limit must be at least 2, got {}",
                limit
            )));
        }
        let size = usize::try_from(limit)
            .ok()
            .and_then(|limit| limit.checked_add(1))
            .ok_or_else(|| {
                EnumerationError::InvalidRange(format!("sieve limit {} does not fit in memory", limit))
            })?;
        Ok(Self::build(size))
    }

    fn build(size: usize) -> Self {
        let mut is_prime = vec![true; size];
        is_prime[0] = false;
        is_prime[1] = false;
        let mut p = 2;
        while p * p < size {
            if is_prime[p] {
                for multiple in (p * p..size).step_by(p) {
                    is_prime[multiple] = false;
                }
            }
            p += 1;
        }
        let primes: Vec<u64> = (0..size).filter(|&n| is_prime[n]).map(|n| n as u64).collect();
        log::debug!("Sieved {} primes up to {}", primes.len(), size - 1);
        PrimeSieve {
            limit: (size - 1) as u64,
            is_prime: Rc::new(is_prime),
            primes: Rc::new(primes),
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of primes at or below the limit.
    pub fn sieved_count(&self) -> usize {
        self.primes.len()
    }

    pub fn sieved_primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn is_prime(&self, n: u64) -> bool {
        if n <= self.limit {
            return self.is_prime[n as usize];
        }
        let mut divisor = 2u64;
        while divisor.checked_mul(divisor).map_or(false, |square| square <= n) {
            if n % divisor == 0 {
                return false;
            }
            divisor = self.next_divisor(divisor);
        }
        true
    }

    /// Next trial divisor after `d`: the next sieved prime, or `d + 1` past the limit.
    fn next_divisor(&self, d: u64) -> u64 {
        let mut next = d + 1;
        while next <= self.limit && !self.is_prime[next as usize] {
            next += 1;
        }
        next
    }

    /// Every prime in ascending order, without end.
    pub fn primes(&self) -> LazySeq<u64> {
        let table = Rc::clone(&self.primes);
        let sieved = LazySeq::new(move || {
            let table = Rc::clone(&table);
            (0..table.len()).map(move |i| table[i])
        });
        let sieve = self.clone();
        let beyond = range_up(self.limit.saturating_add(1)).filter(move |n| sieve.is_prime(*n));
        sieved.concat(&beyond)
    }

    /// Prime factors of `n` in ascending order, repeated by multiplicity.
    /// Empty for 0 and 1.
    pub fn prime_factors(&self, n: u64) -> LazySeq<u64> {
        let sieve = self.clone();
        LazySeq::unfold(
            move |(remaining, divisor): (u64, u64)| {
                if remaining <= 1 {
                    return None;
                }
                let mut divisor = divisor;
                loop {
                    if divisor.checked_mul(divisor).map_or(true, |square| square > remaining) {
                        return Some((remaining, (1, divisor)));
                    }
                    if remaining % divisor == 0 {
                        return Some((divisor, (remaining / divisor, divisor)));
                    }
                    divisor = sieve.next_divisor(divisor);
                }
            },
            (n, 2),
        )
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::build(DEFAULT_LIMIT as usize + 1)
    }
}

/// Every prime, from a sieve of the default size.
pub fn primes() -> LazySeq<u64> {
    PrimeSieve::default().primes()
}
