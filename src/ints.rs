// Exhaustive integer domains.
// Fixed-width domains are finite and end after exactly 2^width elements;
// arbitrary-precision domains never end. Signed domains alternate signs by
// magnitude so that small values come first.

use crate::lazy::LazySeq;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, PrimInt, Signed, Unsigned, Zero};

pub fn booleans() -> LazySeq<bool> {
    LazySeq::from_vec(vec![false, true])
}

/// `start, start + 1, ..., end`; empty when `start > end`.
pub fn range<T: PrimInt + 'static>(start: T, end: T) -> LazySeq<T> {
    LazySeq::new(move || {
        let mut next = if start <= end { Some(start) } else { None };
        std::iter::from_fn(move || {
            let current = next?;
            next = if current < end {
                current.checked_add(&T::one())
            } else {
                None
            };
            Some(current)
        })
    })
}

/// `start, start + 1, ...` up to the type's maximum.
pub fn range_up<T: PrimInt + 'static>(start: T) -> LazySeq<T> {
    range(start, T::max_value())
}

/// `start, start - 1, ...` down to the type's minimum.
pub fn range_down<T: PrimInt + 'static>(start: T) -> LazySeq<T> {
    LazySeq::new(move || {
        let mut next = Some(start);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.checked_sub(&T::one());
            Some(current)
        })
    })
}

pub fn naturals<T: PrimInt + Unsigned + 'static>() -> LazySeq<T> {
    range_up(T::zero())
}

pub fn positive_integers<T: PrimInt + 'static>() -> LazySeq<T> {
    range_up(T::one())
}

pub fn negative_integers<T: PrimInt + Signed + 'static>() -> LazySeq<T> {
    range_down(-T::one())
}

/// `0, 1, -1, 2, -2, ..., MAX, -MAX, MIN`.
///
/// The minimum has no positive counterpart and is appended once at the end.
pub fn integers<T: PrimInt + Signed + 'static>() -> LazySeq<T> {
    let positives = positive_integers::<T>();
    let negatives = positives.map(|x: T| -x);
    LazySeq::cons(
        T::zero(),
        LazySeq::interleave(vec![positives, negatives]).concat(&LazySeq::once(T::min_value())),
    )
}

pub fn natural_big_integers() -> LazySeq<BigUint> {
    LazySeq::iterate(|x: &BigUint| x + 1u32, BigUint::zero())
}

pub fn positive_big_integers() -> LazySeq<BigInt> {
    LazySeq::iterate(|x: &BigInt| x + 1, BigInt::one())
}

pub fn negative_big_integers() -> LazySeq<BigInt> {
    positive_big_integers().map(|x| -x)
}

/// `0, 1, -1, 2, -2, ...` without end.
pub fn big_integers() -> LazySeq<BigInt> {
    LazySeq::cons(
        BigInt::zero(),
        LazySeq::interleave(vec![positive_big_integers(), negative_big_integers()]),
    )
}
