// Exhaustive IEEE 754 float domains for 16, 32 and 64-bit widths.
//
// Every finite non-zero magnitude is uniquely m * 2^e with m odd. Odd
// mantissas and exponents are enumerated independently, both restricted to
// the ranges the width can represent, then paired. The pairs that still
// overflow or lose precision are dropped, the magnitudes are interleaved
// with their negations, and NaN, the infinities and the zeros go in front.

use crate::config::{PairOrder, SpecialFloatOrder};
use crate::ints::range;
use crate::lazy::LazySeq;
use crate::product::{pairs, pairs_logarithmic, pairs_square_root};
use half::f16;
use std::fmt;

#[cfg(test)]
mod tests;

// Float width enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    Width16,
    Width32,
    Width64,
}

impl FloatWidth {
    pub fn bits(self) -> u32 {
        match self {
            FloatWidth::Width16 => 16,
            FloatWidth::Width32 => 32,
            FloatWidth::Width64 => 64,
        }
    }

    pub fn exponent_bits(self) -> u32 {
        match self {
            FloatWidth::Width16 => 5,
            FloatWidth::Width32 => 8,
            FloatWidth::Width64 => 11,
        }
    }

    pub fn mantissa_bits(self) -> u32 {
        match self {
            FloatWidth::Width16 => 10,
            FloatWidth::Width32 => 23,
            FloatWidth::Width64 => 52,
        }
    }

    pub fn bias(self) -> i32 {
        match self {
            FloatWidth::Width16 => 15,
            FloatWidth::Width32 => 127,
            FloatWidth::Width64 => 1023,
        }
    }

    /// Biased exponent reserved for infinities and NaN
    pub fn max_exponent(self) -> u32 {
        (1 << self.exponent_bits()) - 1
    }

    pub fn mantissa_mask(self) -> u64 {
        (1u64 << self.mantissa_bits()) - 1
    }

    pub fn sign_mask(self) -> u64 {
        1u64 << (self.bits() - 1)
    }

    /// Significand bits including the implicit leading one
    pub fn precision(self) -> u32 {
        self.mantissa_bits() + 1
    }

    /// Exponent of the smallest subnormal, `1 * 2^min_odd_exponent`
    pub fn min_odd_exponent(self) -> i32 {
        1 - self.bias() - self.mantissa_bits() as i32
    }

    /// Largest exponent an odd mantissa can carry, reached by mantissa 1
    pub fn max_odd_exponent(self) -> i32 {
        self.bias()
    }
}

/// A binary floating-point type that can be enumerated bit for bit.
pub trait FloatDomain: Copy + PartialEq + fmt::Debug + 'static {
    const WIDTH: FloatWidth;

    fn from_raw_bits(bits: u64) -> Self;

    fn to_raw_bits(self) -> u64;
}

impl FloatDomain for f16 {
    const WIDTH: FloatWidth = FloatWidth::Width16;

    fn from_raw_bits(bits: u64) -> Self {
        f16::from_bits(bits as u16)
    }

    fn to_raw_bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl FloatDomain for f32 {
    const WIDTH: FloatWidth = FloatWidth::Width32;

    fn from_raw_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    fn to_raw_bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl FloatDomain for f64 {
    const WIDTH: FloatWidth = FloatWidth::Width64;

    fn from_raw_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }
}

fn negate<F: FloatDomain>(f: F) -> F {
    F::from_raw_bits(f.to_raw_bits() ^ F::WIDTH.sign_mask())
}

/// Split a finite non-zero float into an odd mantissa and an exponent with
/// `mantissa * 2^exponent == f` exactly. `None` for zeros, infinities and NaN.
pub fn mantissa_and_exponent<F: FloatDomain>(f: F) -> Option<(i64, i32)> {
    let width = F::WIDTH;
    let bits = f.to_raw_bits();
    let magnitude = bits & !width.sign_mask();
    let biased = (magnitude >> width.mantissa_bits()) as u32;
    if magnitude == 0 || biased == width.max_exponent() {
        return None;
    }
    let fraction = magnitude & width.mantissa_mask();
    let (significand, exponent) = if biased == 0 {
        (fraction, width.min_odd_exponent())
    } else {
        (
            fraction | (1u64 << width.mantissa_bits()),
            biased as i32 - width.bias() - width.mantissa_bits() as i32,
        )
    };
    let shift = significand.trailing_zeros();
    let mantissa = (significand >> shift) as i64;
    let signed = if bits & width.sign_mask() != 0 { -mantissa } else { mantissa };
    Some((signed, exponent + shift as i32))
}

/// Inverse of [`mantissa_and_exponent`]. `None` unless `mantissa` is odd and
/// `mantissa * 2^exponent` is exactly representable.
pub fn from_mantissa_and_exponent<F: FloatDomain>(mantissa: i64, exponent: i32) -> Option<F> {
    let width = F::WIDTH;
    if mantissa % 2 == 0
        || exponent < width.min_odd_exponent()
        || exponent > width.max_odd_exponent()
    {
        return None;
    }
    let magnitude = mantissa.unsigned_abs();
    let length = 64 - magnitude.leading_zeros();
    if length > width.precision() {
        return None;
    }
    let top = exponent + length as i32 - 1;
    if top > width.max_odd_exponent() {
        return None;
    }
    let body = if top >= 1 - width.bias() {
        let biased = (top + width.bias()) as u64;
        let fraction = (magnitude << (width.mantissa_bits() + 1 - length)) & width.mantissa_mask();
        (biased << width.mantissa_bits()) | fraction
    } else {
        magnitude << (exponent - width.min_odd_exponent()) as u32
    };
    let sign = if mantissa < 0 { width.sign_mask() } else { 0 };
    Some(F::from_raw_bits(sign | body))
}

/// `0, 1, -1, 2, -2, ...` over the exponents an odd mantissa can carry.
pub fn exponents<F: FloatDomain>() -> LazySeq<i32> {
    let width = F::WIDTH;
    let ascending = range(1, width.max_odd_exponent());
    let descending = range(1, -width.min_odd_exponent()).map(|e| -e);
    LazySeq::cons(0, LazySeq::interleave(vec![ascending, descending]))
}

/// `1, 3, 5, ...` up to the largest odd mantissa the width can hold.
pub fn odd_mantissas<F: FloatDomain>() -> LazySeq<i64> {
    let count = 1i64 << (F::WIDTH.precision() - 1);
    range(0, count - 1).map(|i| 2 * i + 1)
}

/// Every finite positive value of the width, exactly once.
pub fn positive_finite_floats<F: FloatDomain>(pairing: PairOrder) -> LazySeq<F> {
    let (exponents, mantissas) = (exponents::<F>(), odd_mantissas::<F>());
    match pairing {
        PairOrder::Linear => pairs(&exponents, &mantissas)
            .filter_map(|(e, m)| from_mantissa_and_exponent(m, e)),
        PairOrder::SquareRoot => pairs_square_root(&exponents, &mantissas)
            .filter_map(|(e, m)| from_mantissa_and_exponent(m, e)),
        PairOrder::Logarithmic => pairs_logarithmic(&mantissas, &exponents)
            .filter_map(|(m, e)| from_mantissa_and_exponent(m, e)),
    }
}

/// NaN, both infinities and both zeros.
pub fn special_values<F: FloatDomain>(order: SpecialFloatOrder) -> Vec<F> {
    let width = F::WIDTH;
    let infinity = (width.max_exponent() as u64) << width.mantissa_bits();
    let nan = infinity | (1u64 << (width.mantissa_bits() - 1));
    let sign = width.sign_mask();
    let raw = match order {
        SpecialFloatOrder::Complexity => [nan, infinity, sign | infinity, 0, sign],
        SpecialFloatOrder::Ascending => [sign | infinity, sign, nan, 0, infinity],
    };
    raw.iter().map(|&bits| F::from_raw_bits(bits)).collect()
}

/// Every value of the width, with a single NaN, exactly once.
pub fn floats_of<F: FloatDomain>(pairing: PairOrder, specials: SpecialFloatOrder) -> LazySeq<F> {
    let positives = positive_finite_floats::<F>(pairing);
    let negatives = positives.map(negate::<F>);
    LazySeq::from_vec(special_values(specials)).concat(&LazySeq::interleave(vec![positives, negatives]))
}
