//! # Pairing functions over the naturals
//!
//! Every function here is a bijection on its declared domain: muxing merges
//! several natural-number coordinates into one code and demuxing recovers
//! them exactly. Enumerating codes `0, 1, 2, ...` and demuxing each therefore
//! visits every coordinate tuple exactly once, which is how the exhaustive
//! domains combine independent dimensions without starving any of them.
//!
//! The three families differ only in how fast each coordinate grows as the
//! code grows:
//!
//! - [`mux`]/[`demux`]: `k` coordinates, bits dealt round robin, all grow alike.
//! - [`square_root_mux`]: one bit of `x` per two bits of `y`, so `x` grows
//!   like the square root of `y`.
//! - [`logarithmic_mux`]: `y` is a run of trailing one bits, so it grows like
//!   the logarithm of `x`.
//!
//! Bit vectors are little endian throughout.

use crate::error::{EnumerationError, EnumerationResult};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Little-endian bits of `n`, without trailing zeros. Empty for zero.
pub fn bits(n: &BigUint) -> Vec<bool> {
    let mut result: Vec<bool> = n
        .to_bytes_le()
        .into_iter()
        .flat_map(|byte| (0..8).map(move |i| byte & (1 << i) != 0))
        .collect();
    while result.last() == Some(&false) {
        result.pop();
    }
    result
}

/// Inverse of [`bits`]; trailing zeros are allowed.
pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> BigUint {
    let mut bytes = Vec::new();
    for (i, bit) in bits.into_iter().enumerate() {
        if i % 8 == 0 {
            bytes.push(0u8);
        }
        if bit {
            if let Some(byte) = bytes.last_mut() {
                *byte |= 1 << (i % 8);
            }
        }
    }
    BigUint::from_bytes_le(&bytes)
}

fn check_base(base: &BigUint) -> EnumerationResult<()> {
    if *base < BigUint::from(2u32) {
        return Err(EnumerationError::InvalidBase { base: base.clone() });
    }
    Ok(())
}

/// Little-endian base-`base` digits of `n`. Empty for zero.
pub fn digits(base: &BigUint, n: &BigUint) -> EnumerationResult<Vec<BigUint>> {
    check_base(base)?;
    let mut result = Vec::new();
    let mut remaining = n.clone();
    while !remaining.is_zero() {
        result.push(&remaining % base);
        remaining /= base;
    }
    Ok(result)
}

/// Inverse of [`digits`].
pub fn from_digits(base: &BigUint, digits: &[BigUint]) -> EnumerationResult<BigUint> {
    check_base(base)?;
    let mut result = BigUint::zero();
    for digit in digits.iter().rev() {
        if digit >= base {
            return Err(EnumerationError::InvalidDigit {
                digit: digit.clone(),
                base: base.clone(),
            });
        }
        result = result * base + digit;
    }
    Ok(result)
}

/// Interleave the bits of `xs` into a single code.
///
/// Bit `i` of `xs[j]` lands at position `i * k + (k - 1 - j)`, so the last
/// coordinate owns the lowest bit and varies fastest. `mux(&[])` is zero.
pub fn mux(xs: &[BigUint]) -> BigUint {
    let k = xs.len();
    if k == 0 {
        return BigUint::zero();
    }
    let xs_bits: Vec<Vec<bool>> = xs.iter().map(bits).collect();
    let width = xs_bits.iter().map(Vec::len).max().unwrap_or(0);
    let mut code = Vec::with_capacity(width * k);
    for i in 0..width {
        for j in (0..k).rev() {
            code.push(xs_bits[j].get(i).copied().unwrap_or(false));
        }
    }
    from_bits(code)
}

/// Split `n` into `size` coordinates; inverse of [`mux`].
///
/// A size of zero only accepts a zero code.
pub fn demux(size: usize, n: &BigUint) -> EnumerationResult<Vec<BigUint>> {
    if size == 0 {
        if n.is_zero() {
            return Ok(Vec::new());
        }
        return Err(EnumerationError::NonZeroEmptyDemux { code: n.clone() });
    }
    let code = bits(n);
    let mut xs_bits = vec![Vec::with_capacity(code.len() / size + 1); size];
    for (position, bit) in code.into_iter().enumerate() {
        xs_bits[size - 1 - position % size].push(bit);
    }
    Ok(xs_bits.into_iter().map(from_bits).collect())
}

/// Longest run of ones [`logarithmic_mux`] will build, in bits.
pub const MAX_LOGARITHMIC_EXPONENT: u64 = 1 << 24;

/// `(2x + 1) * 2^y - 1`: the bits of `x`, a zero, then `y` ones.
///
/// Fails with `ExponentTooLarge` when `y` exceeds [`MAX_LOGARITHMIC_EXPONENT`].
pub fn logarithmic_mux(x: &BigUint, y: &BigUint) -> EnumerationResult<BigUint> {
    let shift = y
        .to_u64()
        .filter(|&shift| shift <= MAX_LOGARITHMIC_EXPONENT)
        .ok_or_else(|| EnumerationError::ExponentTooLarge { exponent: y.clone() })?;
    let odd = (x << 1usize) + 1u32;
    Ok((odd << shift) - 1u32)
}

/// Inverse of [`logarithmic_mux`].
pub fn logarithmic_demux(n: &BigUint) -> (BigUint, BigUint) {
    let successor = n + 1u32;
    let successor_bits = bits(&successor);
    let y = successor_bits.iter().take_while(|bit| !**bit).count();
    let x = from_bits(successor_bits.into_iter().skip(y + 1));
    (x, BigUint::from(y))
}

/// Deal bits in groups of three: two from `y`, then one from `x`.
pub fn square_root_mux(x: &BigUint, y: &BigUint) -> BigUint {
    let x_bits = bits(x);
    let y_bits = bits(y);
    let groups = x_bits.len().max((y_bits.len() + 1) / 2);
    let bit_at = |v: &[bool], i: usize| v.get(i).copied().unwrap_or(false);
    let mut code = Vec::with_capacity(groups * 3);
    for i in 0..groups {
        code.push(bit_at(&y_bits, 2 * i));
        code.push(bit_at(&y_bits, 2 * i + 1));
        code.push(bit_at(&x_bits, i));
    }
    from_bits(code)
}

/// Inverse of [`square_root_mux`].
pub fn square_root_demux(n: &BigUint) -> (BigUint, BigUint) {
    let mut x_bits = Vec::new();
    let mut y_bits = Vec::new();
    for (position, bit) in bits(n).into_iter().enumerate() {
        if position % 3 == 2 {
            x_bits.push(bit);
        } else {
            y_bits.push(bit);
        }
    }
    (from_bits(x_bits), from_bits(y_bits))
}

/// Smallest `b` with `n < 2^b`.
pub fn bit_length(n: &BigUint) -> u64 {
    n.bits()
}

/// Exclusive upper bound on `mux` codes of `size` coordinates, each below `2^bit_len`.
pub fn mux_bound(size: usize, bit_len: u64) -> BigUint {
    BigUint::one() << (size as u64 * bit_len)
}

/// Exclusive upper bound on `square_root_mux(x, y)` for `x < 2^x_bits`, `y < 2^y_bits`.
pub fn square_root_bound(x_bits: u64, y_bits: u64) -> BigUint {
    let groups = x_bits.max((y_bits + 1) / 2);
    BigUint::one() << (3 * groups)
}

/// Exclusive upper bound on `logarithmic_mux(x, y)` for `x < 2^x_bits`, `y <= y_max`.
pub fn logarithmic_bound(x_bits: u64, y_max: u64) -> BigUint {
    BigUint::one() << (x_bits + 1 + y_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_bits_roundtrip_and_trimming() {
        assert!(bits(&big(0)).is_empty());
        assert_eq!(bits(&big(6)), vec![false, true, true]);
        assert_eq!(from_bits(vec![false, true, true, false, false]), big(6));
        assert_eq!(from_bits(Vec::new()), big(0));
    }

    #[test]
    fn test_digits_rejects_small_bases() {
        assert_eq!(
            digits(&big(1), &big(5)),
            Err(EnumerationError::InvalidBase { base: big(1) })
        );
        assert_eq!(digits(&big(10), &big(1203)).unwrap(), vec![big(3), big(0), big(2), big(1)]);
        assert_eq!(from_digits(&big(10), &[big(3), big(0), big(2), big(1)]).unwrap(), big(1203));
        assert!(matches!(
            from_digits(&big(2), &[big(2)]),
            Err(EnumerationError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_mux_small_codes_vary_last_coordinate_fastest() {
        let pairs: Vec<Vec<BigUint>> = (0..4).map(|n| demux(2, &big(n)).unwrap()).collect();
        assert_eq!(
            pairs,
            vec![
                vec![big(0), big(0)],
                vec![big(0), big(1)],
                vec![big(1), big(0)],
                vec![big(1), big(1)],
            ]
        );
    }

    #[test]
    fn test_mux_of_nothing_is_zero() {
        assert_eq!(mux(&[]), big(0));
        assert_eq!(demux(0, &big(0)).unwrap(), Vec::<BigUint>::new());
        assert_eq!(
            demux(0, &big(3)),
            Err(EnumerationError::NonZeroEmptyDemux { code: big(3) })
        );
    }

    #[test]
    fn test_demux_is_onto_for_three_coordinates() {
        let mut seen = std::collections::HashSet::new();
        for n in 0..512u64 {
            let xs = demux(3, &big(n)).unwrap();
            assert!(xs.iter().all(|x| *x < big(8)));
            assert_eq!(mux(&xs), big(n));
            seen.insert(xs);
        }
        assert_eq!(seen.len(), 512);
    }

    #[test]
    fn test_logarithmic_mux_layout() {
        assert_eq!(logarithmic_mux(&big(0), &big(0)).unwrap(), big(0));
        assert_eq!(logarithmic_mux(&big(0), &big(3)).unwrap(), big(7));
        assert_eq!(logarithmic_mux(&big(5), &big(2)).unwrap(), big(43));
        assert_eq!(logarithmic_demux(&big(43)), (big(5), big(2)));
        assert!(matches!(
            logarithmic_mux(&big(1), &(BigUint::from(u64::MAX) << 64usize)),
            Err(EnumerationError::ExponentTooLarge { .. })
        ));
        assert_eq!(
            logarithmic_mux(&big(0), &big(u64::MAX)),
            Err(EnumerationError::ExponentTooLarge { exponent: big(u64::MAX) })
        );
        assert!(logarithmic_mux(&big(0), &big(MAX_LOGARITHMIC_EXPONENT + 1)).is_err());
    }

    #[test]
    fn test_square_root_mux_first_codes() {
        let firsts: Vec<(BigUint, BigUint)> = (0..8).map(|n| square_root_demux(&big(n))).collect();
        assert_eq!(firsts[0], (big(0), big(0)));
        assert_eq!(firsts[3], (big(0), big(3)));
        assert_eq!(firsts[4], (big(1), big(0)));
        assert_eq!(firsts[7], (big(1), big(3)));
        assert_eq!(square_root_mux(&big(0), &big(0)), big(0));
    }

    #[test]
    fn test_bounds_cover_all_codes() {
        for x in 0..8u64 {
            for y in 0..32u64 {
                let pair = [big(x), big(y)];
                assert!(mux(&pair) < mux_bound(2, 5));
                assert!(square_root_mux(&big(x), &big(y)) < square_root_bound(3, 5));
                assert!(logarithmic_mux(&big(x), &big(y)).unwrap() < logarithmic_bound(3, 31));
            }
        }
    }
}
