// Tests for the floats module
use super::*;
use std::collections::HashSet;

fn raw<F: FloatDomain>(values: &[F]) -> Vec<u64> {
    values.iter().map(|f| f.to_raw_bits()).collect()
}

// Exact 2^e for normal exponents.
fn pow2(e: i32) -> f64 {
    assert!((-1022..=1023).contains(&e));
    f64::from_bits(((e + 1023) as u64) << 52)
}

#[test]
fn test_width_constants() {
    assert_eq!(FloatWidth::Width64.min_odd_exponent(), -1074);
    assert_eq!(FloatWidth::Width32.min_odd_exponent(), -149);
    assert_eq!(FloatWidth::Width16.min_odd_exponent(), -24);
    assert_eq!(FloatWidth::Width32.max_odd_exponent(), 127);
    assert_eq!(FloatWidth::Width16.sign_mask(), 0x8000);
}

#[test]
fn test_decomposition_of_known_values() {
    assert_eq!(mantissa_and_exponent(1.0f64), Some((1, 0)));
    assert_eq!(mantissa_and_exponent(-6.0f64), Some((-3, 1)));
    assert_eq!(mantissa_and_exponent(0.375f32), Some((3, -3)));
    assert_eq!(mantissa_and_exponent(f64::from_bits(1)), Some((1, -1074)));
    assert_eq!(mantissa_and_exponent(f32::MAX), Some(((1 << 24) - 1, 104)));
    assert_eq!(mantissa_and_exponent(0.0f64), None);
    assert_eq!(mantissa_and_exponent(-0.0f64), None);
    assert_eq!(mantissa_and_exponent(f64::NAN), None);
    assert_eq!(mantissa_and_exponent(f32::NEG_INFINITY), None);
}

#[test]
fn test_unrepresentable_pairs_are_rejected() {
    assert_eq!(from_mantissa_and_exponent::<f64>(2, 0), None);
    assert_eq!(from_mantissa_and_exponent::<f64>(1, -1075), None);
    assert_eq!(from_mantissa_and_exponent::<f64>(1, 1024), None);
    assert_eq!(from_mantissa_and_exponent::<f32>(3, 127), None);
    assert_eq!(from_mantissa_and_exponent::<f32>((1 << 24) + 1, 0), None);
    assert_eq!(from_mantissa_and_exponent::<f64>(1, i32::MAX), None);
    assert_eq!(from_mantissa_and_exponent::<f32>(3, i32::MAX - 1), None);
    assert_eq!(from_mantissa_and_exponent::<f16>(-7, i32::MIN), None);
    assert_eq!(from_mantissa_and_exponent::<f64>(1, 1023), Some(pow2(1023)));
    assert_eq!(from_mantissa_and_exponent::<f32>(-5, -1), Some(-2.5f32));
    assert_eq!(
        from_mantissa_and_exponent::<f16>(1, -24),
        Some(f16::from_bits(1))
    );
}

#[test]
fn test_decomposition_roundtrips_across_every_f16() {
    for bits in 0..=u16::MAX {
        let f = f16::from_bits(bits);
        match mantissa_and_exponent(f) {
            Some((m, e)) => {
                assert!(m % 2 != 0);
                assert_eq!(from_mantissa_and_exponent::<f16>(m, e).map(f16::to_bits), Some(bits));
                assert_eq!(m as f64 * pow2(e), f.to_f64());
            }
            None => assert!(f.is_nan() || f.is_infinite() || f.to_f64() == 0.0),
        }
    }
}

#[test]
fn test_exponents_and_mantissas_are_bounded() {
    let exps: Vec<i32> = exponents::<f16>().iter().collect();
    assert_eq!(&exps[..5], &[0, 1, -1, 2, -2]);
    assert_eq!(exps.len(), 40);
    assert_eq!(exps.iter().min(), Some(&-24));
    assert_eq!(exps.iter().max(), Some(&15));

    let mantissas = odd_mantissas::<f16>();
    assert_eq!(mantissas.len_finite(), 1024);
    assert_eq!(mantissas.iter().last(), Some(2047));
}

#[test]
fn test_complete_f16_domain() {
    let all: Vec<f16> = floats_of::<f16>(PairOrder::SquareRoot, SpecialFloatOrder::Complexity)
        .iter()
        .collect();
    let nan_count = all.iter().filter(|f| f.is_nan()).count();
    assert_eq!(nan_count, 1);

    let distinct: HashSet<u16> = all.iter().map(|f| f.to_bits()).collect();
    assert_eq!(distinct.len(), all.len());

    let non_nan = (0..=u16::MAX).filter(|&b| !f16::from_bits(b).is_nan()).count();
    assert_eq!(all.len(), non_nan + 1);
}

#[test]
fn test_linear_pairing_is_complete_for_f16() {
    let positives: HashSet<u64> = positive_finite_floats::<f16>(PairOrder::Linear)
        .iter()
        .map(FloatDomain::to_raw_bits)
        .collect();
    assert_eq!(positives.len(), 0x7C00 - 1);
}

#[test]
fn test_logarithmic_pairing_favours_mantissas() {
    let first: Vec<f32> = positive_finite_floats::<f32>(PairOrder::Logarithmic)
        .iter()
        .take(4)
        .collect();
    // codes 0..4 split into (mantissa index, exponent index) (0,0) (0,1) (1,0) (0,2)
    assert_eq!(first, vec![1.0, 2.0, 3.0, 0.5]);
}

#[test]
fn test_special_values_come_first() {
    let first: Vec<f32> = floats_of::<f32>(PairOrder::SquareRoot, SpecialFloatOrder::Complexity)
        .iter()
        .take(5)
        .collect();
    assert!(first[0].is_nan());
    assert_eq!(
        raw(&first[1..]),
        raw(&[f32::INFINITY, f32::NEG_INFINITY, 0.0, -0.0])
    );

    let ascending = special_values::<f64>(SpecialFloatOrder::Ascending);
    assert_eq!(raw(&ascending[..2]), raw(&[f64::NEG_INFINITY, -0.0]));
    assert!(ascending[2].is_nan());
    assert_eq!(raw(&ascending[3..]), raw(&[0.0, f64::INFINITY]));
}

#[test]
fn test_doubles_start_with_simple_magnitudes() {
    let first: Vec<f64> = floats_of::<f64>(PairOrder::SquareRoot, SpecialFloatOrder::Complexity)
        .iter()
        .skip(5)
        .take(10)
        .collect();
    assert_eq!(first, vec![1.0, -1.0, 3.0, -3.0, 5.0, -5.0, 7.0, -7.0, 2.0, -2.0]);
}

#[test]
fn test_f32_prefix_is_distinct_and_exact() {
    let prefix: Vec<f32> = floats_of::<f32>(PairOrder::SquareRoot, SpecialFloatOrder::Complexity)
        .iter()
        .take(20_000)
        .collect();
    let distinct: HashSet<u32> = prefix.iter().map(|f| f.to_bits()).collect();
    assert_eq!(distinct.len(), prefix.len());
    for f in prefix.iter().filter(|f| f.is_finite() && **f != 0.0) {
        let (m, e) = mantissa_and_exponent(*f).unwrap();
        assert_eq!(m as f64 * pow2(e), *f as f64);
    }
}
