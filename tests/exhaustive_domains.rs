//! End-to-end checks of the exhaustive domains through the public API.

use conjecture_exhaustive::ints::{booleans, integers, naturals};
use conjecture_exhaustive::strings::ascii_characters;
use conjecture_exhaustive::{
    lexicographic, lists_shortlex, pairs, triples, tuples, ExhaustiveProvider, IndexedCache, LazySeq,
    Provider, ProviderConfig,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::rc::Rc;

#[test]
fn booleans_then_signed_bytes_through_a_cache() {
    assert_eq!(booleans().iter().collect::<Vec<_>>(), vec![false, true]);

    let bytes = integers::<i8>();
    let all: Vec<i8> = bytes.iter().collect();
    assert_eq!(all.len(), 256);
    assert_eq!(&all[..5], &[0, 1, -1, 2, -2]);
    assert_eq!(&all[253..], &[127, -127, -128]);
    assert_eq!(all.iter().collect::<HashSet<_>>().len(), 256);

    let mut cache = IndexedCache::new(&bytes);
    assert_eq!(cache.get(0), Some(&0));
    assert_eq!(cache.get(255), Some(&-128));
    assert_eq!(cache.get(256), None);
    assert_eq!(cache.is_last_seen(&-128), Some(true));
}

#[test]
fn interleave_does_not_starve_a_finite_input() {
    let finite = LazySeq::from_vec(vec![-1i64, -2, -3]);
    let infinite = LazySeq::iterate(|x: &i64| x + 1, 0);
    let first: Vec<i64> = LazySeq::interleave(vec![finite, infinite]).iter().take(6).collect();
    for x in [-1, -2, -3] {
        assert!(first.contains(&x));
    }
}

#[test]
fn products_of_finite_domains_are_exact() {
    let all: Vec<(u8, bool)> = pairs(&naturals::<u8>(), &booleans()).iter().collect();
    assert_eq!(all.len(), 512);
    assert_eq!(all.iter().collect::<HashSet<_>>().len(), 512);

    let digits = LazySeq::from_vec(vec![0u8, 1, 2, 3, 4]);
    let all: HashSet<(u8, bool, u8)> = triples(&digits, &booleans(), &digits).iter().collect();
    assert_eq!(all.len(), 50);
}

#[test]
fn tuples_compare_slot_by_slot() {
    let quads: Vec<[bool; 4]> = tuples::<bool, 4>(&booleans()).iter().collect();
    assert_eq!(quads.len(), 16);

    let by_value = |a: &bool, b: &bool| a.cmp(b);
    let slots: [&dyn Fn(&bool, &bool) -> Ordering; 4] = [&by_value; 4];
    let mut sorted = quads.clone();
    sorted.sort_by(|a, b| lexicographic(a, b, &slots));
    assert_eq!(sorted[0], [false; 4]);
    assert_eq!(sorted[15], [true; 4]);
}

#[test]
fn shortlex_strings_over_ascii_are_complete_per_length() {
    let pairs_of_chars = lists_shortlex(&ascii_characters())
        .iter()
        .skip(1 + 128)
        .take(128 * 128)
        .collect::<HashSet<Vec<char>>>();
    assert_eq!(pairs_of_chars.len(), 128 * 128);
    assert!(pairs_of_chars.iter().all(|list| list.len() == 2));
}

#[test]
fn exhaustive_provider_floats_cover_every_half() {
    let provider = ExhaustiveProvider::new(ProviderConfig::default()).unwrap();
    let halves: Vec<half::f16> = provider.f16s().iter().collect();
    assert_eq!(halves.iter().filter(|f| f.is_nan()).count(), 1);
    let bits: HashSet<u16> = halves.iter().map(|f| f.to_bits()).collect();
    for pattern in 0..=u16::MAX {
        if !half::f16::from_bits(pattern).is_nan() {
            assert!(bits.contains(&pattern), "missing {:#06x}", pattern);
        }
    }
}

fn counted(counter: Rc<Cell<usize>>) -> LazySeq<u32> {
    LazySeq::iterate(|x: &u32| x + 1, 0).map(move |x| {
        counter.set(counter.get() + 1);
        x
    })
}

proptest! {
    #[test]
    fn cache_pulls_each_position_once(indices in prop::collection::vec(0usize..200, 1..30)) {
        let counter = Rc::new(Cell::new(0));
        let mut cache = IndexedCache::new(&counted(Rc::clone(&counter)));
        let values = cache.get_many(&indices).unwrap();
        let expected: Vec<u32> = indices.iter().map(|&i| i as u32).collect();
        prop_assert_eq!(values, expected);
        let furthest = indices.iter().max().copied().unwrap_or(0);
        prop_assert_eq!(counter.get(), furthest + 1);

        let again = cache.get_many(&indices).unwrap();
        prop_assert_eq!(again.len(), indices.len());
        prop_assert_eq!(counter.get(), furthest + 1);
    }

    #[test]
    fn mask_selection_matches_positions(mask in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut cache = IndexedCache::new(&counted(Rc::new(Cell::new(0))));
        let selected = cache.select_by_mask(mask.clone()).unwrap();
        let expected: Vec<u32> = mask
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .map(|(i, _)| i as u32)
            .collect();
        prop_assert_eq!(selected, expected);
    }
}
