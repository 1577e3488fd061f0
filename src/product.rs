//! # Fair products of lazy sequences
//!
//! A product of several sequences is enumerated by walking the codes
//! `0, 1, 2, ...`, splitting each code into one index per coordinate with a
//! bijection from [`crate::bijection`], and looking each index up in a
//! memoizing [`IndexedCache`]. Codes naming an index past the end of a finite
//! coordinate are skipped, so infinite coordinates are never starved and
//! finite ones are never over-read.
//!
//! When every coordinate turns out finite the product ends after exactly the
//! product of their sizes; an empty coordinate ends it immediately.

use crate::bijection::{demux, logarithmic_demux, square_root_demux};
use crate::cache::IndexedCache;
use crate::lazy::LazySeq;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::rc::Rc;

type Split = Rc<dyn Fn(&BigUint) -> Option<Vec<BigUint>>>;

/// The coordinates of a product.
trait Dimensions {
    type Item;

    /// The tuple at `indices`, or `None` if any index is past its coordinate's end.
    fn fetch(&mut self, indices: &[BigUint]) -> Option<Self::Item>;

    /// Number of tuples in the product, once that is known.
    fn known_total(&self) -> Option<BigUint>;
}

fn known_product(sizes: &[Option<usize>]) -> Option<BigUint> {
    if sizes.iter().any(|size| *size == Some(0)) {
        return Some(BigUint::zero());
    }
    sizes
        .iter()
        .try_fold(BigUint::one(), |total, size| size.map(|size| total * size))
}

fn lookup<T: Clone + 'static>(cache: &mut IndexedCache<T>, index: &BigUint) -> Option<T> {
    cache.get(index.to_usize()?).cloned()
}

struct Two<A, B>(IndexedCache<A>, IndexedCache<B>);

impl<A: Clone + 'static, B: Clone + 'static> Dimensions for Two<A, B> {
    type Item = (A, B);

    fn fetch(&mut self, indices: &[BigUint]) -> Option<(A, B)> {
        let a = lookup(&mut self.0, &indices[0])?;
        let b = lookup(&mut self.1, &indices[1])?;
        Some((a, b))
    }

    fn known_total(&self) -> Option<BigUint> {
        known_product(&[self.0.known_size(), self.1.known_size()])
    }
}

struct Three<A, B, C>(IndexedCache<A>, IndexedCache<B>, IndexedCache<C>);

impl<A: Clone + 'static, B: Clone + 'static, C: Clone + 'static> Dimensions for Three<A, B, C> {
    type Item = (A, B, C);

    fn fetch(&mut self, indices: &[BigUint]) -> Option<(A, B, C)> {
        let a = lookup(&mut self.0, &indices[0])?;
        let b = lookup(&mut self.1, &indices[1])?;
        let c = lookup(&mut self.2, &indices[2])?;
        Some((a, b, c))
    }

    fn known_total(&self) -> Option<BigUint> {
        known_product(&[self.0.known_size(), self.1.known_size(), self.2.known_size()])
    }
}

/// `arity` coordinates drawn from one sequence through a single cache.
struct Repeated<T> {
    cache: IndexedCache<T>,
    arity: usize,
}

impl<T: Clone + 'static> Dimensions for Repeated<T> {
    type Item = Vec<T>;

    fn fetch(&mut self, indices: &[BigUint]) -> Option<Vec<T>> {
        indices.iter().map(|i| lookup(&mut self.cache, i)).collect()
    }

    fn known_total(&self) -> Option<BigUint> {
        if self.arity == 0 {
            return Some(BigUint::one());
        }
        known_product(&vec![self.cache.known_size(); self.arity])
    }
}

struct Product<D> {
    dims: D,
    split: Split,
    code: BigUint,
    emitted: BigUint,
}

impl<D: Dimensions> Iterator for Product<D> {
    type Item = D::Item;

    fn next(&mut self) -> Option<D::Item> {
        loop {
            if let Some(total) = self.dims.known_total() {
                if self.emitted >= total {
                    log::debug!("Product complete after {} tuples at code {}", total, self.code);
                    return None;
                }
            }
            let indices = (self.split)(&self.code);
            self.code += 1u32;
            if let Some(item) = indices.and_then(|indices| self.dims.fetch(&indices)) {
                self.emitted += 1u32;
                return Some(item);
            }
        }
    }
}

fn product<D, F>(make_dims: F, split: Split) -> LazySeq<D::Item>
where
    D: Dimensions + 'static,
    D::Item: 'static,
    F: Fn() -> D + 'static,
{
    LazySeq::new(move || Product {
        dims: make_dims(),
        split: Rc::clone(&split),
        code: BigUint::zero(),
        emitted: BigUint::zero(),
    })
}

fn linear_split(size: usize) -> Split {
    Rc::new(move |n: &BigUint| demux(size, n).ok())
}

fn square_root_split() -> Split {
    Rc::new(|n: &BigUint| {
        let (x, y) = square_root_demux(n);
        Some(vec![x, y])
    })
}

fn logarithmic_split() -> Split {
    Rc::new(|n: &BigUint| {
        let (x, y) = logarithmic_demux(n);
        Some(vec![x, y])
    })
}

fn two<A, B>(a: &LazySeq<A>, b: &LazySeq<B>, split: Split) -> LazySeq<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let (a, b) = (a.clone(), b.clone());
    product(move || Two(IndexedCache::new(&a), IndexedCache::new(&b)), split)
}

/// All pairs, both coordinates growing at the same rate.
pub fn pairs<A, B>(a: &LazySeq<A>, b: &LazySeq<B>) -> LazySeq<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    two(a, b, linear_split(2))
}

/// All pairs, the first coordinate growing like the square root of the second.
pub fn pairs_square_root<A, B>(a: &LazySeq<A>, b: &LazySeq<B>) -> LazySeq<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    two(a, b, square_root_split())
}

/// All pairs, the second coordinate growing like the logarithm of the first.
pub fn pairs_logarithmic<A, B>(a: &LazySeq<A>, b: &LazySeq<B>) -> LazySeq<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    two(a, b, logarithmic_split())
}

pub fn triples<A, B, C>(a: &LazySeq<A>, b: &LazySeq<B>, c: &LazySeq<C>) -> LazySeq<(A, B, C)>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let (a, b, c) = (a.clone(), b.clone(), c.clone());
    product(
        move || Three(IndexedCache::new(&a), IndexedCache::new(&b), IndexedCache::new(&c)),
        linear_split(3),
    )
}

/// Every list of exactly `length` elements of `xs`.
pub fn lists_of_length<T: Clone + 'static>(length: usize, xs: &LazySeq<T>) -> LazySeq<Vec<T>> {
    let xs = xs.clone();
    product(
        move || Repeated {
            cache: IndexedCache::new(&xs),
            arity: length,
        },
        linear_split(length),
    )
}

/// Every fixed-size array of elements of `xs`.
pub fn tuples<T: Clone + 'static, const N: usize>(xs: &LazySeq<T>) -> LazySeq<[T; N]> {
    lists_of_length(N, xs).filter_map(|list| <[T; N]>::try_from(list).ok())
}

struct Lists<T> {
    cache: IndexedCache<T>,
    code: BigUint,
    started: bool,
}

impl<T: Clone + 'static> Iterator for Lists<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(Vec::new());
        }
        loop {
            if self.cache.known_size() == Some(0) {
                return None;
            }
            let (index_code, shorter) = logarithmic_demux(&self.code);
            self.code += 1u32;
            let length = shorter.to_usize()? + 1;
            let list: Option<Vec<T>> = demux(length, &index_code)
                .ok()?
                .iter()
                .map(|i| lookup(&mut self.cache, i))
                .collect();
            if list.is_some() {
                return list;
            }
        }
    }
}

/// Every finite list of elements of `xs`, shortest lists dominating early.
///
/// The empty list comes first. Each later code is split logarithmically into
/// an index code and a length, so the share of codes spent on lists of length
/// `L` halves with every step up in `L`. Over a small finite `xs` most codes
/// name a missing element and are skipped; prefer [`lists_shortlex`] there.
pub fn lists<T: Clone + 'static>(xs: &LazySeq<T>) -> LazySeq<Vec<T>> {
    let xs = xs.clone();
    LazySeq::new(move || Lists {
        cache: IndexedCache::new(&xs),
        code: BigUint::zero(),
        started: false,
    })
}

/// Lists of one length over a finite pool in lexicographic index order.
struct Odometer<T> {
    pool: Rc<Vec<T>>,
    digits: Option<Vec<usize>>,
}

impl<T: Clone> Iterator for Odometer<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let digits = self.digits.as_mut()?;
        let item = digits.iter().map(|&d| self.pool[d].clone()).collect();
        let mut position = digits.len();
        loop {
            if position == 0 {
                self.digits = None;
                break;
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < self.pool.len() {
                break;
            }
            digits[position] = 0;
        }
        Some(item)
    }
}

/// Every list over a finite `xs`, by length and then lexicographically.
pub fn lists_shortlex<T: Clone + 'static>(xs: &LazySeq<T>) -> LazySeq<Vec<T>> {
    let xs = xs.clone();
    LazySeq::new(move || -> Box<dyn Iterator<Item = Vec<T>>> {
        let pool: Rc<Vec<T>> = Rc::new(xs.iter().collect());
        if pool.is_empty() {
            return Box::new(std::iter::once(Vec::new()));
        }
        Box::new((0usize..).flat_map(move |length| Odometer {
            pool: Rc::clone(&pool),
            digits: Some(vec![0; length]),
        }))
    })
}

/// Three-way comparison of two products, slot by slot, with one comparator per slot.
pub fn lexicographic<T, const N: usize>(
    a: &[T; N],
    b: &[T; N],
    slots: &[&dyn Fn(&T, &T) -> Ordering; N],
) -> Ordering {
    a.iter()
        .zip(b.iter())
        .zip(slots.iter())
        .map(|((x, y), compare)| compare(x, y))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
