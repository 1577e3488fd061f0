//! # Lazy, re-entrant sequences
//!
//! A `LazySeq<T>` is a description of a possibly infinite sequence, not a
//! position inside one. Every call to [`LazySeq::cursor`] instantiates a fresh
//! [`Cursor`] starting at the first element, so two traversals of the same
//! sequence always observe the same elements and never interfere. All per-
//! traversal state lives in the cursor.
//!
//! Combinators build new descriptions out of old ones without evaluating
//! anything; elements are computed only when a cursor is pulled.
//!
//! Sequences are reference counted and deliberately not `Send`: evaluation is
//! single threaded and pull based.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::rc::Rc;


type Source<T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = T>>>;

pub struct LazySeq<T> {
    source: Source<T>,
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazySeq { .. }")
    }
}

/// Per-traversal state of a [`LazySeq`], with one element of lookahead.
pub struct Cursor<T> {
    inner: Box<dyn Iterator<Item = T>>,
    peeked: Option<Option<T>>,
}

impl<T: 'static> Cursor<T> {
    /// Once the source returns `None` the cursor stays finished.
    fn new(inner: Box<dyn Iterator<Item = T>>) -> Self {
        Cursor {
            inner: Box::new(inner.fuse()),
            peeked: None,
        }
    }
}

impl<T> Cursor<T> {
    /// Look at the next element without consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        let inner = &mut self.inner;
        self.peeked.get_or_insert_with(|| inner.next()).as_ref()
    }

    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.inner.next(),
        }
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("peeked", &self.peeked.is_some())
            .finish()
    }
}

impl<'a, T: 'static> IntoIterator for &'a LazySeq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

/// Remaining element count for `take`/`drop`. Counts that fit in a machine
/// word stay in one.
#[derive(Debug, Clone)]
enum Budget {
    Small(u64),
    Big(BigUint),
}

impl Budget {
    fn new(n: BigUint) -> Self {
        match n.to_u64() {
            Some(small) => Budget::Small(small),
            None => Budget::Big(n),
        }
    }

    fn try_spend(&mut self) -> bool {
        match self {
            Budget::Small(0) => false,
            Budget::Small(k) => {
                *k -= 1;
                true
            }
            Budget::Big(n) => {
                if n.is_zero() {
                    false
                } else {
                    *n -= 1u32;
                    true
                }
            }
        }
    }
}

struct Take<T> {
    inner: Cursor<T>,
    budget: Budget,
}

impl<T> Iterator for Take<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.budget.try_spend() {
            self.inner.next()
        } else {
            None
        }
    }
}

struct Skip<T> {
    inner: Cursor<T>,
    pending: Option<Budget>,
}

impl<T> Iterator for Skip<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(mut budget) = self.pending.take() {
            while budget.try_spend() {
                self.inner.next()?;
            }
        }
        self.inner.next()
    }
}

/// Round robin over several cursors, forgetting each one as it runs dry.
struct Interleave<T> {
    cursors: Vec<Cursor<T>>,
    turn: usize,
}

impl<T> Iterator for Interleave<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while !self.cursors.is_empty() {
            if self.turn >= self.cursors.len() {
                self.turn = 0;
            }
            match self.cursors[self.turn].next() {
                Some(x) => {
                    self.turn += 1;
                    return Some(x);
                }
                // The following cursor shifts into this slot and takes the turn.
                None => {
                    self.cursors.remove(self.turn);
                }
            }
        }
        None
    }
}

impl<T: 'static> LazySeq<T> {
    /// Build a sequence from a factory that produces a fresh iterator per traversal.
    pub fn new<I, F>(source: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        LazySeq {
            source: Rc::new(move || Box::new(source()) as Box<dyn Iterator<Item = T>>),
        }
    }

    /// Start an independent traversal at the first element.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new((self.source)())
    }

    pub fn iter(&self) -> Cursor<T> {
        self.cursor()
    }

    pub fn empty() -> Self {
        LazySeq::new(std::iter::empty)
    }

    pub fn once(x: T) -> Self
    where
        T: Clone,
    {
        LazySeq::new(move || std::iter::once(x.clone()))
    }

    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        let items = Rc::new(items);
        LazySeq::new(move || {
            let items = Rc::clone(&items);
            (0..items.len()).map(move |i| items[i].clone())
        })
    }

    pub fn repeat(x: T) -> Self
    where
        T: Clone,
    {
        LazySeq::new(move || std::iter::repeat(x.clone()))
    }

    /// `x0, f(x0), f(f(x0)), ...`
    pub fn iterate<F>(f: F, x0: T) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let f = Rc::new(f);
        LazySeq::new(move || {
            let f = Rc::clone(&f);
            std::iter::successors(Some(x0.clone()), move |x| Some(f(x)))
        })
    }

    /// Produce values while `step` returns `Some((value, next_seed))`.
    pub fn unfold<S, F>(step: F, seed: S) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        let step = Rc::new(step);
        LazySeq::new(move || {
            let step = Rc::clone(&step);
            let mut state = Some(seed.clone());
            std::iter::from_fn(move || {
                let (value, next) = step(state.take()?)?;
                state = Some(next);
                Some(value)
            })
        })
    }

    pub fn cons(head: T, tail: LazySeq<T>) -> Self
    where
        T: Clone,
    {
        LazySeq::new(move || std::iter::once(head.clone()).chain(tail.cursor()))
    }

    /// All of `self`, then all of `other`. Unreachable past an infinite `self`.
    pub fn concat(&self, other: &LazySeq<T>) -> Self {
        let (first, second) = (self.clone(), other.clone());
        LazySeq::new(move || first.cursor().chain(second.cursor()))
    }

    /// Flatten a sequence of sequences, passing over empty ones as they come up.
    pub fn concat_all(seqs: LazySeq<LazySeq<T>>) -> Self {
        LazySeq::new(move || seqs.cursor().flat_map(|seq| seq.cursor()))
    }

    /// Take one element from each live input in turn. Exhausted inputs drop
    /// out of the rotation; the result ends when every input has.
    pub fn interleave(seqs: Vec<LazySeq<T>>) -> Self {
        let seqs = Rc::new(seqs);
        LazySeq::new(move || Interleave {
            cursors: seqs.iter().map(LazySeq::cursor).collect(),
            turn: 0,
        })
    }

    pub fn map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let seq = self.clone();
        let f = Rc::new(f);
        LazySeq::new(move || {
            let f = Rc::clone(&f);
            seq.cursor().map(move |x| f(x))
        })
    }

    pub fn filter<P>(&self, pred: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let seq = self.clone();
        let pred = Rc::new(pred);
        LazySeq::new(move || {
            let pred = Rc::clone(&pred);
            seq.cursor().filter(move |x| pred(x))
        })
    }

    pub fn filter_map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        let seq = self.clone();
        let f = Rc::new(f);
        LazySeq::new(move || {
            let f = Rc::clone(&f);
            seq.cursor().filter_map(move |x| f(x))
        })
    }

    /// Pairs elements positionally, stopping at the end of the shorter input.
    pub fn zip<U: 'static>(&self, other: &LazySeq<U>) -> LazySeq<(T, U)> {
        let (left, right) = (self.clone(), other.clone());
        LazySeq::new(move || left.cursor().zip(right.cursor()))
    }

    pub fn take<N: Into<BigUint>>(&self, n: N) -> Self {
        let seq = self.clone();
        let budget = Budget::new(n.into());
        LazySeq::new(move || Take {
            inner: seq.cursor(),
            budget: budget.clone(),
        })
    }

    pub fn drop<N: Into<BigUint>>(&self, n: N) -> Self {
        let seq = self.clone();
        let budget = Budget::new(n.into());
        LazySeq::new(move || Skip {
            inner: seq.cursor(),
            pending: Some(budget.clone()),
        })
    }

    /// Finite sequences only: never returns on an infinite input.
    pub fn reversed(&self) -> Self {
        let seq = self.clone();
        LazySeq::new(move || {
            let mut items: Vec<T> = seq.cursor().collect();
            items.reverse();
            items.into_iter()
        })
    }

    /// Finite sequences only: never returns on an infinite input.
    pub fn len_finite(&self) -> usize {
        self.cursor().count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cursor().has_next()
    }
}
