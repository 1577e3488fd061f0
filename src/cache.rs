//! Memoizing random access over a single traversal of a [`LazySeq`].
//!
//! An `IndexedCache` owns one cursor and an append-only buffer of everything
//! that cursor has produced. Each position is pulled from the cursor at most
//! once over the lifetime of the cache, however many lookups reference it.

use crate::lazy::{Cursor, LazySeq};

pub struct IndexedCache<T> {
    cursor: Cursor<T>,
    buffer: Vec<T>,
    /// Number of leading positions forgotten by `clear_cache`
    offset: usize,
    last_seen: Option<T>,
    exhausted: bool,
    pulled: usize,
}

impl<T: Clone + 'static> IndexedCache<T> {
    pub fn new(seq: &LazySeq<T>) -> Self {
        IndexedCache {
            cursor: seq.cursor(),
            buffer: Vec::new(),
            offset: 0,
            last_seen: None,
            exhausted: false,
            pulled: 0,
        }
    }

    /// Pull one more element into the buffer. Returns false once the cursor is dry.
    fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        match self.cursor.next() {
            Some(x) => {
                self.pulled += 1;
                self.last_seen = Some(x.clone());
                self.buffer.push(x);
                true
            }
            None => {
                log::debug!("Underlying sequence exhausted after {} elements", self.pulled);
                self.exhausted = true;
                false
            }
        }
    }

    /// Memoize everything through position `i`. False if the sequence ends first.
    fn fill_through(&mut self, i: usize) -> bool {
        while self.pulled <= i {
            if !self.advance() {
                return false;
            }
        }
        true
    }

    /// The element at position `i`, or `None` if the sequence ends before it
    /// or the position was discarded by [`clear_cache`](Self::clear_cache).
    pub fn get(&mut self, i: usize) -> Option<&T> {
        if !self.fill_through(i) || i < self.offset {
            return None;
        }
        self.buffer.get(i - self.offset)
    }

    /// All of `indices`, in the order given, or `None` if any one is absent.
    pub fn get_many(&mut self, indices: &[usize]) -> Option<Vec<T>> {
        let mut result = Vec::with_capacity(indices.len());
        for &i in indices {
            result.push(self.get(i)?.clone());
        }
        Some(result)
    }

    /// Elements at every position whose mask bit is set. `None` if a set bit
    /// falls past the end of the sequence; trailing clear bits are ignored.
    pub fn select_by_mask<I: IntoIterator<Item = bool>>(&mut self, bits: I) -> Option<Vec<T>> {
        let mut result = Vec::new();
        for (i, bit) in bits.into_iter().enumerate() {
            if bit {
                result.push(self.get(i)?.clone());
            }
        }
        Some(result)
    }

    /// `None` while more elements may still come; otherwise whether the final
    /// element equals `candidate`.
    pub fn is_last_seen(&self, candidate: &T) -> Option<bool>
    where
        T: PartialEq,
    {
        if !self.exhausted {
            return None;
        }
        Some(self.last_seen.as_ref() == Some(candidate))
    }

    /// Drain the sequence and return its length. Never returns on an infinite sequence.
    pub fn size(&mut self) -> usize {
        while self.advance() {}
        self.pulled
    }

    /// Forget the buffer. The cursor keeps its position, so positions already
    /// passed can no longer be read.
    pub fn clear_cache(&mut self) {
        log::debug!("Clearing {} memoized elements", self.buffer.len());
        self.offset += self.buffer.len();
        self.buffer.clear();
    }

    /// Number of elements pulled from the underlying cursor so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Length of the sequence if its end has been observed.
    pub fn known_size(&self) -> Option<usize> {
        if self.exhausted {
            Some(self.pulled)
        } else {
            None
        }
    }
}
