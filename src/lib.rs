//! # Conjecture Exhaustive
//!
//! Lazy, exhaustive enumeration of test inputs for property-based testing.
//!
//! Every domain is a [`LazySeq`]: a re-entrant, possibly infinite sequence
//! that lists each value of its type exactly once, with small and simple
//! values near the front. Finite domains (`bool`, `i8`, `f16`, ...) end after
//! their last value; unbounded ones (big integers, strings) never do.
//! Multi-dimensional domains are combined fairly through the bijections in
//! [`bijection`], so no coordinate of a product is ever starved.

pub mod bijection;
pub mod cache;
pub mod config;
pub mod error;
pub mod floats;
pub mod ints;
pub mod lazy;
pub mod primes;
pub mod product;
pub mod providers;
pub mod strings;

// Re-export core types for easy access
pub use bijection::{demux, logarithmic_demux, logarithmic_mux, mux, square_root_demux, square_root_mux};
pub use cache::IndexedCache;
pub use config::{PairOrder, ProviderConfig, SpecialFloatOrder};
pub use error::{EnumerationError, EnumerationResult};
pub use floats::{floats_of, FloatDomain, FloatWidth};
pub use lazy::{Cursor, LazySeq};
pub use primes::PrimeSieve;
pub use product::{lexicographic, lists, lists_shortlex, pairs, triples, tuples};
pub use providers::{ExhaustiveProvider, Provider, RandomProvider};
