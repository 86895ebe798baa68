//! # riffle-seq: Lazy sequence pipeline for `Riffle`
//!
//! A [`Sequence`] is a lazily evaluated, single-pass, order-preserving
//! pipeline over elements. Intermediate operations (`map`, `filter`) extend
//! the deferred chain without evaluating anything; a terminal operation
//! (`for_each`, `reduce`, `collect`, `count`) evaluates the chain exactly
//! once, in order, and consumes the sequence.
//!
//! ## Lifecycle
//!
//! Every sequence is an explicit state-tagged value:
//!
//! ```text
//! Unconsumed --map/filter--> new derived Unconsumed sequence
//! Unconsumed --terminal----> Consumed
//! Consumed   --any op------> Err(SequenceError::AlreadyConsumed)
//! ```
//!
//! Re-consuming never silently yields an empty result.
//!
//! ## Example
//!
//! ```
//! use riffle_seq::Sequence;
//!
//! let total = Sequence::of(1..=9)
//!     .filter(|n: &i32| n % 2 == 1)?
//!     .map(|n: i32| n * n)?
//!     .reduce(0, |acc, n| acc + n)?;
//!
//! assert_eq!(total, 165);
//! # Ok::<(), riffle_seq::SequenceError>(())
//! ```

pub mod sequence;

#[cfg(feature = "parallel")]
pub mod parallel;


pub use sequence::{Sequence, SequenceError};
