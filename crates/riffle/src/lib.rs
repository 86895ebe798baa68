//! # Riffle
//!
//! Composable functional abstractions and lazy, single-pass sequence
//! pipelines.
//!
//! Riffle provides four single-method capability traits — any matching
//! closure implements them — and a [`Sequence`] pipeline that chains them
//! lazily:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Riffle                             │
//! │  ┌────────────┐   ┌─────────────────────┐   ┌─────────────┐  │
//! │  │ ValueSource│ → │      Sequence       │ → │    Sink     │  │
//! │  │ (produce)  │   │ map/filter (lazy)   │   │ (consume)   │  │
//! │  └────────────┘   │ reduce/collect      │   └─────────────┘  │
//! │                   └─────────────────────┘                    │
//! │        Predicate (test)      Transformer (map)               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use riffle::{Predicate, Sequence};
//!
//! let even = |n: &i32| n % 2 == 0;
//! let small = |n: &i32| *n < 10;
//!
//! let total = Sequence::of(1..=20)
//!     .filter(even.and(small))?
//!     .map(|n: i32| n * n)?
//!     .reduce(0, |acc, n| acc + n)?;
//!
//! assert_eq!(total, 4 + 16 + 36 + 64);
//! # Ok::<(), riffle::SequenceError>(())
//! ```
//!
//! # Lifecycle
//!
//! A sequence is single-pass: intermediate operations derive a new lazy
//! sequence, and the first terminal operation consumes the instance. Any
//! later operation fails with [`SequenceError::AlreadyConsumed`] — never a
//! silent empty result.
//!
//! ```
//! use riffle::{Sequence, SequenceError};
//!
//! let mut seq = Sequence::of(vec![1, 2, 3]);
//! assert_eq!(seq.collect()?, vec![1, 2, 3]);
//! assert_eq!(seq.collect(), Err(SequenceError::AlreadyConsumed));
//! # Ok::<(), riffle::SequenceError>(())
//! ```
//!
//! # Modules
//!
//! - **Roles**: [`ValueSource`], [`Predicate`], [`Transformer`], [`Sink`]
//!   (and the two-argument [`BiPredicate`], [`BiSink`])
//! - **Pipeline**: [`Sequence`], [`SequenceError`]
//! - **Parallel**: `par_map` / `par_filter` / `par_for_each` / `par_reduce`
//!   on [`Sequence`], behind the `parallel` feature

// Functional roles
pub use riffle_func::{
    And, AndThen, BiAnd, BiChained, BiNegate, BiOr, BiPredicate, BiSink, Chained, Compose,
    Constant, Identity, Negate, Or, Predicate, Sink, Transformer, UnaryTransformer, ValueSource,
};

// Sequence pipeline
pub use riffle_seq::{Sequence, SequenceError};
