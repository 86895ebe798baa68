//! # riffle-func: Core capability traits for `Riffle`
//!
//! This crate contains the four functional roles everything else in the
//! system composes from:
//! - Value production ([`ValueSource`], [`Constant`])
//! - Boolean testing ([`Predicate`], [`BiPredicate`] and their combinators)
//! - Value transformation ([`Transformer`], [`UnaryTransformer`], [`Identity`])
//! - Effectful consumption ([`Sink`], [`BiSink`] and their sequencing)
//!
//! Each role is a single-method trait with a blanket implementation for the
//! matching closure shape, so plain closures work everywhere a role is
//! expected. Combinators (`and`, `or`, `negate`, `and_then`, `compose`) are
//! wrapper values holding the composed operands; composition order is exactly
//! the order written at the call site.

pub mod predicate;
pub mod sink;
pub mod source;
pub mod transform;

pub use predicate::{And, BiAnd, BiNegate, BiOr, BiPredicate, Negate, Or, Predicate};
pub use sink::{BiChained, BiSink, Chained, Sink};
pub use source::{Constant, ValueSource};
pub use transform::{AndThen, Compose, Identity, Transformer, UnaryTransformer};
