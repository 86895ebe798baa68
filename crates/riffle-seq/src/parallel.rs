//! Rayon-backed parallel evaluation.
//!
//! Parallel operations partition the sequence's elements across worker
//! threads. Element *processing* order across workers is not guaranteed;
//! [`par_map`](Sequence::par_map) and [`par_filter`](Sequence::par_filter)
//! reassemble their output in source order regardless.
//!
//! The same Unconsumed/Consumed lifecycle applies. No cancellation or
//! timeout semantics: a started operation runs to completion or propagates
//! the first panic from user code.

use rayon::prelude::*;
use riffle_func::{Predicate, Transformer};
use tracing::trace;

use crate::sequence::{Sequence, SequenceError};

impl<T: Send + 'static> Sequence<T> {
    /// Parallel element-wise transformation.
    ///
    /// Output order matches source order even though elements are processed
    /// out of order across workers. Eager: elements are materialized before
    /// partitioning, and the transformer has run for every element by the
    /// time this returns.
    pub fn par_map<R, F>(mut self, transformer: F) -> Result<Sequence<R>, SequenceError>
    where
        R: Send + 'static,
        F: Transformer<T, R> + Send + Sync + 'static,
    {
        let items: Vec<T> = self.take_chain()?.collect();

        let mapped: Vec<R> = items
            .into_par_iter()
            .map(|value| transformer.transform(value))
            .collect();

        trace!(elements = mapped.len(), "sequence mapped in parallel");
        Ok(Sequence::of(mapped))
    }

    /// Parallel filtering. Output order matches source order.
    pub fn par_filter<P>(mut self, predicate: P) -> Result<Self, SequenceError>
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        let items: Vec<T> = self.take_chain()?.collect();

        let kept: Vec<T> = items
            .into_par_iter()
            .filter(|value| predicate.evaluate(value))
            .collect();

        trace!(elements = kept.len(), "sequence filtered in parallel");
        Ok(Self::of(kept))
    }

    /// Applies `action` to every element across worker threads.
    ///
    /// Unordered: no visiting order is guaranteed, so `action` must not
    /// depend on one.
    pub fn par_for_each<F>(&mut self, action: F) -> Result<(), SequenceError>
    where
        F: Fn(&T) + Send + Sync,
    {
        let items: Vec<T> = self.take_chain()?.collect();
        let elements = items.len();

        items.into_par_iter().for_each(|value| action(&value));

        trace!(elements, "sequence consumed by par_for_each");
        Ok(())
    }

    /// Parallel fold: each worker folds its partition from `identity` with
    /// `accumulate`, then partials merge pairwise with `combine`.
    ///
    /// `combine` must be associative and commutative, and `identity` must be
    /// its identity element. Violating this yields an unspecified (but safe)
    /// result, not an error.
    pub fn par_reduce<R, F, G>(
        &mut self,
        identity: R,
        accumulate: F,
        combine: G,
    ) -> Result<R, SequenceError>
    where
        R: Clone + Send,
        F: Fn(R, T) -> R + Send + Sync,
        G: Fn(R, R) -> R + Send + Sync,
    {
        let items: Vec<T> = self.take_chain()?.collect();
        let elements = items.len();

        let reduced = items
            .into_par_iter()
            .fold(|| identity.clone(), |acc, value| accumulate(acc, value))
            .reduce(|| identity.clone(), |a, b| combine(a, b));

        trace!(elements, "sequence consumed by par_reduce");
        Ok(reduced)
    }
}
