//! The sequence pipeline.
//!
//! State transitions are done by taking ownership: intermediate operations
//! move the deferred chain into a new derived sequence, terminal operations
//! move it out of the instance and leave the `Consumed` tag behind.

use std::fmt;

use riffle_func::{Predicate, Sink, Transformer, ValueSource};
use tracing::trace;

// ============================================================================
// Lifecycle
// ============================================================================

/// The deferred element chain, or the tombstone left by a terminal operation.
enum Stage<T> {
    /// Holds the not-yet-evaluated element chain.
    Unconsumed(Box<dyn Iterator<Item = T>>),
    /// A terminal operation has evaluated this sequence.
    Consumed,
}

// ============================================================================
// Sequence
// ============================================================================

/// A lazily evaluated, single-pass, ordered pipeline of elements.
///
/// Intermediate operations ([`map`](Sequence::map), [`filter`](Sequence::filter))
/// produce a new derived sequence without evaluating any element. Terminal
/// operations ([`for_each`](Sequence::for_each), [`reduce`](Sequence::reduce),
/// [`collect`](Sequence::collect), [`count`](Sequence::count)) evaluate the
/// chain exactly once, in order, and leave the instance `Consumed`. Every
/// operation on a consumed instance fails with
/// [`SequenceError::AlreadyConsumed`].
///
/// Errors raised inside user transformers, predicates, or sinks propagate as
/// panics and abort the remainder of that terminal call; no partial results
/// are returned.
pub struct Sequence<T> {
    state: Stage<T>,
}

impl<T: 'static> Sequence<T> {
    fn from_chain(chain: Box<dyn Iterator<Item = T>>) -> Self {
        Self {
            state: Stage::Unconsumed(chain),
        }
    }

    /// Creates a sequence over the given values, in order.
    ///
    /// Accepts literal arrays, ranges, and any ordered collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use riffle_seq::Sequence;
    ///
    /// let names = Sequence::of(["ada", "grace", "edsger"]).collect()?;
    /// assert_eq!(names, vec!["ada", "grace", "edsger"]);
    /// # Ok::<(), riffle_seq::SequenceError>(())
    /// ```
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_chain(Box::new(values.into_iter()))
    }

    /// Creates a sequence with no elements.
    pub fn empty() -> Self {
        Self::from_chain(Box::new(std::iter::empty()))
    }

    /// Creates a sequence by drawing exactly `count` values from a source.
    ///
    /// The bound is required: finiteness is guaranteed by construction, so a
    /// generator-backed sequence can never evaluate without terminating.
    ///
    /// # Examples
    ///
    /// ```
    /// use riffle_seq::Sequence;
    ///
    /// let mut next = 0;
    /// let mut naturals = Sequence::generate(
    ///     move || {
    ///         next += 1;
    ///         next
    ///     },
    ///     4,
    /// );
    /// assert_eq!(naturals.collect()?, vec![1, 2, 3, 4]);
    /// # Ok::<(), riffle_seq::SequenceError>(())
    /// ```
    pub fn generate<S>(mut source: S, count: usize) -> Self
    where
        S: ValueSource<T> + 'static,
    {
        Self::from_chain(Box::new(
            std::iter::repeat_with(move || source.produce()).take(count),
        ))
    }

    /// Moves the chain out, leaving the `Consumed` tag behind.
    pub(crate) fn take_chain(&mut self) -> Result<Box<dyn Iterator<Item = T>>, SequenceError> {
        match std::mem::replace(&mut self.state, Stage::Consumed) {
            Stage::Unconsumed(chain) => Ok(chain),
            Stage::Consumed => Err(SequenceError::AlreadyConsumed),
        }
    }

    // ========================================================================
    // Intermediate operations
    // ========================================================================

    /// Element-wise transformation. Preserves order and count.
    ///
    /// Lazy: the transformer does not run until a terminal operation
    /// evaluates the derived sequence.
    pub fn map<R, F>(mut self, transformer: F) -> Result<Sequence<R>, SequenceError>
    where
        R: 'static,
        F: Transformer<T, R> + 'static,
    {
        let chain = self.take_chain()?;
        Ok(Sequence::from_chain(Box::new(
            chain.map(move |value| transformer.transform(value)),
        )))
    }

    /// Keeps only elements matching the predicate. Preserves order; the
    /// element count never grows.
    ///
    /// Lazy: the predicate does not run until a terminal operation evaluates
    /// the derived sequence.
    pub fn filter<P>(mut self, predicate: P) -> Result<Self, SequenceError>
    where
        P: Predicate<T> + 'static,
    {
        let chain = self.take_chain()?;
        Ok(Self::from_chain(Box::new(
            chain.filter(move |value| predicate.evaluate(value)),
        )))
    }

    // ========================================================================
    // Terminal operations
    // ========================================================================

    /// Evaluates the sequence, applying the sink to each surviving element
    /// in order.
    pub fn for_each<S>(&mut self, mut sink: S) -> Result<(), SequenceError>
    where
        S: Sink<T>,
    {
        let chain = self.take_chain()?;

        let mut elements = 0usize;
        for value in chain {
            sink.consume(&value);
            elements += 1;
        }

        trace!(elements, "sequence consumed by for_each");
        Ok(())
    }

    /// Evaluates the sequence, folding left-to-right from `identity`.
    ///
    /// Deterministic: combination order is the element order.
    pub fn reduce<R, F>(&mut self, identity: R, combiner: F) -> Result<R, SequenceError>
    where
        F: Fn(R, T) -> R,
    {
        let chain = self.take_chain()?;

        let mut elements = 0usize;
        let folded = chain.fold(identity, |acc, value| {
            elements += 1;
            combiner(acc, value)
        });

        trace!(elements, "sequence consumed by reduce");
        Ok(folded)
    }

    /// Evaluates the sequence and materializes the surviving elements into
    /// an ordered container.
    pub fn collect(&mut self) -> Result<Vec<T>, SequenceError> {
        let chain = self.take_chain()?;
        let values: Vec<T> = chain.collect();

        trace!(elements = values.len(), "sequence consumed by collect");
        Ok(values)
    }

    /// Evaluates the sequence and returns the number of surviving elements.
    pub fn count(&mut self) -> Result<usize, SequenceError> {
        let chain = self.take_chain()?;
        let elements = chain.count();

        trace!(elements, "sequence consumed by count");
        Ok(elements)
    }

    /// Returns true if a terminal operation has evaluated this sequence.
    pub fn is_consumed(&self) -> bool {
        matches!(self.state, Stage::Consumed)
    }
}

impl<T: 'static> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::of(values)
    }
}

impl<T: 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            Stage::Unconsumed(_) => f.write_str("Sequence(unconsumed)"),
            Stage::Consumed => f.write_str("Sequence(consumed)"),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from sequence operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A terminal operation already evaluated this sequence instance.
    #[error("sequence already consumed by a terminal operation")]
    AlreadyConsumed,
}
