//! # riffle-bench: Performance benchmarks for Riffle
//!
//! ## Benchmarks
//!
//! - **sequence**: Pipeline construction and terminal evaluation
//! - **predicate**: Combinator evaluation overhead vs. hand-written closures
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p riffle-bench
//!
//! # Run a specific benchmark
//! cargo bench -p riffle-bench --bench sequence
//!
//! # Save a baseline for comparison
//! cargo bench -p riffle-bench --bench sequence -- --save-baseline main
//! ```
