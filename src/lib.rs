//! Baseline global alignment distance with a wavefront traversal.
//!
//! This crate computes the edit (global alignment) distance between two
//! symbol sequences with the classic O(n·m) dynamic program, filling the
//! distance matrix in *anti-diagonal* order.
//!
//! ## Core idea
//! 1. Price insertions and substitutions with a [`CostModel`].
//! 2. Let [`AlignmentEngine`] fill the `(len(A)+1) x (len(B)+1)` matrix one
//!    anti-diagonal `i + j = c` at a time.
//! 3. Read the distance from the last cell.
//!
//! The cells of one anti-diagonal never depend on each other, only on the
//! two previous diagonals. That is what lets faster variants (a rolling
//! window of diagonals, a parallel sweep with a barrier per diagonal) be
//! benchmarked against this baseline with bit-identical results.
//!
//! ## Quick start
//! ```
//! use wavefront_nw::{distance, models::UnitCost};
//!
//! assert_eq!(distance(b"ACGT", b"ACGT", &UnitCost), Ok(0));
//! assert_eq!(distance(b"aaaa", b"bbbb", &UnitCost), Ok(4));
//! ```
//!
//! ## Cost models
//! The `models` module contains:
//! - [`UnitCost`](models::UnitCost): plain edit distance,
//! - [`LinearCost`](models::LinearCost): constant gap and mismatch costs,
//! - [`CostTable`](models::CostTable): per-symbol tables, asymmetric allowed,
//! - [`FnCost`](models::FnCost): any pair of closures.
//!
//! Negative costs break the minimality of the recurrence and are reported as
//! [`AlignError::InvalidCostModel`].

pub mod builder;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod models;
pub mod sequence;
pub mod traits;
pub mod utils;

pub use crate::builder::AlignmentEngineBuilder;
pub use crate::engine::{distance, AlignmentEngine, Traversal};
pub use crate::error::{AlignError, CostQuery, Result};
pub use crate::matrix::DistanceMatrix;
pub use crate::sequence::Sequence;
pub use crate::traits::{Cost, CostModel, Distance};
