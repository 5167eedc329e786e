//! Ready-made [`CostModel`](crate::traits::CostModel) implementations.
//!
//! - [`unit`]    : insertion 1, substitution 0/1 (plain edit distance).
//! - [`linear`]  : constant insertion and mismatch costs.
//! - [`table`]   : per-symbol insertion costs and a full substitution table.
//! - [`closure`] : a pair of closures.

pub mod closure;
pub mod linear;
pub mod table;
pub mod unit;

pub use closure::FnCost;
pub use linear::LinearCost;
pub use table::CostTable;
pub use unit::UnitCost;
