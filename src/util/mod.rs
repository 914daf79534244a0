//! Numeric primitives backing CPM search heuristics.

pub mod arrays;
pub mod fast_math;
