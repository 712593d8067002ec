//! Data structures and algorithm.

pub mod cmp;
