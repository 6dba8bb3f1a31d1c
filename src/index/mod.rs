//! Reverse index from value to the number of keys holding it.
//!
//! Each scope owns one index; it has no lifecycle of its own and is only
//! mutated alongside the scope's key map.

mod counts;

pub use counts::ValueIndex;
