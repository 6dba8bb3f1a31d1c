//! One layer of transactional isolation.

mod layer;

pub use layer::Scope;
