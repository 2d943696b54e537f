//! Extension traits for starting chains ergonomically.

pub mod chainable;

pub use chainable::IntoChain;
