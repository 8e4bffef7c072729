//! Mutable engine state.

pub mod selection;

pub use selection::SelectionState;
